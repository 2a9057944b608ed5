//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{Error, expense::ExpenseSession, html::format_count, store::initialize};

/// The state of the REST server.
///
/// Handlers that need both locks take the session lock first.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,

    /// The database connection
    pub db_connection: Arc<Mutex<Connection>>,

    /// The in-memory expense collection, loaded from the database at startup.
    pub session: Arc<Mutex<ExpenseSession>>,
}

impl AppState {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database and load the stored expenses.
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn new(db_connection: Connection, local_timezone: &str) -> Result<Self, Error> {
        initialize(&db_connection)?;

        let session = ExpenseSession::load(&db_connection);
        tracing::info!(
            "Loaded {} stored expense(s)",
            format_count(session.expenses().len())
        );

        Ok(Self {
            local_timezone: local_timezone.to_owned(),
            db_connection: Arc::new(Mutex::new(db_connection)),
            session: Arc::new(Mutex::new(session)),
        })
    }
}
