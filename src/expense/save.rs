//! The explicit save action for the expense collection.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use rusqlite::Connection;

use crate::{AppState, Error, alert::Alert, expense::ExpenseSession, html::format_count};

/// The state needed to save the expenses.
#[derive(Debug, Clone)]
pub struct SaveExpensesState {
    pub db_connection: Arc<Mutex<Connection>>,
    pub session: Arc<Mutex<ExpenseSession>>,
}

impl FromRef<AppState> for SaveExpensesState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            session: state.session.clone(),
        }
    }
}

/// A route handler that writes the current collection to the store and
/// responds with an alert.
pub async fn save_expenses_endpoint(State(state): State<SaveExpensesState>) -> Response {
    let session = match state.session.lock() {
        Ok(session) => session,
        Err(error) => {
            tracing::error!("could not acquire session lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    if let Err(error) = session.save(&connection) {
        tracing::error!("could not save expenses: {error}");
        return error.into_alert_response();
    }

    let count = session.expenses().len();
    tracing::info!("Saved {count} expense(s)");

    Alert::Success {
        message: "Expenses saved!".to_owned(),
        details: format!("Saved {} expense(s) to local storage.", format_count(count)),
    }
    .into_response()
}
