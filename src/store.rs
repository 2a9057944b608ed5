//! Durable key-value storage for the expense collection.
//!
//! The whole collection is stored as a JSON array under a single key, and is
//! rewritten in full on every save.

use std::collections::HashSet;

use rusqlite::{Connection, OptionalExtension};

use crate::{Error, expense::Expense};

/// The key that the expense collection is stored under.
pub const EXPENSES_KEY: &str = "expenses";

/// Create the tables the application needs.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    create_local_storage_table(connection)?;

    Ok(())
}

/// Initialize the key-value table.
pub fn create_local_storage_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS local_storage (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL
        );",
        (),
    )?;

    Ok(())
}

/// Get the value stored under `key`, if any.
pub fn get_item(key: &str, connection: &Connection) -> Result<Option<String>, Error> {
    connection
        .prepare("SELECT value FROM local_storage WHERE key = :key;")?
        .query_row(&[(":key", key)], |row| row.get(0))
        .optional()
        .map_err(Error::from)
}

/// Store `value` under `key`, replacing any existing value in a single statement.
pub fn set_item(key: &str, value: &str, connection: &Connection) -> Result<(), Error> {
    connection.execute(
        "INSERT INTO local_storage (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
        (key, value),
    )?;

    Ok(())
}

/// Load the stored expenses, treating a missing value as an empty collection.
///
/// # Errors
/// This function will return a:
/// - [Error::CorruptStore] if the stored value is not a valid expense collection,
/// - or [Error::SqlError] if the value could not be read.
pub fn try_load_expenses(connection: &Connection) -> Result<Vec<Expense>, Error> {
    let Some(text) = get_item(EXPENSES_KEY, connection)? else {
        return Ok(Vec::new());
    };

    let expenses: Vec<Expense> =
        serde_json::from_str(&text).map_err(|error| Error::CorruptStore(error.to_string()))?;

    if let Some(invalid) = expenses.iter().find(|expense| !expense.is_valid()) {
        return Err(Error::CorruptStore(format!(
            "expense {} has an invalid amount, category or account",
            invalid.id
        )));
    }

    let mut seen_ids = HashSet::with_capacity(expenses.len());
    if let Some(duplicate) = expenses.iter().find(|expense| !seen_ids.insert(&expense.id)) {
        return Err(Error::CorruptStore(format!(
            "the ID {} is used by more than one expense",
            duplicate.id
        )));
    }

    Ok(expenses)
}

/// Load the stored expenses.
///
/// Missing, unreadable or malformed data is logged and treated as an empty
/// collection.
pub fn load_expenses(connection: &Connection) -> Vec<Expense> {
    match try_load_expenses(connection) {
        Ok(expenses) => expenses,
        Err(Error::CorruptStore(reason)) => {
            tracing::warn!("Ignoring malformed stored expenses: {reason}");
            Vec::new()
        }
        Err(error) => {
            tracing::error!("Could not read stored expenses: {error}");
            Vec::new()
        }
    }
}

/// Overwrite the stored expenses with `expenses`.
///
/// # Errors
/// This function will return a:
/// - [Error::JSONSerializationError] if `expenses` could not be serialized,
/// - or [Error::SqlError] if the value could not be written.
pub fn save_expenses(expenses: &[Expense], connection: &Connection) -> Result<(), Error> {
    let text = serde_json::to_string(expenses)
        .map_err(|error| Error::JSONSerializationError(error.to_string()))?;

    set_item(EXPENSES_KEY, &text, connection)
}
