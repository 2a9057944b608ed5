//! The session-scoped owner of the in-memory expense collection.

use rusqlite::Connection;

use crate::{
    Error,
    expense::Expense,
    store::{load_expenses, save_expenses},
};

/// The expense collection for the running server, mirrored into the store
/// after every change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseSession {
    expenses: Vec<Expense>,
}

impl ExpenseSession {
    /// Create a session that starts with `expenses`.
    pub fn new(expenses: Vec<Expense>) -> Self {
        Self { expenses }
    }

    /// Start a session from the stored expenses, or an empty collection if
    /// there are none or they cannot be read.
    pub fn load(connection: &Connection) -> Self {
        Self::new(load_expenses(connection))
    }

    /// The expenses in the order they were added.
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Append `expense` and persist the whole collection.
    ///
    /// If the collection cannot be persisted the expense is dropped again, so
    /// the session never holds anything the store does not.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::DuplicateExpenseId] if an expense with the same ID is already in the session,
    /// - or any error from [save_expenses].
    pub fn append(&mut self, expense: Expense, connection: &Connection) -> Result<(), Error> {
        if self.expenses.iter().any(|existing| existing.id == expense.id) {
            return Err(Error::DuplicateExpenseId(expense.id));
        }

        self.expenses.push(expense);

        if let Err(error) = save_expenses(&self.expenses, connection) {
            self.expenses.pop();
            return Err(error);
        }

        Ok(())
    }

    /// Persist the current collection again.
    pub fn save(&self, connection: &Connection) -> Result<(), Error> {
        save_expenses(&self.expenses, connection)
    }
}
