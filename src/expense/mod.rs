//! Expense entry, the session's expense collection, and its save and export actions.

mod create;
mod domain;
mod export;
mod form;
mod page;
mod save;
mod session;
mod transaction_list;

pub use create::create_expense_endpoint;
pub use domain::{
    Expense, ExpenseId, FormField, RECOMMENDED_CATEGORIES, ValidationError, validate_and_create,
    validate_and_create_at,
};
pub use export::{
    EXPORT_FILE_NAME, ExportArtifact, export_expenses, export_expenses_endpoint,
    export_notice_endpoint,
};
pub use page::get_expense_page;
pub use save::save_expenses_endpoint;
pub use session::ExpenseSession;
pub use transaction_list::{DisplayRow, category_icon, render};
