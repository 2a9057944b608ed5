//! The API endpoints URIs.

/// The expense page with the entry form and the recent transactions.
pub const ROOT: &str = "/";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route for submitting the expense form.
pub const EXPENSES_API: &str = "/api/expenses";
/// The route for explicitly re-persisting the current expenses.
pub const SAVE_API: &str = "/api/save";
/// The route for downloading all expenses as a JSON file.
pub const EXPORT_API: &str = "/api/export";
/// The route for the alert confirming an export.
pub const EXPORT_NOTICE_API: &str = "/api/export/notice";
