//! Export of the expense collection as a downloadable JSON file.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{IntoResponse, Response},
};

use crate::{
    AppState, Error,
    alert::Alert,
    expense::{Expense, ExpenseSession},
    html::format_count,
};

/// The name the downloaded export is saved under.
pub const EXPORT_FILE_NAME: &str = "expenses.json";

/// A file to hand to the user for download.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    /// The suggested file name.
    pub file_name: &'static str,
    /// The pretty-printed JSON array of expenses.
    pub bytes: Vec<u8>,
}

/// Serialize `expenses` as a pretty-printed JSON array in collection order.
///
/// An empty collection produces `[]`.
///
/// # Errors
/// Returns [Error::JSONSerializationError] if the expenses cannot be serialized.
pub fn export_expenses(expenses: &[Expense]) -> Result<ExportArtifact, Error> {
    let bytes = serde_json::to_vec_pretty(expenses)
        .map_err(|error| Error::JSONSerializationError(error.to_string()))?;

    Ok(ExportArtifact {
        file_name: EXPORT_FILE_NAME,
        bytes,
    })
}

impl IntoResponse for ExportArtifact {
    fn into_response(self) -> Response {
        (
            [
                (CONTENT_TYPE, "application/json".to_owned()),
                (
                    CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", self.file_name),
                ),
            ],
            self.bytes,
        )
            .into_response()
    }
}

/// The state needed to export the expenses.
#[derive(Debug, Clone)]
pub struct ExportState {
    pub session: Arc<Mutex<ExpenseSession>>,
}

impl FromRef<AppState> for ExportState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            session: state.session.clone(),
        }
    }
}

/// A route handler that responds with the expense collection as a JSON attachment.
pub async fn export_expenses_endpoint(State(state): State<ExportState>) -> Response {
    let session = match state.session.lock() {
        Ok(session) => session,
        Err(error) => {
            tracing::error!("could not acquire session lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    match export_expenses(session.expenses()) {
        Ok(artifact) => {
            tracing::info!("Exporting {} expense(s)", session.expenses().len());
            artifact.into_response()
        }
        Err(error) => error.into_response(),
    }
}

/// A route handler for the success alert shown when the user starts an export.
pub async fn export_notice_endpoint(State(state): State<ExportState>) -> Response {
    let count = match state.session.lock() {
        Ok(session) => session.expenses().len(),
        Err(error) => {
            tracing::error!("could not acquire session lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    Alert::Success {
        message: "Expenses exported successfully!".to_owned(),
        details: format!(
            "Exported {} expense(s) to {EXPORT_FILE_NAME}.",
            format_count(count)
        ),
    }
    .into_response()
}
