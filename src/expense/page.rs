//! The expense page: entry form, save and export actions, and recent transactions.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error, endpoints,
    expense::{
        EXPORT_FILE_NAME, ExpenseSession,
        form::{ExpenseForm, expense_form_view},
        transaction_list::{DisplayRow, render, transaction_list_view},
    },
    html::{BUTTON_SECONDARY_STYLE, FORM_CONTAINER_STYLE, PAGE_CONTAINER_STYLE, base},
};

/// The state needed for the expense page.
#[derive(Debug, Clone)]
pub struct ExpensePageState {
    pub session: Arc<Mutex<ExpenseSession>>,
}

impl FromRef<AppState> for ExpensePageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            session: state.session.clone(),
        }
    }
}

/// Render the expense page with the current recent transactions.
pub async fn get_expense_page(State(state): State<ExpensePageState>) -> Result<Response, Error> {
    let session = state
        .session
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire session lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let rows = render(session.expenses());

    Ok(expense_page_view(&rows).into_response())
}

fn expense_page_view(rows: &[DisplayRow]) -> Markup {
    let content = html! {
        main class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="text-2xl font-bold" { "Expense Tracker" }

            div class=(FORM_CONTAINER_STYLE)
            {
                (expense_form_view(&ExpenseForm::default(), None))

                div class="flex w-full gap-4 mt-4"
                {
                    button
                        id="save-button"
                        type="button"
                        hx-post=(endpoints::SAVE_API)
                        hx-target="#alert-container"
                        hx-target-error="#alert-container"
                        class=(BUTTON_SECONDARY_STYLE)
                    {
                        "Save"
                    }

                    a
                        id="export-button"
                        href=(endpoints::EXPORT_API)
                        download=(EXPORT_FILE_NAME)
                        class=(BUTTON_SECONDARY_STYLE)
                    {
                        "Export"
                    }
                }

                // The download itself is a plain link, so the confirmation is
                // fetched separately when the link is clicked.
                div
                    id="export-notice"
                    hidden
                    hx-get=(endpoints::EXPORT_NOTICE_API)
                    hx-trigger="click from:#export-button"
                    hx-target="#alert-container"
                    hx-target-error="#alert-container"
                {}
            }

            (transaction_list_view(rows, false))
        }
    };

    base("Expenses", &content)
}
