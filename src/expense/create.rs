//! Defines the endpoint for adding a new expense.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since it accepts repeated and missing keys
// without rejecting the whole request.
use axum_extra::extract::Form;
use maud::html;
use rusqlite::Connection;

use crate::{
    AppState, Error,
    alert::Alert,
    expense::{
        ExpenseSession,
        form::{ExpenseForm, expense_form_view},
        transaction_list::{render, transaction_list_view},
        validate_and_create_at,
    },
    timezone::now_in_timezone,
};

/// The state needed to add an expense.
#[derive(Debug, Clone)]
pub struct CreateExpenseState {
    /// The database connection for persisting expenses.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The in-memory expense collection.
    pub session: Arc<Mutex<ExpenseSession>>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for CreateExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            session: state.session.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// A route handler for adding a new expense.
///
/// On success responds with an empty form, and swaps in the refreshed
/// transaction list and a success alert out-of-band. If validation fails the
/// form is returned with the submitted values and the error message.
pub async fn create_expense_endpoint(
    State(state): State<CreateExpenseState>,
    Form(form): Form<ExpenseForm>,
) -> Response {
    let now = match now_in_timezone(&state.local_timezone) {
        Ok(now) => now,
        Err(error) => {
            tracing::error!("Invalid timezone {}", state.local_timezone);
            return error.into_alert_response();
        }
    };

    let expense = match validate_and_create_at(&form.amount, &form.category, &form.account, now)
    {
        Ok(expense) => expense,
        Err(error) => {
            tracing::debug!("Rejected expense form {form:?}: {error}");
            return expense_form_view(&form, Some(error)).into_response();
        }
    };

    let mut session = match state.session.lock() {
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

    let expense_id = expense.id.clone();
    if let Err(error) = session.append(expense, &connection) {
        tracing::error!("could not add expense: {error}");
        return error.into_alert_response();
    }

    tracing::info!("Added expense {expense_id}");

    let rows = render(session.expenses());
    let success = Alert::SuccessSimple {
        message: "Expense added successfully!".to_owned(),
    };

    html! {
        (expense_form_view(&ExpenseForm::default(), None))
        (transaction_list_view(&rows, true))
        (success.into_oob_html())
    }
    .into_response()
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode, response::IntoResponse};
    use axum_extra::extract::Form;
    use rusqlite::Connection;
    use scraper::Selector;

    use crate::{
        expense::{ExpenseSession, form::ExpenseForm},
        store::{initialize, load_expenses},
        test_utils::{
            assert_form_input_with_value, assert_valid_html, must_get_form, parse_html_fragment,
        },
    };

    use super::{CreateExpenseState, create_expense_endpoint};

    fn get_test_state() -> CreateExpenseState {
        let conn = Connection::open_in_memory().expect("Could not open in-memory SQLite database");
        initialize(&conn).expect("Could not initialize database");

        CreateExpenseState {
            db_connection: Arc::new(Mutex::new(conn)),
            session: Arc::new(Mutex::new(ExpenseSession::default())),
            local_timezone: "Etc/UTC".to_owned(),
        }
    }

    fn form(amount: &str, category: &str, account: &str) -> ExpenseForm {
        ExpenseForm {
            amount: amount.to_owned(),
            category: category.to_owned(),
            account: account.to_owned(),
        }
    }

    #[tokio::test]
    async fn can_create_expense() {
        let state = get_test_state();

        let response =
            create_expense_endpoint(State(state.clone()), Form(form("25.50", "Food", "Cash")))
                .await
                .into_response();

        assert_eq!(response.status(), StatusCode::OK);

        let session = state.session.lock().unwrap();
        assert_eq!(session.expenses().len(), 1);
        let expense = &session.expenses()[0];
        assert_eq!(expense.amount, 25.5);
        assert_eq!(expense.category, "Food");
        assert_eq!(expense.account, "Cash");

        let stored = load_expenses(&state.db_connection.lock().unwrap());
        assert_eq!(stored, session.expenses());
    }

    #[tokio::test]
    async fn success_returns_empty_form_list_and_alert() {
        let state = get_test_state();

        let response =
            create_expense_endpoint(State(state), Form(form("25.50", "Food", "Cash")))
                .await
                .into_response();

        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);

        let form = must_get_form(&html);
        assert_form_input_with_value(&form, "amount", "number", "");
        assert_form_input_with_value(&form, "account", "text", "");

        let list = html
            .select(&Selector::parse("#transaction-list").unwrap())
            .next()
            .expect("No transaction list found");
        assert_eq!(list.value().attr("hx-swap-oob"), Some("true"));
        let text = list.text().collect::<String>();
        assert!(text.contains("🍔"), "got {text:?}");
        assert!(text.contains("$25.50"), "got {text:?}");

        let alert = html
            .select(&Selector::parse("#alert-container").unwrap())
            .next()
            .expect("No alert found");
        let text = alert.text().collect::<String>();
        assert!(text.contains("Expense added successfully!"), "got {text:?}");
    }

    #[tokio::test]
    async fn invalid_amount_is_rejected() {
        let state = get_test_state();

        let response =
            create_expense_endpoint(State(state.clone()), Form(form("-5", "Food", "Cash")))
                .await
                .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(state.session.lock().unwrap().expenses().is_empty());
        assert!(load_expenses(&state.db_connection.lock().unwrap()).is_empty());

        let html = parse_html_fragment(response).await;
        let form = must_get_form(&html);
        assert_form_input_with_value(&form, "amount", "number", "-5");
        let message = html
            .select(&Selector::parse("#amount-error").unwrap())
            .next()
            .expect("No amount error found");
        assert_eq!(
            message.text().collect::<String>().trim(),
            "Please enter a valid amount!"
        );
    }

    #[tokio::test]
    async fn missing_category_is_rejected() {
        let state = get_test_state();

        let response =
            create_expense_endpoint(State(state.clone()), Form(form("10", "", "Cash")))
                .await
                .into_response();

        assert!(state.session.lock().unwrap().expenses().is_empty());

        let html = parse_html_fragment(response).await;
        let message = html
            .select(&Selector::parse("#category-error").unwrap())
            .next()
            .expect("No category error found");
        assert_eq!(
            message.text().collect::<String>().trim(),
            "Please select a category!"
        );
    }

    #[tokio::test]
    async fn invalid_timezone_is_reported() {
        let state = CreateExpenseState {
            local_timezone: "Middle/Earth".to_owned(),
            ..get_test_state()
        };

        let response =
            create_expense_endpoint(State(state.clone()), Form(form("10", "Food", "Cash")))
                .await
                .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(state.session.lock().unwrap().expenses().is_empty());
    }

    #[tokio::test]
    async fn write_failure_is_reported_and_not_kept() {
        // Without the storage table every write fails.
        let state = CreateExpenseState {
            db_connection: Arc::new(Mutex::new(Connection::open_in_memory().unwrap())),
            ..get_test_state()
        };

        let response =
            create_expense_endpoint(State(state.clone()), Form(form("10", "Food", "Cash")))
                .await
                .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(state.session.lock().unwrap().expenses().is_empty());
    }
}
