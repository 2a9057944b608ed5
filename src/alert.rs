//! Alert system for displaying success and error messages to users.
//!
//! Alerts are swapped into the page's alert container, either as the target
//! of a request (`hx-target`/`hx-target-error`) or out-of-band alongside
//! another fragment. The page script removes them after
//! [DISMISS_AFTER_MS] milliseconds.

use axum::response::{Html, IntoResponse, Response};
use maud::{Markup, html};

/// How long a transient message stays on screen before it is dismissed.
pub const DISMISS_AFTER_MS: u32 = 3000;

/// The element ID of the container that alerts are swapped into.
pub const ALERT_CONTAINER_ID: &str = "alert-container";

const ALERT_CONTAINER_STYLE: &str =
    "position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;";

/// A transient notice for the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// An operation succeeded, with some extra details.
    Success { message: String, details: String },
    /// An operation succeeded.
    SuccessSimple { message: String },
    /// An operation failed, `details` should tell the user what to do next.
    Error { message: String, details: String },
}

impl Alert {
    /// Render the alert box.
    pub fn into_html(self) -> Markup {
        let (style, role, message, details) = match self {
            Alert::Success { message, details } => (
                "text-green-800 bg-green-50 border-green-300 \
                dark:bg-gray-800 dark:text-green-400 dark:border-green-800",
                "status",
                message,
                details,
            ),
            Alert::SuccessSimple { message } => (
                "text-green-800 bg-green-50 border-green-300 \
                dark:bg-gray-800 dark:text-green-400 dark:border-green-800",
                "status",
                message,
                String::new(),
            ),
            Alert::Error { message, details } => (
                "text-red-800 bg-red-50 border-red-300 \
                dark:bg-gray-800 dark:text-red-400 dark:border-red-800",
                "alert",
                message,
                details,
            ),
        };

        html! {
            div
                class={ "p-4 mb-4 text-sm rounded-lg border " (style) }
                role=(role)
                data-dismiss-after-ms=(DISMISS_AFTER_MS)
            {
                p class="font-medium" { (message) }

                @if !details.is_empty() {
                    p { (details) }
                }
            }
        }
    }

    /// Render the alert wrapped in the alert container, marked for an
    /// out-of-band swap so it can ride along with another fragment.
    pub fn into_oob_html(self) -> Markup {
        html! {
            div
                id=(ALERT_CONTAINER_ID)
                hx-swap-oob="true"
                class="w-full max-w-md px-4"
                style=(ALERT_CONTAINER_STYLE)
            {
                (self.into_html())
            }
        }
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        Html(self.into_html().into_string()).into_response()
    }
}

/// The empty alert container placed at the bottom of every page.
pub fn alert_container() -> Markup {
    html! {
        div
            id=(ALERT_CONTAINER_ID)
            class="hidden w-full max-w-md px-4"
            style=(ALERT_CONTAINER_STYLE)
        {}
    }
}
