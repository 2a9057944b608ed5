use maud::{Markup, html};
use serde::{Deserialize, Serialize};

use crate::{
    alert::DISMISS_AFTER_MS,
    endpoints,
    expense::{FormField, RECOMMENDED_CATEGORIES, ValidationError},
    html::{
        BUTTON_PRIMARY_STYLE, FORM_ERROR_MESSAGE_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_ERROR_STYLE, FORM_TEXT_INPUT_STYLE,
    },
};

/// The element ID of the expense form.
pub const EXPENSE_FORM_ID: &str = "expense-form";

/// The raw values submitted by the expense form.
///
/// Every field is kept as text so that validation, not deserialization,
/// decides what is acceptable.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseForm {
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub account: String,
}

/// The expense form, pre-filled with `values`.
///
/// If `error` is set, its message is shown under the field it refers to and
/// the page script hides it again after [DISMISS_AFTER_MS] milliseconds and
/// restores the field's normal style.
pub fn expense_form_view(values: &ExpenseForm, error: Option<ValidationError>) -> Markup {
    let error_for = |field: FormField| error.filter(|error| error.field() == field);
    let input_style = |field: FormField| {
        if error_for(field).is_some() {
            FORM_TEXT_INPUT_ERROR_STYLE
        } else {
            FORM_TEXT_INPUT_STYLE
        }
    };
    // Lets the page script put the normal style back when the message is dismissed.
    let valid_style = |field: FormField| error_for(field).map(|_| FORM_TEXT_INPUT_STYLE);
    let invalid = |field: FormField| error_for(field).map(|_| "true");
    let field_error = |field: FormField| {
        html! {
            @if let Some(error) = error_for(field) {
                p
                    id={ (field.name()) "-error" }
                    class=(FORM_ERROR_MESSAGE_STYLE)
                    data-dismiss-after-ms=(DISMISS_AFTER_MS)
                    data-error-for=(field.name())
                {
                    (error.to_string())
                }
            }
        }
    };

    html! {
        form
            id=(EXPENSE_FORM_ID)
            hx-post=(endpoints::EXPENSES_API)
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            class="w-full space-y-4 md:space-y-6"
        {
            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

                input
                    name="amount"
                    id="amount"
                    type="number"
                    step="0.01"
                    min="0.01"
                    placeholder="0.00"
                    required
                    autofocus
                    value=(values.amount)
                    aria-invalid=[invalid(FormField::Amount)]
                    data-valid-class=[valid_style(FormField::Amount)]
                    class=(input_style(FormField::Amount));

                (field_error(FormField::Amount))
            }

            div
            {
                label for="category" class=(FORM_LABEL_STYLE) { "Category" }

                select
                    name="category"
                    id="category"
                    required
                    aria-invalid=[invalid(FormField::Category)]
                    data-valid-class=[valid_style(FormField::Category)]
                    class=(input_style(FormField::Category))
                {
                    option value="" { "Select a category" }

                    @for category in RECOMMENDED_CATEGORIES {
                        option value=(category) selected[values.category == category] { (category) }
                    }
                }

                (field_error(FormField::Category))
            }

            div
            {
                label for="account" class=(FORM_LABEL_STYLE) { "Account" }

                input
                    name="account"
                    id="account"
                    type="text"
                    placeholder="Cash"
                    required
                    value=(values.account)
                    aria-invalid=[invalid(FormField::Account)]
                    data-valid-class=[valid_style(FormField::Account)]
                    class=(input_style(FormField::Account));

                (field_error(FormField::Account))
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Expense" }
        }
    }
}
