//! Core expense domain types and the validated construction path.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};
use uuid::Uuid;

/// The categories offered by the expense form.
///
/// Any non-empty category is accepted, these are only suggestions.
pub const RECOMMENDED_CATEGORIES: [&str; 5] =
    ["Food", "Transport", "Utilities", "Entertainment", "Others"];

/// How the creation time of an expense is displayed, e.g. "10/17/2026, 3:04:05 PM".
const DISPLAY_DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!(
    "[month padding:none]/[day padding:none]/[year], [hour repr:12 padding:none]:[minute]:[second] [period]"
);

/// A globally unique, immutable identifier for an expense.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(String);

impl ExpenseId {
    /// Generate a new random ID.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap an existing ID string.
    ///
    /// The caller should ensure that the string is not already used by another expense.
    pub fn new_unchecked(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl AsRef<str> for ExpenseId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for ExpenseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single user-entered expense.
///
/// To create a new `Expense`, use [validate_and_create] or [validate_and_create_at].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// The ID of the expense.
    pub id: ExpenseId,
    /// The amount of money spent, always greater than zero.
    pub amount: f64,
    /// What the money was spent on, e.g. "Food".
    pub category: String,
    /// Where the money came from, e.g. "Cash".
    pub account: String,
    /// When the expense was recorded, formatted for display.
    pub date: String,
}

impl Expense {
    /// Whether the expense satisfies the invariants that [validate_and_create]
    /// enforces, used to vet expenses that come from storage.
    pub fn is_valid(&self) -> bool {
        is_valid_amount(self.amount)
            && !self.category.trim().is_empty()
            && !self.account.trim().is_empty()
    }
}

/// The form field that a [ValidationError] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// The amount input.
    Amount,
    /// The category select.
    Category,
    /// The account input.
    Account,
}

impl FormField {
    /// The name of the form input for this field.
    pub fn name(self) -> &'static str {
        match self {
            FormField::Amount => "amount",
            FormField::Category => "category",
            FormField::Account => "account",
        }
    }
}

/// The reasons raw form values can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The amount is not a number, or is not greater than zero.
    #[error("Please enter a valid amount!")]
    InvalidAmount,
    /// The category is empty or only whitespace.
    #[error("Please select a category!")]
    MissingCategory,
    /// The account is empty or only whitespace.
    #[error("Please select an account!")]
    MissingAccount,
}

impl ValidationError {
    /// The form field that caused the error.
    pub fn field(self) -> FormField {
        match self {
            ValidationError::InvalidAmount => FormField::Amount,
            ValidationError::MissingCategory => FormField::Category,
            ValidationError::MissingAccount => FormField::Account,
        }
    }
}

/// Validate raw form values and create an expense timestamped with the current UTC time.
///
/// See [validate_and_create_at] for the validation rules.
pub fn validate_and_create(
    raw_amount: &str,
    raw_category: &str,
    raw_account: &str,
) -> Result<Expense, ValidationError> {
    validate_and_create_at(
        raw_amount,
        raw_category,
        raw_account,
        OffsetDateTime::now_utc(),
    )
}

/// Validate raw form values and create an expense recorded at `created_at`.
///
/// The rules are checked in order and the first one that fails is returned:
/// 1. `raw_amount` must parse as a finite number greater than zero,
/// 2. `raw_category` must not be blank,
/// 3. `raw_account` must not be blank.
///
/// Category and account are stored trimmed.
///
/// # Errors
///
/// Returns the [ValidationError] for the first rule that fails.
pub fn validate_and_create_at(
    raw_amount: &str,
    raw_category: &str,
    raw_account: &str,
    created_at: OffsetDateTime,
) -> Result<Expense, ValidationError> {
    let amount = parse_amount(raw_amount)?;

    let category = raw_category.trim();
    if category.is_empty() {
        return Err(ValidationError::MissingCategory);
    }

    let account = raw_account.trim();
    if account.is_empty() {
        return Err(ValidationError::MissingAccount);
    }

    Ok(Expense {
        id: ExpenseId::generate(),
        amount,
        category: category.to_owned(),
        account: account.to_owned(),
        date: format_display_date(created_at),
    })
}

fn parse_amount(raw_amount: &str) -> Result<f64, ValidationError> {
    match raw_amount.trim().parse::<f64>() {
        Ok(amount) if is_valid_amount(amount) => Ok(amount),
        _ => Err(ValidationError::InvalidAmount),
    }
}

fn is_valid_amount(amount: f64) -> bool {
    amount.is_finite() && amount > 0.0
}

fn format_display_date(date_time: OffsetDateTime) -> String {
    date_time
        .format(DISPLAY_DATE_FORMAT)
        .unwrap_or_else(|error| {
            tracing::warn!("could not format {date_time} for display: {error}");
            date_time.to_string()
        })
}
