//! Projects the expense collection into the recent transaction list.

use maud::{Markup, html};

use crate::expense::Expense;

/// The maximum number of expenses shown in the recent transaction list.
pub const RECENT_TRANSACTION_COUNT: usize = 5;

/// The icon used for categories without a dedicated icon.
pub const DEFAULT_CATEGORY_ICON: &str = "📌";

/// The element ID of the transaction list, used as an out-of-band swap target.
pub const TRANSACTION_LIST_ID: &str = "transaction-list";

/// A display-ready projection of an [Expense].
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    /// The symbol for the expense's category.
    pub icon: &'static str,
    /// The expense category.
    pub category: String,
    /// The account the expense was paid from.
    pub account: String,
    /// When the expense was recorded.
    pub date: String,
    /// The amount with a currency prefix and two decimal places, e.g. "$25.50".
    pub formatted_amount: String,
}

impl From<&Expense> for DisplayRow {
    fn from(expense: &Expense) -> Self {
        Self {
            icon: category_icon(&expense.category),
            category: expense.category.clone(),
            account: expense.account.clone(),
            date: expense.date.clone(),
            formatted_amount: format_amount(expense.amount),
        }
    }
}

/// Get the icon for `category`, falling back to [DEFAULT_CATEGORY_ICON].
pub fn category_icon(category: &str) -> &'static str {
    match category {
        "Food" => "🍔",
        "Transport" => "🚗",
        "Utilities" => "💡",
        "Entertainment" => "🎮",
        "Others" => "🔖",
        _ => DEFAULT_CATEGORY_ICON,
    }
}

/// Format `amount` with a dollar sign and exactly two decimal places.
pub fn format_amount(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Select the last [RECENT_TRANSACTION_COUNT] expenses, most recent first.
pub fn render(expenses: &[Expense]) -> Vec<DisplayRow> {
    let start = expenses.len().saturating_sub(RECENT_TRANSACTION_COUNT);

    expenses[start..].iter().rev().map(DisplayRow::from).collect()
}

/// The recent transaction list.
///
/// The whole list is replaced on every render. Set `swap_out_of_band` when
/// the list is returned next to another fragment so htmx swaps it by ID.
pub fn transaction_list_view(rows: &[DisplayRow], swap_out_of_band: bool) -> Markup {
    html! {
        section
            id=(TRANSACTION_LIST_ID)
            hx-swap-oob=[swap_out_of_band.then_some("true")]
            class="w-full max-w-md space-y-2"
        {
            h2 class="text-lg font-bold" { "Recent Transactions" }

            @if rows.is_empty() {
                p class="text-sm text-gray-500 dark:text-gray-400"
                {
                    "No expenses recorded yet."
                }
            }

            ul class="space-y-2"
            {
                @for row in rows {
                    li
                        class="transaction flex items-center gap-4 p-3 rounded bg-white
                            dark:bg-gray-800 border border-gray-200 dark:border-gray-700"
                    {
                        div class="category-icon text-2xl" { (row.icon) }

                        div class="transaction-details flex flex-col flex-1 text-sm"
                        {
                            strong { (row.category) }
                            span { (row.account) }
                            span class="date text-xs text-gray-500 dark:text-gray-400" { (row.date) }
                        }

                        div class="amount font-semibold" { (row.formatted_amount) }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod render_tests {
    use crate::expense::{Expense, ExpenseId};

    use super::{DEFAULT_CATEGORY_ICON, category_icon, format_amount, render};

    fn expense(n: usize) -> Expense {
        Expense {
            id: ExpenseId::new_unchecked(&n.to_string()),
            amount: n as f64 + 0.5,
            category: "Food".to_owned(),
            account: "Cash".to_owned(),
            date: format!("1/{n}/2026, 9:00:00 AM"),
        }
    }

    fn expenses(count: usize) -> Vec<Expense> {
        (1..=count).map(expense).collect()
    }

    fn rendered_amounts(count: usize) -> Vec<String> {
        render(&expenses(count))
            .into_iter()
            .map(|row| row.formatted_amount)
            .collect()
    }

    #[test]
    fn empty_collection_renders_nothing() {
        assert!(render(&[]).is_empty());
    }

    #[test]
    fn fewer_than_five_renders_all_most_recent_first() {
        assert_eq!(rendered_amounts(3), ["$3.50", "$2.50", "$1.50"]);
    }

    #[test]
    fn exactly_five_renders_all_most_recent_first() {
        assert_eq!(
            rendered_amounts(5),
            ["$5.50", "$4.50", "$3.50", "$2.50", "$1.50"]
        );
    }

    #[test]
    fn six_renders_last_five_most_recent_first() {
        assert_eq!(
            rendered_amounts(6),
            ["$6.50", "$5.50", "$4.50", "$3.50", "$2.50"]
        );
    }

    #[test]
    fn render_is_idempotent() {
        let collection = expenses(7);

        assert_eq!(render(&collection), render(&collection));
    }

    #[test]
    fn known_categories_have_icons() {
        assert_eq!(category_icon("Food"), "🍔");
        assert_eq!(category_icon("Transport"), "🚗");
        assert_eq!(category_icon("Utilities"), "💡");
        assert_eq!(category_icon("Entertainment"), "🎮");
        assert_eq!(category_icon("Others"), "🔖");
    }

    #[test]
    fn unknown_categories_use_default_icon() {
        assert_eq!(category_icon("Pets"), DEFAULT_CATEGORY_ICON);
        assert_eq!(category_icon("food"), DEFAULT_CATEGORY_ICON);
        assert_eq!(category_icon(""), DEFAULT_CATEGORY_ICON);
    }

    #[test]
    fn amounts_have_two_decimal_places() {
        assert_eq!(format_amount(25.5), "$25.50");
        assert_eq!(format_amount(3.0), "$3.00");
        assert_eq!(format_amount(1234.567), "$1234.57");
    }

    #[test]
    fn row_copies_expense_fields() {
        let rows = render(&[expense(2)]);
        let row = &rows[0];

        assert_eq!(row.icon, "🍔");
        assert_eq!(row.category, "Food");
        assert_eq!(row.account, "Cash");
        assert_eq!(row.date, "1/2/2026, 9:00:00 AM");
    }
}

#[cfg(test)]
mod transaction_list_view_tests {
    use scraper::{Html, Selector};

    use crate::{
        expense::{render, validate_and_create},
        test_utils::assert_valid_html,
    };

    use super::transaction_list_view;

    #[test]
    fn lists_one_item_per_row() {
        let expenses = vec![
            validate_and_create("25.50", "Food", "Cash").unwrap(),
            validate_and_create("4", "Pets", "Card").unwrap(),
        ];

        let markup = transaction_list_view(&render(&expenses), false);
        let html = Html::parse_fragment(&markup.into_string());
        assert_valid_html(&html);

        let items = html
            .select(&Selector::parse("li.transaction").unwrap())
            .collect::<Vec<_>>();
        assert_eq!(items.len(), 2, "want 2 list items, got {}", items.len());

        let first = items[0].text().collect::<String>();
        assert!(first.contains("📌"), "got {first:?}");
        assert!(first.contains("Pets"), "got {first:?}");
        assert!(first.contains("$4.00"), "got {first:?}");

        let second = items[1].text().collect::<String>();
        assert!(second.contains("🍔"), "got {second:?}");
        assert!(second.contains("$25.50"), "got {second:?}");
    }

    #[test]
    fn shows_empty_state() {
        let markup = transaction_list_view(&[], false);
        let text = Html::parse_fragment(&markup.into_string())
            .root_element()
            .text()
            .collect::<String>();

        assert!(text.contains("No expenses recorded yet."), "got {text:?}");
    }

    #[test]
    fn out_of_band_flag_sets_swap_attribute() {
        let selector = Selector::parse("#transaction-list").unwrap();

        let in_band = Html::parse_fragment(&transaction_list_view(&[], false).into_string());
        let section = in_band.select(&selector).next().unwrap();
        assert_eq!(section.value().attr("hx-swap-oob"), None);

        let out_of_band = Html::parse_fragment(&transaction_list_view(&[], true).into_string());
        let section = out_of_band.select(&selector).next().unwrap();
        assert_eq!(section.value().attr("hx-swap-oob"), Some("true"));
    }
}
