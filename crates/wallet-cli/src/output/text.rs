//! Text and table output formatting for records and balances.

use wallet_core::{Balance, Record};

use crate::ui::format::{group_thousands, truncate};
use crate::ui::{kv, table, UiContext};

const TABLE_HEADERS: [&str; 5] = ["#", "Date", "Category", "Amount", "Description"];
const DESCRIPTION_WIDTH: usize = 40;

fn amount_text(ctx: &UiContext, amount: i64) -> String {
    if ctx.mode.is_pretty() {
        group_thousands(amount)
    } else {
        amount.to_string()
    }
}

/// Render income, expense, and net as key-value lines.
pub fn balance_lines(ctx: &UiContext, balance: &Balance) -> String {
    [
        kv(ctx, "Income", &amount_text(ctx, balance.income)),
        kv(ctx, "Expense", &amount_text(ctx, balance.expense)),
        kv(ctx, "Net", &amount_text(ctx, balance.net)),
    ]
    .join("\n")
}

/// Render one record as labeled lines, the way it reads in the data file.
pub fn record_lines(ctx: &UiContext, index: usize, record: &Record) -> String {
    [
        kv(ctx, "Index", &index.to_string()),
        kv(ctx, "Date", &record.date_string()),
        kv(ctx, "Category", record.category().label()),
        kv(ctx, "Amount", &record.amount().to_string()),
        kv(ctx, "Description", record.description()),
    ]
    .join("\n")
}

/// Render indexed records as a table (pretty) or tab-separated rows (plain).
pub fn records_table(ctx: &UiContext, records: &[(usize, &Record)]) -> String {
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|(index, record)| {
            let description = if ctx.mode.is_pretty() {
                truncate(record.description(), DESCRIPTION_WIDTH)
            } else {
                record.description().to_string()
            };
            vec![
                index.to_string(),
                record.date_string(),
                record.category().label().to_string(),
                record.amount().to_string(),
                description,
            ]
        })
        .collect();
    table(ctx, &TABLE_HEADERS, &rows)
}
