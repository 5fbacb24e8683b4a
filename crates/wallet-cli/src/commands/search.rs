use wallet_core::record::normalize_label;
use wallet_core::SearchQuery;

use crate::app::AppContext;
use crate::cli::SearchArgs;
use crate::output::{records_json, records_table};
use crate::ui::{badge, header, Badge, OutputMode};

fn build_query(args: &SearchArgs) -> SearchQuery {
    let mut query = SearchQuery::new();
    if let Some(ref date) = args.date {
        query = query.date(date.as_str());
    }
    if let Some(ref category) = args.category {
        query = query.category(normalize_label(category));
    }
    if let Some(ref amount) = args.amount {
        query = query.amount(amount.as_str());
    }
    query
}

pub fn handle_search(ctx: &AppContext, args: &SearchArgs) -> anyhow::Result<()> {
    let (ledger, _store) = ctx.open_ledger()?;
    let query = build_query(args);
    let found = ledger.indexed_search(&query);

    let ui_ctx = ctx.ui_context(args.output.json);
    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&records_json(&found))?);
        return Ok(());
    }

    if found.is_empty() {
        if !ctx.quiet() {
            match ui_ctx.mode {
                OutputMode::Pretty => {
                    println!("{}", badge(&ui_ctx, Badge::Info, "Nothing found."))
                }
                OutputMode::Plain | OutputMode::Json => println!("count=0"),
            }
        }
        return Ok(());
    }

    if !ctx.quiet() {
        println!("{}", header(&ui_ctx, "Search"));
    }
    println!("{}", records_table(&ui_ctx, &found));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputArgs;
    use wallet_core::Record;

    fn args(date: Option<&str>, category: Option<&str>, amount: Option<&str>) -> SearchArgs {
        SearchArgs {
            date: date.map(str::to_string),
            category: category.map(str::to_string),
            amount: amount.map(str::to_string),
            output: OutputArgs { json: false },
        }
    }

    #[test]
    fn test_category_is_normalized() {
        let record = Record::parse("2024-04-10", "Expense", "15000", "Rent").unwrap();
        assert!(build_query(&args(None, Some("EXPENSE"), None)).matches(&record));
        assert!(!build_query(&args(None, Some("income"), None)).matches(&record));
    }

    #[test]
    fn test_no_criteria_matches_everything() {
        let record = Record::parse("2024-04-10", "Income", "1", "").unwrap();
        let query = build_query(&args(None, None, None));
        assert!(query.is_empty());
        assert!(query.matches(&record));
    }

    #[test]
    fn test_amount_is_exact_text() {
        let record = Record::parse("2024-04-10", "Income", "150", "").unwrap();
        assert!(build_query(&args(Some("2024-04-10"), None, Some("150"))).matches(&record));
        assert!(!build_query(&args(None, None, Some("0150"))).matches(&record));
    }
}
