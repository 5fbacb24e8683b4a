use wallet_core::SearchQuery;

use crate::app::AppContext;
use crate::cli::OutputArgs;
use crate::output::{records_json, records_table};
use crate::ui::{header, hint, OutputMode};

pub fn handle_list(ctx: &AppContext, args: &OutputArgs) -> anyhow::Result<()> {
    let (ledger, _store) = ctx.open_ledger()?;
    let records = ledger.indexed_search(&SearchQuery::new());

    let ui_ctx = ctx.ui_context(args.json);
    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&records_json(&records))?);
        return Ok(());
    }

    if records.is_empty() {
        if !ctx.quiet() {
            match ui_ctx.mode {
                OutputMode::Pretty => println!("{}", hint(&ui_ctx, "No records yet.")),
                OutputMode::Plain | OutputMode::Json => println!("count=0"),
            }
        }
        return Ok(());
    }

    if !ctx.quiet() {
        println!("{}", header(&ui_ctx, "Records"));
    }
    println!("{}", records_table(&ui_ctx, &records));
    Ok(())
}
