use crate::app::AppContext;
use crate::cli::OutputArgs;
use crate::output::{balance_json, balance_lines};
use crate::ui::header;

pub fn handle_balance(ctx: &AppContext, args: &OutputArgs) -> anyhow::Result<()> {
    let (ledger, _store) = ctx.open_ledger()?;
    let balance = ledger.balance();

    let ui_ctx = ctx.ui_context(args.json);
    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&balance_json(&balance))?);
        return Ok(());
    }

    if !ctx.quiet() {
        println!("{}", header(&ui_ctx, "Balance"));
    }
    println!("{}", balance_lines(&ui_ctx, &balance));
    Ok(())
}
