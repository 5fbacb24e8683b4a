use std::io;

use tracing::debug;

use wallet_core::{Ledger, TextStore};

use crate::app::AppContext;
use crate::shell::{LinePrompter, Prompter, Shell, ShellOptions, TerminalPrompter};
use crate::ui::UiContext;

/// Open the data file and run the interactive menu until the user exits.
pub fn handle_menu(ctx: &AppContext) -> anyhow::Result<()> {
    let (ledger, store) = ctx.open_ledger()?;
    let ui_ctx = ctx.ui_context(false);
    let interactive = ctx.is_interactive();
    let options = ShellOptions {
        clear_screen: interactive && ctx.config()?.ui.clear_screen,
        pause: interactive,
    };
    debug!(interactive, records = ledger.len(), "Starting menu");

    if interactive {
        run_shell(ledger, store, TerminalPrompter::new(), ui_ctx, options)
    } else {
        let prompter = LinePrompter::new(io::stdin().lock(), io::stdout());
        run_shell(ledger, store, prompter, ui_ctx, options)
    }
}

fn run_shell<P: Prompter>(
    ledger: Ledger,
    store: TextStore,
    prompter: P,
    ui_ctx: UiContext,
    options: ShellOptions,
) -> anyhow::Result<()> {
    let mut shell = Shell::new(ledger, store, prompter, io::stdout(), ui_ctx, options);
    shell.run()
}
