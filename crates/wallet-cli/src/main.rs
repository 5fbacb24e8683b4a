//! Wallet CLI - personal income and expense ledger kept in a plain text file
//!
//! Without a subcommand this opens the numbered menu; the subcommands are
//! read-only reports over the same data file.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod logging;
mod output;
mod shell;
mod ui;

use clap::Parser;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{
    handle_balance, handle_completions, handle_list, handle_menu, handle_search,
};
use crate::errors::{exit_code_for, CliError};

fn main() {
    let cli = Cli::parse();
    logging::init();

    if let Err(err) = run(&cli) {
        if let Some(cli_err) = err.downcast_ref::<CliError>() {
            cli_err.exit();
        }
        eprintln!("Error: {:#}", err);
        std::process::exit(exit_code_for(&err));
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let ctx = AppContext::new(cli);
    match &cli.command {
        Some(Commands::Balance(args)) => handle_balance(&ctx, args),
        Some(Commands::List(args)) => handle_list(&ctx, args),
        Some(Commands::Search(args)) => handle_search(&ctx, args),
        Some(Commands::Completions(args)) => handle_completions(args.shell),
        None => handle_menu(&ctx),
    }
}
