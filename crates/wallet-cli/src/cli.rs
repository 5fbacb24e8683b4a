use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use wallet_core::VERSION;

/// Wallet - personal income and expense ledger kept in a plain text file
///
/// Run without a command to open the interactive menu.
#[derive(Parser)]
#[command(name = "wallet")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the data file (default: data.txt)
    #[arg(short, long, global = true, env = "WALLET_FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Arguments shared by read-only reporting commands
#[derive(Args)]
pub struct OutputArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `search` command
#[derive(Args)]
pub struct SearchArgs {
    /// Exact date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// Category (Income or Expense, any capitalization)
    #[arg(long)]
    pub category: Option<String>,

    /// Exact amount
    #[arg(long)]
    pub amount: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show total income, total expense, and net balance
    Balance(OutputArgs),

    /// List every record with its index
    List(OutputArgs),

    /// Find records by exact date, category, and amount
    Search(SearchArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_command_means_menu() {
        let cli = Cli::try_parse_from(["wallet"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_search_args() {
        let cli = Cli::try_parse_from([
            "wallet",
            "search",
            "--category",
            "income",
            "--amount",
            "150",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Search(args)) => {
                assert_eq!(args.category.as_deref(), Some("income"));
                assert_eq!(args.amount.as_deref(), Some("150"));
                assert!(args.date.is_none());
                assert!(args.output.json);
            }
            _ => panic!("expected search command"),
        }
    }

    #[test]
    fn test_global_file_flag() {
        let cli = Cli::try_parse_from(["wallet", "balance", "--file", "ledger.txt"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("ledger.txt")));
    }
}
