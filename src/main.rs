use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use quotefx::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for quotefx::AppCommand {
    fn from(cmd: Commands) -> quotefx::AppCommand {
        match cmd {
            Commands::Quote { filter, share } => quotefx::AppCommand::Quote { filter, share },
            Commands::Currencies => quotefx::AppCommand::Currencies,
            Commands::Convert {
                amount,
                from,
                to,
                swap,
            } => quotefx::AppCommand::Convert {
                amount,
                from,
                to,
                swap,
            },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Fetch and display an inspirational quote
    Quote {
        /// Keyword to bias the search (case-insensitive)
        #[arg(short, long)]
        filter: Option<String>,

        /// Print a share-ready copy of the quote afterwards
        #[arg(short, long)]
        share: bool,
    },
    /// List the supported currency codes
    Currencies,
    /// Convert an amount between two currencies
    Convert {
        /// Amount to convert
        amount: String,
        /// Source currency code, e.g. USD
        from: String,
        /// Destination currency code, e.g. PHP
        to: String,

        /// Swap the pair before converting
        #[arg(long)]
        swap: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => quotefx::cli::setup::setup(),
        Some(cmd) => quotefx::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
