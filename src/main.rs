use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use finance_tracker::cli::{handle_ledger_command, run_shell, LedgerCommands};
use finance_tracker::config::{paths::TrackerPaths, settings::Settings};
use finance_tracker::services::Tracker;
use finance_tracker::storage::LedgerStore;

#[derive(Parser)]
#[command(
    name = "finance",
    version,
    about = "Personal income and expense tracker",
    long_about = "Records income and expense entries, keeps a running balance, \
                  and saves everything to a single local data file."
)]
struct Cli {
    /// Data file to use instead of the configured one
    #[arg(short, long, global = true, env = "FINANCE_TRACKER_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Ledger(LedgerCommands),

    /// Start an interactive session
    Shell {
        /// Load saved data before the first prompt
        #[arg(long)]
        load: bool,
    },

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    init_tracing(&settings.log_level);

    let ledger_path = cli
        .file
        .clone()
        .unwrap_or_else(|| settings.ledger_path(&paths));
    let mut tracker = Tracker::new(LedgerStore::new(ledger_path));

    match cli.command {
        Some(Commands::Ledger(cmd)) => {
            handle_ledger_command(&mut tracker, cmd)?;
        }
        Some(Commands::Shell { load }) => {
            run_shell(&mut tracker, io::stdin().lock(), io::stdout().lock(), load)?;
        }
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Settings written to {}", paths.settings_file().display());
            println!("Data file: {}", tracker.store_path().display());
        }
        Some(Commands::Config) => {
            println!("Finance Tracker Configuration");
            println!("=============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!(
                "Settings file:  {}{}",
                paths.settings_file().display(),
                if paths.is_initialized() { "" } else { " (not created)" }
            );
            println!("Data file:      {}", tracker.store_path().display());
            println!();
            println!("Settings:");
            println!("  Log level: {}", settings.log_level);
        }
        None => {
            println!("Finance Tracker - personal income and expense tracker");
            println!();
            println!("Run 'finance --help' for usage information.");
            println!("Run 'finance shell' to start an interactive session.");
        }
    }

    Ok(())
}

/// `RUST_LOG` wins over the configured level
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("finance_tracker={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
