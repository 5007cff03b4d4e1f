//! Questgen CLI
//!
//! Command-line interface for creating quests and loading reference data

use clap::{Args, Parser, Subcommand};
use questgen_core::logging_facility::{init, Profile};
use questgen_store::account::{AccountLocator, DEFAULT_ACCOUNT, DEFAULT_DATA_DIR};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "questgen")]
#[command(about = "Questgen - quest and loot generation for game realms", long_about = None)]
struct Cli {
    #[command(flatten)]
    store: StoreArgs,

    /// Log output format: human or json
    #[arg(long, global = true, env = "QUESTGEN_LOG_FORMAT", default_value = "human")]
    log_format: String,

    #[command(subcommand)]
    command: Commands,
}

/// Where account databases live
#[derive(Debug, Args)]
pub struct StoreArgs {
    /// Directory holding one `<user>.sqlite` database per account
    #[arg(long, global = true, env = "QUESTGEN_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Use this database file instead of the per-account one
    #[arg(long, global = true, env = "QUESTGEN_DB")]
    pub db: Option<PathBuf>,

    /// Account used when none is given on the command line
    #[arg(long, global = true, env = "QUESTGEN_USER", default_value = DEFAULT_ACCOUNT)]
    pub default_user: String,
}

impl StoreArgs {
    pub fn locator(&self) -> AccountLocator {
        AccountLocator::new(&self.data_dir).with_db_override(self.db.clone())
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create a quest and its loot
    Create(commands::create::CreateArgs),
    /// Reference data operations
    Reference(commands::reference::ReferenceArgs),
}

fn main() {
    // A missing .env is fine; flags and the real environment still apply
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init(Profile::from_format(&cli.log_format));

    let result = match cli.command {
        Commands::Create(args) => commands::create::execute(args, &cli.store),
        Commands::Reference(args) => commands::reference::execute(args, &cli.store),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
