//! Reference data command
//!
//! Usage: questgen reference import <PATH> [--user <USER>]

use clap::{Args, Subcommand};
use questgen_engine::commands::{apply_engine_command, EngineCommand, EngineCommandResult};
use std::path::PathBuf;

use crate::StoreArgs;

#[derive(Debug, Args)]
pub struct ReferenceArgs {
    #[command(subcommand)]
    pub command: ReferenceCommand,
}

#[derive(Debug, Subcommand)]
pub enum ReferenceCommand {
    /// Import realms and treasure kinds from a YAML file
    Import(ImportArgs),
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Path to reference YAML file
    pub path: PathBuf,

    /// Account whose database receives the data (created if missing)
    #[arg(long)]
    pub user: Option<String>,
}

/// Execute reference command
pub fn execute(args: ReferenceArgs, store: &StoreArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        ReferenceCommand::Import(import_args) => execute_import(import_args, store),
    }
}

fn execute_import(args: ImportArgs, store: &StoreArgs) -> Result<(), Box<dyn std::error::Error>> {
    let user = args.user.as_deref().unwrap_or(&store.default_user);
    let mut conn = store.locator().connect_or_create(user)?;

    println!("Importing {}...", args.path.display());
    let result = apply_engine_command(EngineCommand::ImportReference { path: args.path }, &mut conn);
    let EngineCommandResult::ReferenceImported(summary) = super::close_after(conn, result)? else {
        return Err("engine returned an unexpected result for reference import".into());
    };
    println!(
        "✓ Imported {} realms and {} treasure kinds",
        summary.realms, summary.treasures
    );

    Ok(())
}
