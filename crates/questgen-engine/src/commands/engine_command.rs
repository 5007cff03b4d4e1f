//! Engine-level commands dispatched by the CLI

#![allow(clippy::result_large_err)]

use std::path::PathBuf;

use chrono::NaiveDate;
use questgen_core::model::QuestRequest;
use questgen_store::errors::Result;
use questgen_store::reference::{import_reference_file, ImportSummary};
use rusqlite::Connection;

use super::create_quest::{create_quest, QuestOutcome};

/// Engine commands that need a store connection
#[derive(Debug, Clone)]
pub enum EngineCommand {
    /// Create a quest and its loot
    CreateQuest {
        request: QuestRequest,
        /// The date `request.day` must come after
        today: NaiveDate,
    },
    /// Load realms and treasure kinds from a YAML file
    ImportReference { path: PathBuf },
}

/// Result of applying an engine command
#[derive(Debug, Clone)]
pub enum EngineCommandResult {
    QuestCreated(QuestOutcome),
    ReferenceImported(ImportSummary),
}

/// Apply an engine command against `conn`
pub fn apply_engine_command(
    cmd: EngineCommand,
    conn: &mut Connection,
) -> Result<EngineCommandResult> {
    match cmd {
        EngineCommand::CreateQuest { request, today } => {
            create_quest(conn, &request, today).map(EngineCommandResult::QuestCreated)
        }
        EngineCommand::ImportReference { path } => {
            import_reference_file(&path, conn).map(EngineCommandResult::ReferenceImported)
        }
    }
}
