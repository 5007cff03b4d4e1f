pub mod create_quest;
pub mod engine_command;
pub mod run_state;

pub use create_quest::{create_quest, QuestOutcome};
pub use engine_command::{apply_engine_command, EngineCommand, EngineCommandResult};
pub use run_state::RunState;
