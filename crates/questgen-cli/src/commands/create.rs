//! Quest creation command
//!
//! Usage: questgen create <DAY> <REALM> <THEME> <AMOUNT> [USER] [SEED]

use chrono::NaiveDate;
use clap::Args;
use questgen_core::model::QuestRequest;
use questgen_engine::commands::{apply_engine_command, EngineCommand, EngineCommandResult};

use crate::StoreArgs;

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Quest day (YYYY-MM-DD); must be after today
    pub day: NaiveDate,

    /// Realm the quest takes place in
    pub realm: String,

    /// Quest theme
    pub theme: String,

    /// Minimum combined value of the loot
    #[arg(value_parser = clap::value_parser!(i64).range(0..))]
    pub amount: i64,

    /// Store account to run as
    pub user: Option<String>,

    /// Sampling seed in [-1.0, 1.0]
    #[arg(allow_negative_numbers = true, requires = "user")]
    pub seed: Option<f64>,
}

/// Execute quest creation
pub fn execute(args: CreateArgs, store: &StoreArgs) -> Result<(), Box<dyn std::error::Error>> {
    let user = args.user.as_deref().unwrap_or(&store.default_user);
    let mut conn = store.locator().connect(user)?;

    let request = QuestRequest {
        day: args.day,
        realm: args.realm,
        theme: args.theme,
        amount: args.amount,
        seed: args.seed,
    };
    let today = chrono::Local::now().date_naive();

    let result = apply_engine_command(EngineCommand::CreateQuest { request, today }, &mut conn);
    let EngineCommandResult::QuestCreated(outcome) = super::close_after(conn, result)? else {
        return Err("engine returned an unexpected result for quest creation".into());
    };

    println!(
        "Quest created: {} in {} on {} (run {})",
        outcome.quest.theme, outcome.quest.realm, outcome.quest.day, outcome.run_id
    );
    for unit in &outcome.loot {
        println!("  loot {} #{}", unit.treasure, unit.loot_id);
    }
    println!(
        "Total value {} across {} loot",
        outcome.total_value,
        outcome.loot.len()
    );

    Ok(())
}
