//! Quest creation run controller
//!
//! ## Pipeline (in order, one IMMEDIATE transaction):
//! 1. Validate the request (seed, realm, day, amount); reads only
//! 2. Fix the sampler seed, when one was given
//! 3. Insert the quest row
//! 4. Generate and insert loot until the target is reached
//! 5. Commit
//!
//! The first error at any step aborts the run: the transaction is rolled
//! back and the error is returned to the caller, which reports and exits.

#![allow(clippy::result_large_err)]

use std::time::Instant;

use chrono::NaiveDate;
use questgen_core::errors::{QgError, QgErrorKind};
use questgen_core::loot::LootDraw;
use questgen_core::model::{Loot, Quest, QuestRequest};
use questgen_core::{generate_loot, insert_quest, validate, QuestContext};
use questgen_core::{log_op_end, log_op_error, log_op_start};
use questgen_core_types::RunId;
use questgen_store::errors::{store_error, Result};
use questgen_store::SqliteQuestStore;
use rusqlite::{Connection, Transaction, TransactionBehavior};

use super::run_state::RunState;

/// Result of a committed quest run
#[derive(Debug, Clone)]
pub struct QuestOutcome {
    /// Correlation id attached to every log line of the run
    pub run_id: RunId,
    pub quest: Quest,
    /// Loot units in draw order
    pub loot: Vec<Loot>,
    /// Sum of the drawn treasure values; at least the requested amount
    pub total_value: i64,
    /// States the run passed through, `Init` to `Closed`
    pub states: Vec<RunState>,
}

/// Tracks the current state and rejects illegal transitions
struct RunTracker {
    current: RunState,
    visited: Vec<RunState>,
}

impl RunTracker {
    fn new() -> Self {
        Self {
            current: RunState::Init,
            visited: vec![RunState::Init],
        }
    }

    fn advance(&mut self, next: RunState) -> Result<()> {
        if !self.current.can_advance_to(next) {
            return Err(QgError::new(QgErrorKind::Internal)
                .with_op("run_state")
                .with_message(format!(
                    "illegal transition {} -> {}",
                    self.current, next
                )));
        }
        tracing::debug!(from = %self.current, state = %next, "run state");
        self.current = next;
        self.visited.push(next);
        Ok(())
    }

    /// Move to `Aborted`, returning the state the failure happened in
    fn abort(&mut self) -> RunState {
        let failed_in = self.current;
        if self.current.can_advance_to(RunState::Aborted) {
            self.current = RunState::Aborted;
            self.visited.push(RunState::Aborted);
        }
        failed_in
    }
}

/// Create one quest and its loot for `request`, with `today` as the date
/// the request's day must come after
///
/// The connection stays open; closing it is the caller's job.
///
/// # Errors
/// Any validation, generation or store error. Nothing is committed when an
/// error is returned.
pub fn create_quest(
    conn: &mut Connection,
    request: &QuestRequest,
    today: NaiveDate,
) -> Result<QuestOutcome> {
    let run_id = RunId::new();
    let span = tracing::info_span!("create_quest", run_id = %run_id);
    let _guard = span.enter();

    let start = Instant::now();
    log_op_start!(
        "create_quest",
        realm = %request.realm,
        theme = %request.theme,
        day = %request.day,
        target_amount = request.amount
    );

    let mut tracker = RunTracker::new();
    match execute(conn, request, today, &mut tracker) {
        Ok(draw) => {
            tracker.advance(RunState::Closed)?;
            log_op_end!(
                "create_quest",
                duration_ms = start.elapsed().as_millis() as u64,
                loot_count = draw.loot.len() as u64,
                total_value = draw.total_value
            );
            Ok(QuestOutcome {
                run_id,
                quest: request.quest(),
                loot: draw.loot,
                total_value: draw.total_value,
                states: tracker.visited,
            })
        }
        Err(err) => {
            let failed_in = tracker.abort();
            log_op_error!(
                "create_quest",
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                state = %failed_in
            );
            Err(err)
        }
    }
}

/// Open the transaction, run the steps, and commit or roll back
fn execute(
    conn: &mut Connection,
    request: &QuestRequest,
    today: NaiveDate,
    tracker: &mut RunTracker,
) -> Result<LootDraw> {
    // IMMEDIATE takes the write lock up front, so the max-then-insert loot id
    // allocation cannot interleave with another run on the same database.
    let tx = conn
        .transaction_with_behavior(TransactionBehavior::Immediate)
        .map_err(|e| store_error("begin_transaction", e))?;

    let draw = match run_steps(&tx, request, today, tracker) {
        Ok(draw) => draw,
        Err(err) => {
            if let Err(rollback_err) = tx.rollback() {
                tracing::warn!(error = %rollback_err, "rollback failed");
            }
            return Err(err);
        }
    };

    tracker.advance(RunState::Committing)?;
    tx.commit().map_err(|e| store_error("commit", e))?;
    Ok(draw)
}

fn run_steps(
    tx: &Transaction<'_>,
    request: &QuestRequest,
    today: NaiveDate,
    tracker: &mut RunTracker,
) -> Result<LootDraw> {
    let mut store = SqliteQuestStore::new(tx);
    let mut ctx = QuestContext::new(&mut store, today);

    tracker.advance(RunState::Validating)?;
    validate(&ctx, request)?;

    if let Some(seed) = request.seed {
        tracker.advance(RunState::SeedSet)?;
        ctx.fix_seed(seed);
    }

    tracker.advance(RunState::WritingQuest)?;
    let quest = request.quest();
    insert_quest(&mut ctx, &quest)?;

    tracker.advance(RunState::GeneratingLoot)?;
    generate_loot(&mut ctx, &quest, request.amount)
}
