//! Run controller states

use std::fmt;

/// Where a quest run currently is
///
/// `Init → Validating → SeedSet (only with a seed) → WritingQuest →
/// GeneratingLoot → Committing → Closed`. The first error from any state
/// moves the run to `Aborted`, which rolls back and never commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Init,
    Validating,
    SeedSet,
    WritingQuest,
    GeneratingLoot,
    Committing,
    Closed,
    Aborted,
}

impl RunState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunState::Init => "init",
            RunState::Validating => "validating",
            RunState::SeedSet => "seed_set",
            RunState::WritingQuest => "writing_quest",
            RunState::GeneratingLoot => "generating_loot",
            RunState::Committing => "committing",
            RunState::Closed => "closed",
            RunState::Aborted => "aborted",
        }
    }

    /// Terminal states accept no further transitions
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunState::Closed | RunState::Aborted)
    }

    /// Whether `next` is a legal successor of `self`
    pub fn can_advance_to(&self, next: RunState) -> bool {
        use RunState::*;
        if self.is_terminal() {
            return false;
        }
        if next == Aborted {
            return true;
        }
        matches!(
            (self, next),
            (Init, Validating)
                | (Validating, SeedSet)
                | (Validating, WritingQuest)
                | (SeedSet, WritingQuest)
                | (WritingQuest, GeneratingLoot)
                | (GeneratingLoot, Committing)
                | (Committing, Closed)
        )
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
