//! Questgen Core - validation and loot generation kernel
//!
//! This crate provides the domain logic for creating a quest and its loot:
//! - Quest, loot and treasure-kind models
//! - The `QuestStore` seam over reference and target tables, plus an in-memory store
//! - Request validation (seed range, realm existence, future date, treasure supply)
//! - Accumulate-until-threshold loot generation with scoped loot ids
//! - Error and logging facilities shared by the store, engine and CLI crates

pub mod context;
pub mod errors;
pub mod logging_facility;
pub mod loot;
pub mod model;
pub mod quest_writer;
pub mod rules;
pub mod store;

// Re-export commonly used types
pub use context::QuestContext;
pub use errors::{QgError, QgErrorKind, QuestError, Result};
pub use loot::{generate_loot, LootDraw};
pub use model::{Loot, LootKey, Quest, QuestRequest, TreasureKind};
pub use quest_writer::insert_quest;
pub use rules::validation::validate;
pub use store::{MemoryQuestStore, QuestStore};
