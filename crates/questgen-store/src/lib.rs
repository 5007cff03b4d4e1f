//! Questgen Store - SQLite persistence for quests and loot
//!
//! Provides:
//! - Connection open/configure helpers and account database resolution
//! - Embedded schema bootstrap for the `Realm`, `treasure`, `quest` and `loot` tables
//! - `SqliteQuestStore`, the `QuestStore` implementation over a transaction
//! - Reference data (realms, treasure kinds) import from YAML

pub mod account;
pub mod db;
pub mod errors;
pub mod reference;
pub mod repo;
pub mod schema;

// Re-export key types
pub use errors::Result;
pub use repo::SqliteQuestStore;
