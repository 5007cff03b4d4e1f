//! Repository layer bridging the core `QuestStore` seam to SQLite

pub mod sqlite_repo;

pub use sqlite_repo::SqliteQuestStore;
