//! SQLite repository implementation
//!
//! Runs the parameterized lookups and inserts of a quest run against the
//! connection (normally a transaction) it was built on.

#![allow(clippy::result_large_err)]

use crate::errors::{store_error, Result};
use questgen_core::model::{Loot, LootKey, Quest, TreasureKind};
use questgen_core::store::QuestStore;
use rusqlite::{Connection, OptionalExtension};

/// `QuestStore` backed by a SQLite connection
///
/// Built on a `rusqlite::Transaction` by the run controller, so every read
/// and write of one run shares that transaction.
pub struct SqliteQuestStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteQuestStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl QuestStore for SqliteQuestStore<'_> {
    fn realm_exists(&self, realm: &str) -> Result<bool> {
        let found = self
            .conn
            .query_row("SELECT 1 FROM Realm WHERE realm = ?1", [realm], |_| Ok(()))
            .optional()
            .map_err(|e| store_error("realm_exists", e))?;
        Ok(found.is_some())
    }

    fn total_treasure_value(&self) -> Result<i64> {
        self.conn
            .query_row("SELECT COALESCE(SUM(sql), 0) FROM treasure", [], |row| {
                row.get(0)
            })
            .map_err(|e| store_error("total_treasure_value", e))
    }

    fn treasure_kinds(&self) -> Result<Vec<TreasureKind>> {
        let mut stmt = self
            .conn
            .prepare("SELECT treasure, sql FROM treasure ORDER BY treasure")
            .map_err(|e| store_error("treasure_kinds", e))?;

        let kinds = stmt
            .query_map([], |row| {
                Ok(TreasureKind {
                    name: row.get(0)?,
                    value: row.get(1)?,
                })
            })
            .map_err(|e| store_error("treasure_kinds", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| store_error("treasure_kinds", e))?;

        Ok(kinds)
    }

    fn insert_quest(&mut self, quest: &Quest) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO quest (theme, realm, day) VALUES (?1, ?2, ?3)",
                rusqlite::params![quest.theme, quest.realm, quest.day],
            )
            .map_err(|e| store_error("insert_quest", e))?;
        Ok(())
    }

    fn max_loot_id(&self, key: &LootKey) -> Result<Option<i64>> {
        let mut stmt = self
            .conn
            .prepare_cached(
                "SELECT MAX(loot_id) FROM loot
                 WHERE treasure = ?1 AND theme = ?2 AND realm = ?3 AND day = ?4",
            )
            .map_err(|e| store_error("max_loot_id", e))?;

        stmt.query_row(
            rusqlite::params![key.treasure, key.theme, key.realm, key.day],
            |row| row.get(0),
        )
        .map_err(|e| store_error("max_loot_id", e))
    }

    fn insert_loot(&mut self, loot: &Loot) -> Result<()> {
        let mut stmt = self
            .conn
            .prepare_cached(
                "INSERT INTO loot (loot_id, treasure, theme, realm, day)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )
            .map_err(|e| store_error("insert_loot", e))?;

        stmt.execute(rusqlite::params![
            loot.loot_id,
            loot.treasure,
            loot.theme,
            loot.realm,
            loot.day
        ])
        .map_err(|e| store_error("insert_loot", e))?;
        Ok(())
    }
}
