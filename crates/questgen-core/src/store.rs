//! Reference store seam
//!
//! `QuestStore` is the typed query surface the validator, quest writer and
//! loot generator work against. The SQLite adapter lives in `questgen-store`;
//! `MemoryQuestStore` backs unit and property tests.

use std::collections::BTreeSet;

use crate::errors::Result;
use crate::model::{Loot, LootKey, Quest, TreasureKind};

/// Parameterized lookups and inserts over the `Realm`, `treasure`, `quest`
/// and `loot` tables
#[allow(clippy::result_large_err)]
pub trait QuestStore {
    /// Whether a realm row with exactly this name exists (case-sensitive)
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if the lookup fails.
    fn realm_exists(&self, realm: &str) -> Result<bool>;

    /// Sum of the value column over every treasure kind; 0 when the table is empty
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if the aggregate fails.
    fn total_treasure_value(&self) -> Result<i64>;

    /// All treasure kinds, ordered by name
    ///
    /// A stable order keeps seeded sampling reproducible.
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if the query fails.
    fn treasure_kinds(&self) -> Result<Vec<TreasureKind>>;

    /// Insert one quest row
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if the insert fails.
    fn insert_quest(&mut self, quest: &Quest) -> Result<()>;

    /// Highest loot id already used within `key`, or `None` when the scope is empty
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if the lookup fails.
    fn max_loot_id(&self, key: &LootKey) -> Result<Option<i64>>;

    /// Insert one loot row
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if the insert fails.
    fn insert_loot(&mut self, loot: &Loot) -> Result<()>;
}

/// In-memory store for tests
///
/// Not thread-safe, like the run it stands in for.
#[derive(Debug, Clone, Default)]
pub struct MemoryQuestStore {
    realms: BTreeSet<String>,
    treasures: Vec<TreasureKind>,
    quests: Vec<Quest>,
    loot: Vec<Loot>,
}

impl MemoryQuestStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a realm to the reference data
    pub fn with_realm(mut self, realm: impl Into<String>) -> Self {
        self.realms.insert(realm.into());
        self
    }

    /// Add a treasure kind to the reference data
    pub fn with_treasure(mut self, name: impl Into<String>, value: i64) -> Self {
        self.treasures.push(TreasureKind::new(name, value));
        self.treasures.sort_by(|a, b| a.name.cmp(&b.name));
        self
    }

    /// Quest rows written so far
    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }

    /// Loot rows written so far, in insertion order
    pub fn loot(&self) -> &[Loot] {
        &self.loot
    }
}

impl QuestStore for MemoryQuestStore {
    fn realm_exists(&self, realm: &str) -> Result<bool> {
        Ok(self.realms.contains(realm))
    }

    fn total_treasure_value(&self) -> Result<i64> {
        Ok(self.treasures.iter().map(|t| t.value).sum())
    }

    fn treasure_kinds(&self) -> Result<Vec<TreasureKind>> {
        Ok(self.treasures.clone())
    }

    fn insert_quest(&mut self, quest: &Quest) -> Result<()> {
        self.quests.push(quest.clone());
        Ok(())
    }

    fn max_loot_id(&self, key: &LootKey) -> Result<Option<i64>> {
        Ok(self
            .loot
            .iter()
            .filter(|l| l.key() == *key)
            .map(|l| l.loot_id)
            .max())
    }

    fn insert_loot(&mut self, loot: &Loot) -> Result<()> {
        self.loot.push(loot.clone());
        Ok(())
    }
}
