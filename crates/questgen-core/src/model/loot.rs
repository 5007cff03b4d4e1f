use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::quest::Quest;

/// The tuple a loot id is scoped to
///
/// Loot ids count up independently for every (treasure, theme, realm, day).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LootKey {
    pub treasure: String,
    pub theme: String,
    pub realm: String,
    pub day: NaiveDate,
}

impl LootKey {
    /// Key for one treasure kind within a quest
    pub fn for_quest(quest: &Quest, treasure: &str) -> Self {
        Self {
            treasure: treasure.to_string(),
            theme: quest.theme.clone(),
            realm: quest.realm.clone(),
            day: quest.day,
        }
    }
}

/// One awarded unit of treasure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loot {
    /// Sequential id within the (treasure, theme, realm, day) scope, starting at 1
    pub loot_id: i64,
    pub treasure: String,
    pub theme: String,
    pub realm: String,
    pub day: NaiveDate,
}

impl Loot {
    pub fn new(loot_id: i64, key: LootKey) -> Self {
        Self {
            loot_id,
            treasure: key.treasure,
            theme: key.theme,
            realm: key.realm,
            day: key.day,
        }
    }

    /// The scope this unit's id was allocated in
    pub fn key(&self) -> LootKey {
        LootKey {
            treasure: self.treasure.clone(),
            theme: self.theme.clone(),
            realm: self.realm.clone(),
            day: self.day,
        }
    }
}
