pub mod loot;
pub mod quest;
pub mod treasure;

pub use loot::{Loot, LootKey};
pub use quest::{Quest, QuestRequest};
pub use treasure::TreasureKind;
