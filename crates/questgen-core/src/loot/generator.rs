use rand::Rng;

use crate::context::QuestContext;
use crate::errors::{QuestError, Result};
use crate::model::{Loot, LootKey, Quest, TreasureKind};

/// Loot units emitted for one quest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LootDraw {
    /// Units in draw order
    pub loot: Vec<Loot>,
    /// Sum of the drawn treasure values
    pub total_value: i64,
}

/// Draw and insert loot for `quest` until the running total reaches `target`
///
/// Each iteration picks a treasure kind uniformly at random from the full
/// reference set, adds its value to the running total, allocates the next
/// loot id in that kind's (treasure, theme, realm, day) scope and inserts the
/// row. The loop condition is `total < target`, so a target of 0 or less
/// emits nothing and the unit that crosses the target is the last one.
///
/// # Errors
/// Returns `InvalidReferenceData` if any treasure kind has a negative value,
/// `EmptyTreasureSupply` if the target is positive but no kind is worth
/// anything, and `Persistence` if a lookup or insert fails.
pub fn generate_loot(ctx: &mut QuestContext<'_>, quest: &Quest, target: i64) -> Result<LootDraw> {
    let kinds = ctx.store().treasure_kinds()?;
    check_supply(&kinds, target)?;

    let (store, rng) = ctx.parts_mut();
    let mut total_value = 0i64;
    let mut loot = Vec::new();

    while total_value < target {
        let kind = &kinds[rng.gen_range(0..kinds.len())];
        total_value += kind.value;

        let key = LootKey::for_quest(quest, &kind.name);
        let loot_id = store.max_loot_id(&key)?.unwrap_or(0) + 1;
        let unit = Loot::new(loot_id, key);
        store.insert_loot(&unit)?;

        tracing::debug!(
            treasure = %unit.treasure,
            loot_id = unit.loot_id,
            running_total = total_value,
            "loot unit inserted"
        );
        loot.push(unit);
    }

    Ok(LootDraw { loot, total_value })
}

/// Guard the loop: every draw must be non-negative, and a positive target
/// needs at least one kind with positive value or the loop never ends
fn check_supply(kinds: &[TreasureKind], target: i64) -> std::result::Result<(), QuestError> {
    if let Some(kind) = kinds.iter().find(|k| k.value < 0) {
        return Err(QuestError::NegativeTreasureValue {
            treasure: kind.name.clone(),
            value: kind.value,
        });
    }
    if target > 0 && !kinds.iter().any(|k| k.value > 0) {
        return Err(QuestError::EmptyTreasureSupply { target });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::QgErrorKind;
    use crate::store::{MemoryQuestStore, QuestStore};
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 1, 1).unwrap()
    }

    fn quest() -> Quest {
        Quest::new("Hunt", "Arendale", NaiveDate::from_ymd_opt(2030, 1, 6).unwrap())
    }

    fn reference_store() -> MemoryQuestStore {
        MemoryQuestStore::new()
            .with_realm("Arendale")
            .with_treasure("A", 10)
            .with_treasure("B", 15)
            .with_treasure("C", 20)
    }

    #[test]
    fn test_zero_target_emits_nothing() {
        let mut store = reference_store();
        let mut ctx = QuestContext::new(&mut store, today());
        let draw = generate_loot(&mut ctx, &quest(), 0).unwrap();
        assert!(draw.loot.is_empty());
        assert_eq!(draw.total_value, 0);
    }

    #[test]
    fn test_stops_at_first_draw_reaching_target() {
        let mut store = reference_store();
        let mut ctx = QuestContext::new(&mut store, today());
        ctx.fix_seed(0.5);
        let draw = generate_loot(&mut ctx, &quest(), 12).unwrap();

        assert!(draw.total_value >= 12);
        let values = |t: &str| match t {
            "A" => 10,
            "B" => 15,
            _ => 20,
        };
        let last = draw.loot.last().unwrap();
        assert!(draw.total_value - values(last.treasure.as_str()) < 12);
        // Any single B or C reaches 12; A needs exactly one more draw
        assert!(draw.loot.len() <= 2);
    }

    #[test]
    fn test_ids_count_per_treasure_kind() {
        let mut store = MemoryQuestStore::new()
            .with_realm("Arendale")
            .with_treasure("A", 1)
            .with_treasure("B", 1);
        let draw = {
            let mut ctx = QuestContext::new(&mut store, today());
            ctx.fix_seed(-0.75);
            generate_loot(&mut ctx, &quest(), 40).unwrap()
        };

        assert_eq!(draw.loot.len(), 40);
        for name in ["A", "B"] {
            let ids: Vec<i64> = draw
                .loot
                .iter()
                .filter(|l| l.treasure == name)
                .map(|l| l.loot_id)
                .collect();
            let expected: Vec<i64> = (1..=ids.len() as i64).collect();
            assert_eq!(ids, expected, "ids for {} must be 1..n in draw order", name);
        }
        assert_eq!(store.loot().len(), 40);
    }

    #[test]
    fn test_ids_continue_after_existing_rows() {
        let mut store = MemoryQuestStore::new()
            .with_realm("Arendale")
            .with_treasure("A", 5);
        store
            .insert_loot(&Loot::new(7, LootKey::for_quest(&quest(), "A")))
            .unwrap();

        let mut ctx = QuestContext::new(&mut store, today());
        let draw = generate_loot(&mut ctx, &quest(), 10).unwrap();

        let ids: Vec<i64> = draw.loot.iter().map(|l| l.loot_id).collect();
        assert_eq!(ids, vec![8, 9]);
    }

    #[test]
    fn test_sampling_repeats_past_one_pass() {
        // Target needs more draws than there are kinds
        let mut store = reference_store();
        let mut ctx = QuestContext::new(&mut store, today());
        let draw = generate_loot(&mut ctx, &quest(), 45).unwrap();
        assert!(draw.total_value >= 45);
        assert!(draw.loot.len() >= 3);
    }

    #[test]
    fn test_worthless_supply_is_rejected() {
        let mut store = MemoryQuestStore::new()
            .with_realm("Arendale")
            .with_treasure("Pebble", 0);
        let mut ctx = QuestContext::new(&mut store, today());
        let err = generate_loot(&mut ctx, &quest(), 1).unwrap_err();
        assert_eq!(err.kind(), QgErrorKind::EmptyTreasureSupply);
        assert!(store.loot().is_empty());
    }

    #[test]
    fn test_negative_value_is_rejected() {
        let mut store = MemoryQuestStore::new()
            .with_realm("Arendale")
            .with_treasure("Curse", -3)
            .with_treasure("Gold", 10);
        let mut ctx = QuestContext::new(&mut store, today());
        let err = generate_loot(&mut ctx, &quest(), 5).unwrap_err();
        assert_eq!(err.kind(), QgErrorKind::InvalidReferenceData);
        assert_eq!(err.entity_id(), Some("Curse"));
    }
}
