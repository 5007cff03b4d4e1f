//! Quest row insertion

use crate::context::QuestContext;
use crate::errors::Result;
use crate::model::Quest;

/// Insert the quest row for this run
///
/// No uniqueness check: repeating a run writes another identical row.
///
/// # Errors
/// Returns `Persistence` if the insert fails.
pub fn insert_quest(ctx: &mut QuestContext<'_>, quest: &Quest) -> Result<()> {
    ctx.store_mut().insert_quest(quest)?;
    tracing::debug!(
        realm = %quest.realm,
        theme = %quest.theme,
        day = %quest.day,
        "quest row inserted"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryQuestStore;
    use chrono::NaiveDate;

    #[test]
    fn test_duplicate_quests_are_kept() {
        let today = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        let quest = Quest::new("Hunt", "Arendale", NaiveDate::from_ymd_opt(2030, 1, 6).unwrap());
        let mut store = MemoryQuestStore::new().with_realm("Arendale");

        {
            let mut ctx = QuestContext::new(&mut store, today);
            insert_quest(&mut ctx, &quest).unwrap();
            insert_quest(&mut ctx, &quest).unwrap();
        }

        assert_eq!(store.quests(), &[quest.clone(), quest]);
    }
}
