use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A quest row: one theme in one realm on one day
///
/// Quests carry no key of their own. Two runs with identical arguments
/// produce two identical rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    pub theme: String,
    pub realm: String,
    pub day: NaiveDate,
}

impl Quest {
    pub fn new(theme: impl Into<String>, realm: impl Into<String>, day: NaiveDate) -> Self {
        Self {
            theme: theme.into(),
            realm: realm.into(),
            day,
        }
    }
}

/// Typed inputs of one quest-creation run
#[derive(Debug, Clone, PartialEq)]
pub struct QuestRequest {
    /// Day the quest takes place; must be after today
    pub day: NaiveDate,

    /// Realm name, matched exactly against the reference table
    pub realm: String,

    /// Free-form theme shared by the quest and all of its loot
    pub theme: String,

    /// Target loot value; generation stops once the running total reaches it
    pub amount: i64,

    /// Optional sampling seed in [-1.0, 1.0]
    pub seed: Option<f64>,
}

impl QuestRequest {
    /// The quest row this request will write
    pub fn quest(&self) -> Quest {
        Quest::new(self.theme.clone(), self.realm.clone(), self.day)
    }

    /// Seed used by the range check. An absent seed checks as 0.
    pub fn effective_seed(&self) -> f64 {
        self.seed.unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(seed: Option<f64>) -> QuestRequest {
        QuestRequest {
            day: NaiveDate::from_ymd_opt(2031, 5, 1).unwrap(),
            realm: "Arendale".to_string(),
            theme: "Hunt".to_string(),
            amount: 12,
            seed,
        }
    }

    #[test]
    fn test_quest_from_request() {
        let quest = request(None).quest();
        assert_eq!(quest.theme, "Hunt");
        assert_eq!(quest.realm, "Arendale");
        assert_eq!(quest.day, NaiveDate::from_ymd_opt(2031, 5, 1).unwrap());
    }

    #[test]
    fn test_effective_seed_defaults_to_zero() {
        assert_eq!(request(None).effective_seed(), 0.0);
        assert_eq!(request(Some(-0.5)).effective_seed(), -0.5);
    }
}
