use chrono::NaiveDate;

use crate::context::QuestContext;
use crate::errors::{QuestError, Result};
use crate::model::QuestRequest;

/// Inclusive bounds for a sampling seed
pub const SEED_MIN: f64 = -1.0;
pub const SEED_MAX: f64 = 1.0;

/// Validate a quest request against the reference data
///
/// Checks run in a fixed order and the first failure wins:
///
/// 1. Seed lies in [-1.0, 1.0] (an absent seed checks as 0 and always passes)
/// 2. Realm exists (exact, case-sensitive match)
/// 3. Day is strictly after today
/// 4. Amount does not exceed the combined value of all treasure kinds
///
/// Only two read queries are issued; nothing is written.
///
/// # Errors
/// Returns `InvalidSeed`, `UnknownRealm`, `PastOrPresentDate` or
/// `AmountExceedsSupply`, or `Persistence` if a lookup fails.
pub fn validate(ctx: &QuestContext<'_>, request: &QuestRequest) -> Result<()> {
    check_seed(request.effective_seed())?;

    if !ctx.store().realm_exists(&request.realm)? {
        return Err(QuestError::UnknownRealm {
            realm: request.realm.clone(),
        }
        .into());
    }

    check_day(request.day, ctx.today())?;

    let total = ctx.store().total_treasure_value()?;
    check_amount(request.amount, total)?;

    Ok(())
}

/// Seed must lie in [-1.0, 1.0]; NaN never does
pub fn check_seed(seed: f64) -> std::result::Result<(), QuestError> {
    if (SEED_MIN..=SEED_MAX).contains(&seed) {
        Ok(())
    } else {
        Err(QuestError::InvalidSeed { seed })
    }
}

/// Day must be strictly later than today
pub fn check_day(day: NaiveDate, today: NaiveDate) -> std::result::Result<(), QuestError> {
    if day > today {
        Ok(())
    } else {
        Err(QuestError::PastOrPresentDate { day, today })
    }
}

/// Amount fails only when strictly greater than the supply; equality passes
pub fn check_amount(amount: i64, total: i64) -> std::result::Result<(), QuestError> {
    if amount > total {
        Err(QuestError::AmountExceedsSupply { amount, total })
    } else {
        Ok(())
    }
}
