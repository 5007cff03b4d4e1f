//! Per-run context threaded through validation, quest writing and loot generation

use chrono::NaiveDate;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::store::QuestStore;

/// Random source used for treasure sampling
///
/// Xoshiro256++ is portable across platforms and crate versions, so a fixed
/// seed reproduces the same draw sequence everywhere.
pub type SamplingRng = Xoshiro256PlusPlus;

/// Build a sampler from a seed. Equal seeds give equal sequences.
pub fn seeded_rng(seed: f64) -> SamplingRng {
    SamplingRng::seed_from_u64(seed.to_bits())
}

/// Build a sampler from ambient randomness
pub fn ambient_rng() -> SamplingRng {
    SamplingRng::seed_from_u64(rand::random())
}

/// Everything one run needs: the store handle, the sampler and "today"
///
/// Constructed once by the run controller and passed by reference into each
/// step; nothing here outlives the run.
pub struct QuestContext<'a> {
    store: &'a mut dyn QuestStore,
    rng: SamplingRng,
    today: NaiveDate,
}

impl<'a> QuestContext<'a> {
    /// Context with an ambient-random sampler
    pub fn new(store: &'a mut dyn QuestStore, today: NaiveDate) -> Self {
        Self {
            store,
            rng: ambient_rng(),
            today,
        }
    }

    /// Replace the sampler with one fixed by `seed`
    pub fn fix_seed(&mut self, seed: f64) {
        self.rng = seeded_rng(seed);
    }

    pub fn store(&self) -> &dyn QuestStore {
        &*self.store
    }

    pub fn store_mut(&mut self) -> &mut dyn QuestStore {
        &mut *self.store
    }

    /// Mutable store and sampler at once, for the generation loop
    pub fn parts_mut(&mut self) -> (&mut dyn QuestStore, &mut SamplingRng) {
        (&mut *self.store, &mut self.rng)
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }
}
