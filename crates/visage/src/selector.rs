//! Uniform selection from a portrait list.

use visage_assets::Portrait;
use visage_core::profiling::profile_function;

use crate::config::RandomMode;
use crate::random::RandomSource;

/// Picks one element of a slice uniformly at random.
pub struct Selector {
    random: Box<dyn RandomSource>,
}

impl Selector {
    /// Select with an explicit random source.
    pub fn new(random: impl RandomSource + 'static) -> Self {
        Self {
            random: Box::new(random),
        }
    }

    /// Select with the random source described by `mode`.
    pub fn from_mode(mode: RandomMode) -> Self {
        Self {
            random: mode.build(),
        }
    }

    /// A uniformly chosen portrait, or `None` if `pool` is empty.
    pub fn pick<'a>(&self, pool: &'a [Portrait]) -> Option<&'a Portrait> {
        profile_function!();
        if pool.is_empty() {
            return None;
        }
        let index = self.random.index(pool.len());
        debug_assert!(
            index < pool.len(),
            "random source returned index {} out of range for {} portraits",
            index,
            pool.len()
        );
        pool.get(index)
    }
}

impl Default for Selector {
    fn default() -> Self {
        Self::from_mode(RandomMode::default())
    }
}
