//! Sources of uniformly random indices.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::config::RandomMode;

/// Produces uniformly distributed indices.
///
/// Implementations are shared between threads, so any generator state needs
/// its own synchronization.
pub trait RandomSource: Send + Sync {
    /// A uniform index in `0..len`. Callers never pass `0`.
    fn index(&self, len: usize) -> usize;
}

/// One generator shared by every caller, locked only while drawing.
pub struct SharedRng<R = StdRng> {
    rng: Mutex<R>,
}

impl<R: RngCore + Send> SharedRng<R> {
    /// Share an existing generator.
    pub fn new(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl SharedRng<StdRng> {
    /// `StdRng` seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// `StdRng` with a fixed seed. The same seed yields the same indices.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore + Send> RandomSource for SharedRng<R> {
    fn index(&self, len: usize) -> usize {
        self.rng.lock().random_range(0..len)
    }
}

/// The calling thread's own generator (`rand::rng()`).
#[derive(Debug, Clone, Copy, Default)]
pub struct PerThreadRng;

impl RandomSource for PerThreadRng {
    fn index(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

impl RandomMode {
    /// Build the random source this mode describes.
    pub fn build(self) -> Box<dyn RandomSource> {
        match self {
            RandomMode::Entropy => Box::new(SharedRng::from_entropy()),
            RandomMode::Seeded(seed) => Box::new(SharedRng::seeded(seed)),
            RandomMode::ThreadLocal => Box::new(PerThreadRng),
        }
    }
}
