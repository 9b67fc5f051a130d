pub mod mock;

use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// Where the coin flips come from. Swappable so tests can force a branch.
pub trait RandomSource: Send + Sync {
    /// A uniform draw in `[0, 1)`.
    fn next_unit(&self) -> f64;
}

impl<T: RandomSource + ?Sized> RandomSource for Arc<T> {
    fn next_unit(&self) -> f64 {
        (**self).next_unit()
    }
}

/// Thread-local OS-seeded generator. The default for real use.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRandom;

impl RandomSource for SystemRandom {
    fn next_unit(&self) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// Reproducible generator: the same seed yields the same sequence of answers.
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&self) -> f64 {
        self.rng.lock().unwrap().random::<f64>()
    }
}

/// Pick the seeded generator when a seed is given, the system one otherwise.
pub fn from_seed(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(SystemRandom),
    }
}
