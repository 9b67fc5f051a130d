use std::sync::atomic::{AtomicUsize, Ordering};

use super::RandomSource;

/// A scripted random source for tests. Replays the given draws in order and
/// wraps around when it runs out.
pub struct ScriptedRandom {
    draws: Vec<f64>,
    index: AtomicUsize,
}

impl ScriptedRandom {
    /// # Panics
    /// Panics if `draws` is empty or any draw is outside `[0, 1)`.
    pub fn new(draws: Vec<f64>) -> Self {
        assert!(!draws.is_empty(), "ScriptedRandom needs at least one draw");
        assert!(
            draws.iter().all(|r| (0.0..1.0).contains(r)),
            "ScriptedRandom draws must be in [0, 1)"
        );
        Self {
            draws,
            index: AtomicUsize::new(0),
        }
    }

    /// Always returns the same draw.
    pub fn constant(draw: f64) -> Self {
        Self::new(vec![draw])
    }

    /// How many draws have been taken so far.
    pub fn calls(&self) -> usize {
        self.index.load(Ordering::SeqCst)
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&self) -> f64 {
        let i = self.index.fetch_add(1, Ordering::SeqCst);
        self.draws[i % self.draws.len()]
    }
}
