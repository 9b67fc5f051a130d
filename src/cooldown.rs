//! Spam guard: one accepted submission per window.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::error::SubmitError;

pub struct Cooldown {
    window: Duration,
    last: Mutex<Option<Instant>>,
}

impl Cooldown {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last: Mutex::new(None),
        }
    }

    /// Accept a submission now, or report how long is left to wait.
    pub fn try_acquire(&self) -> Result<(), SubmitError> {
        self.try_acquire_at(Instant::now())
    }

    /// Like [`Cooldown::try_acquire`] with an explicit clock reading.
    /// A refused attempt leaves the window where it was.
    pub fn try_acquire_at(&self, now: Instant) -> Result<(), SubmitError> {
        let mut last = self.last.lock().unwrap();
        if let Some(prev) = *last {
            let elapsed = now.saturating_duration_since(prev);
            if elapsed < self.window {
                return Err(SubmitError::CoolingDown {
                    remaining: self.window - elapsed,
                });
            }
        }
        *last = Some(now);
        Ok(())
    }

    /// Forget the last submission.
    pub fn reset(&self) {
        *self.last.lock().unwrap() = None;
    }
}
