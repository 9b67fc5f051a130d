//! Why a submission was turned away.

use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("please type a question")]
    Empty,

    #[error("the question must be at least {min} characters long")]
    TooShort { min: usize },

    #[error("wait a moment before asking again ({}ms left)", .remaining.as_millis())]
    CoolingDown { remaining: Duration },

    #[error(transparent)]
    Oracle(#[from] anyhow::Error),
}

impl SubmitError {
    /// Rejections caused by the user's input or pace, as opposed to the oracle.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, SubmitError::Oracle(_))
    }
}
