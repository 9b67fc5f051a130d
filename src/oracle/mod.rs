pub mod simulated;

use anyhow::Result;
use async_trait::async_trait;

use crate::answer::Reply;

/// The outermost boundary. The session and main.rs only know this trait.
///
/// The simulated oracle never fails. A real transport plugged in here
/// should hand its errors back untouched.
#[async_trait]
pub trait Oracle: Send + Sync {
    async fn ask(&self, question: &str) -> Result<Reply>;
}
