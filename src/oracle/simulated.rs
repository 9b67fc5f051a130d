use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

use super::Oracle;
use crate::answer::Reply;
use crate::consts::DEFAULT_DELAY;
use crate::engine::ResponseEngine;

/// An oracle that answers locally after pretending to wait on the network.
pub struct SimulatedOracle {
    engine: ResponseEngine,
    delay: Duration,
}

impl Default for SimulatedOracle {
    fn default() -> Self {
        Self::new(ResponseEngine::default(), DEFAULT_DELAY)
    }
}

impl SimulatedOracle {
    pub fn new(engine: ResponseEngine, delay: Duration) -> Self {
        Self { engine, delay }
    }

    /// Same engine, no waiting. Handy in tests.
    pub fn instant(engine: ResponseEngine) -> Self {
        Self::new(engine, Duration::ZERO)
    }

    /// Wait out the simulated latency, then answer. The reply carries the
    /// question verbatim and the time the answer was produced.
    pub async fn ask_question(&self, question: &str) -> Reply {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let answer = self.engine.generate_response(question);
        Reply::now(answer, question)
    }
}

#[async_trait]
impl Oracle for SimulatedOracle {
    async fn ask(&self, question: &str) -> Result<Reply> {
        Ok(self.ask_question(question).await)
    }
}
