//! Decoupled event bus so observers (tracking, logging) can follow what the
//! session does without the session knowing about them.
//!
//! Built on [`tokio::sync::broadcast`]; every subscriber sees every event
//! emitted after it subscribed.

use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::answer::Reply;

#[derive(Debug, Clone)]
pub enum Event {
    /// A question passed the checks and went to the oracle.
    Asked { question: String },
    /// The oracle answered.
    Answered(Reply),
    /// A submission was turned away before reaching the oracle.
    Rejected { reason: String },
}

#[derive(Debug)]
pub struct EventBus {
    tx: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Emit to all current subscribers. Returns how many will see it.
    pub fn emit(&self, event: Event) -> usize {
        self.tx.send(event).unwrap_or(0)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.tx.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}

/// Log every event on the bus until it closes. Answered questions are
/// logged at `info` so they can be tracked from the log alone.
pub fn spawn_tracker(bus: &EventBus) -> JoinHandle<usize> {
    let mut rx = bus.subscribe();
    tokio::spawn(async move {
        let mut tracked = 0;
        loop {
            match rx.recv().await {
                Ok(Event::Answered(reply)) => {
                    tracked += 1;
                    info!(
                        question = %reply.question,
                        answer = %reply.answer,
                        timestamp = %reply.timestamp.to_rfc3339(),
                        "question tracked"
                    );
                }
                Ok(Event::Asked { question }) => debug!(%question, "asked"),
                Ok(Event::Rejected { reason }) => debug!(%reason, "rejected"),
                Err(RecvError::Lagged(missed)) => warn!(missed, "tracker fell behind"),
                Err(RecvError::Closed) => break,
            }
        }
        tracked
    })
}
