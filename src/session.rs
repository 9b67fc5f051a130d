//! The submit flow a front end drives: pace check, input check, ask, record.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing::debug;

use crate::answer::{Answer, Reply};
use crate::consts::{DEFAULT_COOLDOWN, DEFAULT_MIN_QUESTION_LEN};
use crate::cooldown::Cooldown;
use crate::error::SubmitError;
use crate::events::{Event, EventBus};
use crate::oracle::Oracle;
use crate::validation::validate_question;

/// Running count of answers given in a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub yes: u64,
    pub no: u64,
}

impl Tally {
    pub fn record(&mut self, answer: Answer) {
        match answer {
            Answer::Yes => self.yes += 1,
            Answer::No => self.no += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.yes + self.no
    }
}

pub struct Session {
    oracle: Arc<dyn Oracle>,
    cooldown: Cooldown,
    min_len: usize,
    events: Arc<EventBus>,
    tally: Mutex<Tally>,
}

impl Session {
    pub fn new(oracle: Arc<dyn Oracle>) -> Self {
        Self {
            oracle,
            cooldown: Cooldown::new(DEFAULT_COOLDOWN),
            min_len: DEFAULT_MIN_QUESTION_LEN,
            events: Arc::new(EventBus::default()),
            tally: Mutex::new(Tally::default()),
        }
    }

    pub fn with_cooldown(mut self, window: Duration) -> Self {
        self.cooldown = Cooldown::new(window);
        self
    }

    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    pub fn with_events(mut self, events: Arc<EventBus>) -> Self {
        self.events = events;
        self
    }

    pub fn tally(&self) -> Tally {
        *self.tally.lock().unwrap()
    }

    /// Start over: zero the tally and forget the last submission time.
    pub fn reset(&self) {
        *self.tally.lock().unwrap() = Tally::default();
        self.cooldown.reset();
    }

    /// Run the pace and input checks without asking anything.
    ///
    /// The pace check comes first, so a submission that is then rejected
    /// for being empty or short still starts a new cooldown window. On
    /// success the trimmed question is returned, ready for
    /// [`Session::ask_checked`].
    pub fn check<'q>(&self, raw: &'q str) -> Result<&'q str, SubmitError> {
        let checked = self
            .cooldown
            .try_acquire()
            .and_then(|()| validate_question(raw, self.min_len));

        if let Err(e) = &checked {
            debug!(error = %e, "submission rejected");
            self.events.emit(Event::Rejected {
                reason: e.to_string(),
            });
        }
        checked
    }

    /// Ask a question that already passed [`Session::check`] and record
    /// the answer.
    pub async fn ask_checked(&self, question: &str) -> Result<Reply, SubmitError> {
        self.events.emit(Event::Asked {
            question: question.to_string(),
        });

        let reply = self.oracle.ask(question).await?;

        self.tally.lock().unwrap().record(reply.answer);
        self.events.emit(Event::Answered(reply.clone()));
        Ok(reply)
    }

    /// Check and ask in one go. The oracle sees the trimmed question.
    pub async fn submit(&self, raw: &str) -> Result<Reply, SubmitError> {
        let question = self.check(raw)?;
        self.ask_checked(question).await
    }
}
