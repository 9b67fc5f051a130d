//! Turns a question into a YES or a NO.
//!
//! The keyword score decides which answer is favoured; a single draw from
//! the [`RandomSource`] decides whether the favourite actually wins. A
//! favoured answer wins when the draw is above [`BIAS_THRESHOLD`], which
//! gives a 70/30 split. Without a favourite the draw picks either answer
//! with equal odds.

use tracing::debug;

use crate::answer::Answer;
use crate::keywords::{KeywordSet, Lean, Score};
use crate::random::{RandomSource, SystemRandom};

/// A favoured answer needs a draw strictly above this to win.
pub const BIAS_THRESHOLD: f64 = 0.3;

pub struct ResponseEngine {
    keywords: KeywordSet,
    random: Box<dyn RandomSource>,
}

impl Default for ResponseEngine {
    fn default() -> Self {
        Self::new(KeywordSet::default(), Box::new(SystemRandom))
    }
}

impl ResponseEngine {
    pub fn new(keywords: KeywordSet, random: Box<dyn RandomSource>) -> Self {
        Self { keywords, random }
    }

    pub fn score(&self, question: &str) -> Score {
        self.keywords.score(question)
    }

    /// Answer a question. Total over every input, including the empty string.
    pub fn generate_response(&self, question: &str) -> Answer {
        let score = self.score(question);
        let draw = self.random.next_unit();
        let answer = decide(score.lean(), draw);
        debug!(
            positive = score.positive,
            negative = score.negative,
            draw,
            %answer,
            "scored question"
        );
        answer
    }
}

/// The decision rule on its own, for a given lean and draw in `[0, 1)`.
pub fn decide(lean: Lean, draw: f64) -> Answer {
    match lean {
        Lean::Positive => favour(Answer::Yes, draw),
        Lean::Negative => favour(Answer::No, draw),
        Lean::Neutral => {
            let i = ((draw * Answer::ALL.len() as f64) as usize).min(Answer::ALL.len() - 1);
            Answer::ALL[i]
        }
    }
}

fn favour(favourite: Answer, draw: f64) -> Answer {
    if draw > BIAS_THRESHOLD {
        favourite
    } else {
        favourite.flip()
    }
}
