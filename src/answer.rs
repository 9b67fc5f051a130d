//! The answer an oracle gives and the record returned for each question.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Either YES or NO. There is no third option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    /// Both answers in the order used for an unbiased pick.
    pub const ALL: [Answer; 2] = [Answer::Yes, Answer::No];

    pub fn as_str(&self) -> &'static str {
        match self {
            Answer::Yes => "YES",
            Answer::No => "NO",
        }
    }

    /// The other answer.
    pub fn flip(self) -> Self {
        match self {
            Answer::Yes => Answer::No,
            Answer::No => Answer::Yes,
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One answered question. Built once by the oracle and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub answer: Answer,
    /// The question exactly as it was asked.
    pub question: String,
    pub timestamp: DateTime<Utc>,
}

impl Reply {
    /// Stamp an answer with the current wall-clock time.
    pub fn now(answer: Answer, question: impl Into<String>) -> Self {
        Self {
            answer,
            question: question.into(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_uppercase() {
        assert_eq!(Answer::Yes.to_string(), "YES");
        assert_eq!(Answer::No.to_string(), "NO");
    }

    #[test]
    fn flip_swaps() {
        assert_eq!(Answer::Yes.flip(), Answer::No);
        assert_eq!(Answer::No.flip(), Answer::Yes);
    }

    #[test]
    fn serializes_answer_as_uppercase_string() {
        assert_eq!(serde_json::to_string(&Answer::Yes).unwrap(), "\"YES\"");
        assert_eq!(serde_json::to_string(&Answer::No).unwrap(), "\"NO\"");
    }

    #[test]
    fn reply_timestamp_is_iso8601() {
        let reply = Reply::now(Answer::No, "vai chover?");
        let json = serde_json::to_value(&reply).unwrap();
        let ts = json["timestamp"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(ts).is_ok());
        assert_eq!(json["question"], "vai chover?");
        assert_eq!(json["answer"], "NO");
    }
}
