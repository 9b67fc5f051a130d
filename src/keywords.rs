//! Keyword lists that bias the answer.

use serde::{Deserialize, Serialize};

/// Substrings that lean towards YES.
pub const DEFAULT_POSITIVE: &[&str] = &[
    "bom", "boa", "melhor", "deve", "deveria", "posso", "consigo", "vale a pena", "recomenda",
    "gosta", "amor", "feliz", "sucesso", "possível", "fácil", "simples", "certo", "correto",
    "verdade",
];

/// Substrings that lean towards NO.
pub const DEFAULT_NEGATIVE: &[&str] = &[
    "ruim", "pior", "não", "nunca", "impossível", "difícil", "errado", "mentira", "falso",
    "problema", "perigo", "risco", "medo", "triste", "fracasso", "complicado",
];

/// How many keywords of each list a question hit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub positive: usize,
    pub negative: usize,
}

/// Which way a score leans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lean {
    Positive,
    Negative,
    Neutral,
}

impl Score {
    pub fn lean(&self) -> Lean {
        use std::cmp::Ordering::*;
        match self.positive.cmp(&self.negative) {
            Greater => Lean::Positive,
            Less => Lean::Negative,
            Equal => Lean::Neutral,
        }
    }
}

/// Two ordered keyword lists. Fixed once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSet {
    positive: Vec<String>,
    negative: Vec<String>,
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self::new(
            DEFAULT_POSITIVE.iter().copied(),
            DEFAULT_NEGATIVE.iter().copied(),
        )
    }
}

impl KeywordSet {
    /// Build a set from arbitrary lists. Keywords are lower-cased so that
    /// matching against a lower-cased question stays case-insensitive.
    pub fn new<P, N>(positive: P, negative: N) -> Self
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
    {
        let lower = |k: &str| k.to_lowercase();
        Self {
            positive: positive.into_iter().map(|k| lower(k.as_ref())).collect(),
            negative: negative.into_iter().map(|k| lower(k.as_ref())).collect(),
        }
    }

    pub fn positive(&self) -> &[String] {
        &self.positive
    }

    pub fn negative(&self) -> &[String] {
        &self.negative
    }

    /// Count plain substring hits against the lower-cased question.
    /// Each keyword counts at most once, however often it appears.
    pub fn score(&self, question: &str) -> Score {
        let lowered = question.to_lowercase();
        let hits = |list: &[String]| {
            list.iter()
                .filter(|k| !k.is_empty() && lowered.contains(k.as_str()))
                .count()
        };
        Score {
            positive: hits(&self.positive),
            negative: hits(&self.negative),
        }
    }
}
