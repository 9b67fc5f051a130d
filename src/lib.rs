//! Ask a question, get a YES or a NO.
//!
//! A [`ResponseEngine`](engine::ResponseEngine) scores the question against
//! two keyword lists and flips a biased coin. A
//! [`SimulatedOracle`](oracle::simulated::SimulatedOracle) wraps it in a
//! fake network delay, and a [`Session`](session::Session) adds the input
//! checks and spam guard a front end needs.

pub mod answer;
pub mod banner;
pub mod commands;
pub mod config;
pub mod consts;
pub mod cooldown;
pub mod effects;
pub mod engine;
pub mod error;
pub mod events;
pub mod keywords;
pub mod oracle;
pub mod random;
pub mod session;
pub mod spinner;
pub mod validation;
