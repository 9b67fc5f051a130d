//! Project-wide constants.

use std::time::Duration;

pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
pub const HOMEPAGE: &str = env!("CARGO_PKG_HOMEPAGE");
pub const REPO: &str = env!("CARGO_PKG_REPOSITORY");

/// Simulated oracle latency when none is configured.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

/// Minimum gap between two accepted submissions.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_secs(1);

/// Shortest question (in characters, after trimming) worth answering.
pub const DEFAULT_MIN_QUESTION_LEN: usize = 3;

/// Name of the config directory and the project-level config file stem.
pub const APP_NAME: &str = "yesno";

/// Prefix for environment variable overrides, e.g. `YESNO_DELAY_MS`.
pub const ENV_PREFIX: &str = "YESNO_";

/// Format a number with comma separators (e.g. 1,234,567).
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Render a share as a whole percentage, `0%` when there is nothing to share.
pub fn percent(part: u64, total: u64) -> String {
    if total == 0 {
        return "0%".to_string();
    }
    format!("{:.0}%", part as f64 * 100.0 / total as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consts_are_non_empty() {
        assert!(!AUTHOR.is_empty());
        assert!(!HOMEPAGE.is_empty());
        assert!(!REPO.is_empty());
        assert!(!APP_NAME.is_empty());
    }

    #[test]
    fn consts_from_cargo_toml() {
        assert!(AUTHOR.contains("Assaf Sapir"));
        assert!(HOMEPAGE.contains("sapir.io"));
        assert!(REPO.contains("github.com/assapir/yesno"));
    }

    #[test]
    fn default_timings() {
        assert_eq!(DEFAULT_DELAY.as_millis(), 1500);
        assert_eq!(DEFAULT_COOLDOWN.as_millis(), 1000);
        assert_eq!(DEFAULT_MIN_QUESTION_LEN, 3);
    }

    #[test]
    fn format_number_small() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(999), "999");
    }

    #[test]
    fn format_number_thousands() {
        assert_eq!(format_number(1_000), "1,000");
        assert_eq!(format_number(123_456), "123,456");
        assert_eq!(format_number(1_234_567), "1,234,567");
    }

    #[test]
    fn percent_rounds() {
        assert_eq!(percent(0, 0), "0%");
        assert_eq!(percent(1, 3), "33%");
        assert_eq!(percent(2, 3), "67%");
        assert_eq!(percent(7, 7), "100%");
    }
}
