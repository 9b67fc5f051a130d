//! Startup banner and session summary display.

use std::time::Duration;

use crate::consts::{AUTHOR, HOMEPAGE, REPO, format_number, percent};
use crate::session::Tally;

/// Session configuration for display in the startup banner.
pub struct BannerInfo<'a> {
    pub delay: Duration,
    pub cooldown: Duration,
    pub seed: Option<u64>,
    pub keywords: (usize, usize),
    pub config: &'a str,
}

pub fn print_banner(info: &BannerInfo) {
    let seed = info
        .seed
        .map(|s| s.to_string())
        .unwrap_or_else(|| "random".to_string());
    println!(
        r#"
   ╔═══════════════════════════════════════╗
   ║              Y E S  /  N O            ║
   ║    ask anything, trust nothing        ║
   ╚═══════════════════════════════════════╝

   version   {}
   by        {}
   home      {}
   repo      {}
   delay     {}ms
   cooldown  {}ms
   seed      {}
   keywords  {} positive / {} negative
   config    {}

   type a question, or /help
"#,
        env!("CARGO_PKG_VERSION"),
        AUTHOR,
        HOMEPAGE,
        REPO,
        info.delay.as_millis(),
        info.cooldown.as_millis(),
        seed,
        info.keywords.0,
        info.keywords.1,
        info.config,
    );
}

/// One line describing the tally, e.g. `3 asked: 2 YES (67%) / 1 NO (33%)`.
pub fn tally_line(tally: Tally) -> String {
    let total = tally.total();
    format!(
        "{} asked: {} YES ({}) / {} NO ({})",
        format_number(total),
        format_number(tally.yes),
        percent(tally.yes, total),
        format_number(tally.no),
        percent(tally.no, total),
    )
}

/// Print the session summary (tally + farewell).
pub fn print_session_summary(tally: Tally) {
    if tally.total() > 0 {
        println!("session: {}", tally_line(tally));
    }
    println!("goodbye.");
}
