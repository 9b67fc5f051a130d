//! Terminal flourishes for an answer: confetti for YES, a shake for NO.

use std::io::{self, Write};
use std::time::Duration;

use crate::answer::Answer;
use crate::random::RandomSource;

/// Confetti colours (orange, red, purple, blue, green).
pub const PALETTE: [(u8, u8, u8); 5] = [
    (0xf3, 0x9c, 0x12),
    (0xe7, 0x4c, 0x3c),
    (0x9b, 0x59, 0xb6),
    (0x34, 0x98, 0xdb),
    (0x2e, 0xcc, 0x71),
];

const PARTICLE: char = '●';

/// Horizontal offsets of the shake animation, in pixels.
pub const SHAKE_KEYFRAMES: [i32; 11] = [0, -5, 5, -5, 5, -5, 5, -5, 5, -5, 0];

/// One terminal column stands in for this many pixels.
const PX_PER_COLUMN: i32 = 5;

const SHAKE_DURATION: Duration = Duration::from_millis(500);
const CONFETTI_ROWS: usize = 3;
const CONFETTI_ROW_DELAY: Duration = Duration::from_millis(120);

const RESET: &str = "\x1b[0m";

fn fg((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{r};{g};{b}m")
}

fn pick(random: &dyn RandomSource, n: usize) -> usize {
    ((random.next_unit() * n as f64) as usize).min(n.saturating_sub(1))
}

/// One row of confetti `width` columns wide holding up to `count` particles.
/// Particles landing on the same column collapse into one.
pub fn confetti_row(width: usize, count: usize, random: &dyn RandomSource) -> String {
    let mut cells: Vec<Option<(u8, u8, u8)>> = vec![None; width];
    if width > 0 {
        for _ in 0..count {
            let col = pick(random, width);
            let colour = PALETTE[pick(random, PALETTE.len())];
            cells[col] = Some(colour);
        }
    }

    let mut row = String::new();
    for cell in cells {
        match cell {
            Some(colour) => {
                row.push_str(&fg(colour));
                row.push(PARTICLE);
                row.push_str(RESET);
            }
            None => row.push(' '),
        }
    }
    row
}

/// Keyframes converted to column offsets.
pub fn shake_offsets() -> Vec<i32> {
    SHAKE_KEYFRAMES.iter().map(|px| px / PX_PER_COLUMN).collect()
}

/// The text at each step of the shake, padded so the leftmost step sits at
/// column zero.
pub fn shake_frames(text: &str) -> Vec<String> {
    let offsets = shake_offsets();
    let base = -offsets.iter().copied().min().unwrap_or(0);
    offsets
        .into_iter()
        .map(|o| format!("{}{}", " ".repeat((base + o) as usize), text))
        .collect()
}

/// Colour an answer: green for YES, red for NO.
pub fn paint(answer: Answer) -> String {
    let colour = match answer {
        Answer::Yes => PALETTE[4],
        Answer::No => PALETTE[1],
    };
    format!("\x1b[1m{}{}{}", fg(colour), answer, RESET)
}

/// Print the answer with its flourish.
pub async fn play(answer: Answer, random: &dyn RandomSource, width: usize) -> io::Result<()> {
    match answer {
        Answer::Yes => {
            println!("=> {}", paint(answer));
            for _ in 0..CONFETTI_ROWS {
                println!("{}", confetti_row(width, width / 4, random));
                tokio::time::sleep(CONFETTI_ROW_DELAY).await;
            }
        }
        Answer::No => {
            let frames = shake_frames(&format!("=> {}", paint(answer)));
            let step = SHAKE_DURATION / frames.len() as u32;
            let mut out = io::stdout();
            for frame in &frames {
                write!(out, "\x1b[2K\r{frame}")?;
                out.flush()?;
                tokio::time::sleep(step).await;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}
