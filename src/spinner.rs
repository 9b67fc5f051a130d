//! Loading indicator shown while the oracle is thinking.

use std::io::Write;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Braille spinner frames.
pub const BRAILLE: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const INTERVAL: Duration = Duration::from_millis(80);

/// A spinner drawn on stderr by a background task, so stdout only ever
/// carries answers. Shows how long the wait has lasted.
///
/// Dropping the spinner also stops it, which covers the case where the
/// future it decorates is cancelled.
pub struct Spinner {
    handle: Option<JoinHandle<()>>,
    cancel: tokio::sync::watch::Sender<bool>,
}

impl Spinner {
    pub fn start(message: &str) -> Self {
        let (cancel_tx, mut cancel_rx) = tokio::sync::watch::channel(false);
        let message = message.to_string();
        let started = Instant::now();

        let handle = tokio::spawn(async move {
            let mut i = 0;
            loop {
                let frame = frame_at(BRAILLE, i);
                let secs = started.elapsed().as_secs_f32();
                // \x1b[2K clears the line, \r returns to its start
                eprint!("\x1b[2K\r{frame} {message} {secs:.1}s");
                let _ = std::io::stderr().flush();

                tokio::select! {
                    _ = tokio::time::sleep(INTERVAL) => {}
                    _ = cancel_rx.changed() => break,
                }
                i += 1;
            }
            eprint!("\x1b[2K\r");
            let _ = std::io::stderr().flush();
        });

        Self {
            handle: Some(handle),
            cancel: cancel_tx,
        }
    }

    /// Stop the spinner and wait until its line is cleared.
    pub async fn stop(mut self) {
        let _ = self.cancel.send(true);
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        let _ = self.cancel.send(true);
    }
}

fn frame_at(frames: &[&'static str], i: usize) -> &'static str {
    if frames.is_empty() {
        return "";
    }
    frames[i % frames.len()]
}
