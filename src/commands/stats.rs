use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};
use crate::banner::tally_line;

pub struct StatsCommand;

#[async_trait]
impl Command for StatsCommand {
    fn name(&self) -> &str {
        "/stats"
    }

    fn description(&self) -> &str {
        "show answers given this session"
    }

    async fn execute(&self, info: &SessionInfo<'_>) -> CommandResult {
        if info.tally.total() == 0 {
            println!("  nothing asked yet");
        } else {
            println!("  {}", tally_line(info.tally));
        }
        println!(
            "  delay {}ms, cooldown {}ms",
            info.delay_ms, info.cooldown_ms
        );
        CommandResult::Handled
    }
}
