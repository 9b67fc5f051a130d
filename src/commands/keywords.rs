use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};

pub struct KeywordsCommand;

#[async_trait]
impl Command for KeywordsCommand {
    fn name(&self) -> &str {
        "/keywords"
    }

    fn aliases(&self) -> &[&str] {
        &["/k"]
    }

    fn description(&self) -> &str {
        "show the words that tip the answer"
    }

    async fn execute(&self, info: &SessionInfo<'_>) -> CommandResult {
        println!("  leans YES: {}", info.keywords.positive().join(", "));
        println!("  leans NO:  {}", info.keywords.negative().join(", "));
        CommandResult::Handled
    }
}
