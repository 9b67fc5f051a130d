use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};

pub(super) const NAME: &str = "/help";

/// Placeholder so `/help` shows up in its own listing. The registry prints
/// the actual text.
pub struct HelpCommand;

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &str {
        NAME
    }

    fn aliases(&self) -> &[&str] {
        &["/h", "/?"]
    }

    fn description(&self) -> &str {
        "list commands"
    }

    async fn execute(&self, _info: &SessionInfo<'_>) -> CommandResult {
        CommandResult::Handled
    }
}
