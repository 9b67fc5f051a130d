use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};

pub struct ClearCommand;

#[async_trait]
impl Command for ClearCommand {
    fn name(&self) -> &str {
        "/clear"
    }

    fn aliases(&self) -> &[&str] {
        &["/reset"]
    }

    fn description(&self) -> &str {
        "clear the screen and start over"
    }

    async fn execute(&self, _info: &SessionInfo<'_>) -> CommandResult {
        CommandResult::Reset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::test_info;

    #[tokio::test]
    async fn asks_for_reset() {
        assert_eq!(ClearCommand.execute(&test_info()).await, CommandResult::Reset);
    }
}
