//! REPL commands prefixed with `/`.
//!
//! Commands implement [`Command`] and live in a [`CommandRegistry`], which
//! handles dispatch, aliases and the generated `/help` listing. Anything
//! that is not a command is a question for the oracle.

mod clear;
mod help;
mod keywords;
mod quit;
mod stats;

use async_trait::async_trait;
use std::sync::Arc;

use crate::keywords::KeywordSet;
use crate::session::Tally;

/// What a command can see of the running session.
pub struct SessionInfo<'a> {
    pub tally: Tally,
    pub keywords: &'a KeywordSet,
    pub delay_ms: u64,
    pub cooldown_ms: u64,
}

/// What the REPL should do after a command runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandResult {
    /// Not a command. Ask it.
    NotACommand,
    /// Command handled, keep reading.
    Handled,
    /// Wipe the screen and start the session over.
    Reset,
    /// Leave the REPL.
    Quit,
}

#[async_trait]
pub trait Command: Send + Sync {
    /// Primary name, e.g. `"/stats"`.
    fn name(&self) -> &str;

    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// One-line description for `/help`.
    fn description(&self) -> &str;

    async fn execute(&self, info: &SessionInfo<'_>) -> CommandResult;
}

pub struct CommandRegistry {
    commands: Vec<Arc<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        let commands: Vec<Arc<dyn Command>> = vec![
            Arc::new(help::HelpCommand),
            Arc::new(stats::StatsCommand),
            Arc::new(keywords::KeywordsCommand),
            Arc::new(clear::ClearCommand),
            Arc::new(quit::QuitCommand),
        ];
        Self { commands }
    }

    pub fn register(&mut self, command: Arc<dyn Command>) {
        self.commands.push(command);
    }

    /// Dispatch input to a matching command, or return `NotACommand`.
    pub async fn dispatch(&self, input: &str, info: &SessionInfo<'_>) -> CommandResult {
        let cmd = input.trim();

        for command in &self.commands {
            if cmd == command.name() || command.aliases().contains(&cmd) {
                // /help lists the registry itself
                if command.name() == help::NAME {
                    print!("{}", self.help_text());
                    return CommandResult::Handled;
                }
                return command.execute(info).await;
            }
        }

        if cmd.starts_with('/') {
            println!("unknown command: {cmd}");
            println!("type /help for available commands");
            return CommandResult::Handled;
        }

        CommandResult::NotACommand
    }

    pub fn help_text(&self) -> String {
        let entries: Vec<(String, &str)> = self
            .commands
            .iter()
            .map(|c| (format_label(c.name(), c.aliases()), c.description()))
            .collect();

        let max_width = entries
            .iter()
            .map(|(label, _)| label.len())
            .max()
            .unwrap_or(10);

        let mut out = String::new();
        for (label, desc) in &entries {
            out.push_str(&format!("  {label:<max_width$}  {desc}\n"));
        }
        out
    }

    pub fn names(&self) -> Vec<&str> {
        self.commands.iter().map(|c| c.name()).collect()
    }

    /// All registered names and aliases.
    pub fn all_triggers(&self) -> Vec<&str> {
        let mut triggers = Vec::new();
        for cmd in &self.commands {
            triggers.push(cmd.name());
            triggers.extend_from_slice(cmd.aliases());
        }
        triggers
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn format_label(name: &str, aliases: &[&str]) -> String {
    if aliases.is_empty() {
        name.to_string()
    } else {
        format!("{} ({})", name, aliases.join(", "))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::LazyLock;

    static KEYWORDS: LazyLock<KeywordSet> = LazyLock::new(KeywordSet::default);

    pub(crate) fn test_info() -> SessionInfo<'static> {
        SessionInfo {
            tally: Tally::default(),
            keywords: &KEYWORDS,
            delay_ms: 1500,
            cooldown_ms: 1000,
        }
    }

    #[test]
    fn all_builtins_registered() {
        let reg = CommandRegistry::new();
        let names = reg.names();
        for name in ["/help", "/stats", "/keywords", "/clear", "/quit"] {
            assert!(names.contains(&name), "missing: {name}");
        }
    }

    #[test]
    fn no_duplicate_triggers() {
        let reg = CommandRegistry::new();
        let mut seen = Vec::new();
        for t in reg.all_triggers() {
            assert!(!seen.contains(&t), "duplicate trigger: {t}");
            seen.push(t);
        }
    }

    #[test]
    fn help_text_lists_commands_and_aliases() {
        let reg = CommandRegistry::new();
        let text = reg.help_text();
        for name in reg.names() {
            assert!(text.contains(name), "help missing: {name}");
        }
        assert!(text.contains("/reset"));
        assert!(text.contains("/?"));
    }

    #[tokio::test]
    async fn help_is_handled_by_registry() {
        let reg = CommandRegistry::new();
        assert_eq!(reg.dispatch("/h", &test_info()).await, CommandResult::Handled);
    }

    #[tokio::test]
    async fn unknown_slash_command_is_handled() {
        let reg = CommandRegistry::new();
        assert_eq!(
            reg.dispatch("/foobar", &test_info()).await,
            CommandResult::Handled
        );
    }

    #[tokio::test]
    async fn questions_pass_through() {
        let reg = CommandRegistry::new();
        assert_eq!(
            reg.dispatch("Devo estudar mais?", &test_info()).await,
            CommandResult::NotACommand
        );
    }

    #[tokio::test]
    async fn surrounding_whitespace_is_ignored() {
        let reg = CommandRegistry::new();
        assert_eq!(reg.dispatch("  /quit ", &test_info()).await, CommandResult::Quit);
    }

    #[tokio::test]
    async fn plugin_command_works() {
        struct PingCommand;

        #[async_trait]
        impl Command for PingCommand {
            fn name(&self) -> &str {
                "/ping"
            }
            fn description(&self) -> &str {
                "pong"
            }
            async fn execute(&self, _info: &SessionInfo<'_>) -> CommandResult {
                CommandResult::Handled
            }
        }

        let mut reg = CommandRegistry::new();
        reg.register(Arc::new(PingCommand));
        assert_eq!(reg.dispatch("/ping", &test_info()).await, CommandResult::Handled);
        assert!(reg.help_text().contains("/ping"));
    }

    #[test]
    fn format_label_with_aliases() {
        assert_eq!(format_label("/stats", &[]), "/stats");
        assert_eq!(format_label("/help", &["/h", "/?"]), "/help (/h, /?)");
    }
}
