use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use yesno::answer::Reply;
use yesno::banner::{BannerInfo, print_banner, print_session_summary};
use yesno::commands::{CommandRegistry, CommandResult, SessionInfo};
use yesno::config::{ConfigLoader, Settings};
use yesno::effects;
use yesno::engine::ResponseEngine;
use yesno::error::SubmitError;
use yesno::events::{EventBus, spawn_tracker};
use yesno::oracle::simulated::SimulatedOracle;
use yesno::random::{self, SystemRandom};
use yesno::session::Session;
use yesno::spinner::Spinner;

/// Fallback when `$COLUMNS` is not set.
const DEFAULT_WIDTH: usize = 60;

#[derive(Parser)]
#[command(name = "yesno", version, about = "Ask a question, get a YES or a NO.")]
struct Cli {
    /// Ask a single question and exit (non-interactive)
    #[arg(short, long)]
    run: Option<String>,

    /// Print the reply as JSON instead of decorating it
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Simulated oracle latency in milliseconds
    #[arg(short, long)]
    delay_ms: Option<u64>,

    /// Minimum gap between questions in milliseconds
    #[arg(long)]
    cooldown_ms: Option<u64>,

    /// Seed for reproducible answers
    #[arg(short, long)]
    seed: Option<u64>,

    /// Config file (TOML), applied over the global and project files
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Ignore config files and environment, use built-in defaults
    #[arg(long, default_value_t = false)]
    no_config: bool,

    /// Skip confetti and shake
    #[arg(long, default_value_t = false)]
    no_effects: bool,

    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn settings(&self) -> anyhow::Result<Settings> {
        let mut settings = if self.no_config {
            ConfigLoader::load_defaults()
        } else {
            ConfigLoader::load(self.config.as_deref())?
        };
        if let Some(ms) = self.delay_ms {
            settings.delay_ms = ms;
        }
        if let Some(ms) = self.cooldown_ms {
            settings.cooldown_ms = ms;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        Ok(settings)
    }

    fn config_label(&self) -> String {
        if self.no_config {
            return "defaults".to_string();
        }
        let sources = ConfigLoader::sources(self.config.as_deref()).unwrap_or_default();
        if sources.is_empty() {
            return "defaults".to_string();
        }
        sources
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" + ")
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let settings = cli.settings()?;
    info!(?settings, "loaded settings");

    let keywords = settings.keyword_set();
    let engine = ResponseEngine::new(keywords.clone(), random::from_seed(settings.seed));
    let oracle = Arc::new(SimulatedOracle::new(engine, settings.delay()));

    let events = Arc::new(EventBus::default());
    let _tracker = spawn_tracker(&events);

    let session = Session::new(oracle)
        .with_cooldown(settings.cooldown())
        .with_min_len(settings.min_question_len)
        .with_events(Arc::clone(&events));

    let output = Output {
        json: cli.json,
        effects: !cli.no_effects && !cli.json,
        width: terminal_width(),
    };

    // Single question mode
    if let Some(question) = &cli.run {
        if ask(&session, question, &output).await?.is_none() {
            std::process::exit(1);
        }
        return Ok(());
    }

    print_banner(&BannerInfo {
        delay: settings.delay(),
        cooldown: settings.cooldown(),
        seed: settings.seed,
        keywords: (keywords.positive().len(), keywords.negative().len()),
        config: &cli.config_label(),
    });

    let commands = CommandRegistry::new();

    // REPL: async stdin so Ctrl+C is caught at the prompt too
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("\n? ");
        io::stdout().flush()?;

        let line = tokio::select! {
            result = lines.next_line() => {
                match result {
                    Ok(Some(line)) => line,
                    Ok(None) => {
                        // Ctrl+D (EOF)
                        println!();
                        break;
                    }
                    Err(e) => {
                        eprintln!("input error: {}", e);
                        break;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        };

        let info = SessionInfo {
            tally: session.tally(),
            keywords: &keywords,
            delay_ms: settings.delay_ms,
            cooldown_ms: settings.cooldown_ms,
        };

        match commands.dispatch(&line, &info).await {
            CommandResult::NotACommand => {}
            CommandResult::Handled => continue,
            CommandResult::Reset => {
                session.reset();
                // clear screen, cursor home
                print!("\x1b[2J\x1b[H");
                io::stdout().flush()?;
                continue;
            }
            CommandResult::Quit => break,
        }

        // Ctrl+C while waiting drops the question, not the REPL
        tokio::select! {
            result = ask(&session, &line, &output) => {
                result?;
            }
            _ = tokio::signal::ctrl_c() => {
                println!("\n\ninterrupted");
            }
        }
    }

    print_session_summary(session.tally());
    Ok(())
}

struct Output {
    json: bool,
    effects: bool,
    width: usize,
}

/// Submit one question and show the outcome. Rejections and oracle errors
/// are reported to the user and yield `None`; only output failures are
/// errors.
async fn ask(session: &Session, question: &str, output: &Output) -> anyhow::Result<Option<Reply>> {
    let question = match session.check(question) {
        Ok(question) => question,
        Err(e) => {
            report(&e);
            return Ok(None);
        }
    };

    let spinner = (!output.json).then(|| Spinner::start("consulting the oracle"));
    let result = session.ask_checked(question).await;
    if let Some(spinner) = spinner {
        spinner.stop().await;
    }

    let reply = match result {
        Ok(reply) => reply,
        Err(e) => {
            report(&e);
            return Ok(None);
        }
    };

    if output.json {
        let json = serde_json::to_string_pretty(&reply).context("failed to encode reply")?;
        println!("{json}");
    } else if output.effects {
        effects::play(reply.answer, &SystemRandom, output.width).await?;
    } else {
        println!("=> {}", reply.answer);
    }
    Ok(Some(reply))
}

fn report(e: &SubmitError) {
    if e.is_rejection() {
        eprintln!("✗ {e}");
    } else {
        eprintln!("error: {e}");
    }
}

fn terminal_width() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|c| c.parse().ok())
        .filter(|&w: &usize| w > 0)
        .unwrap_or(DEFAULT_WIDTH)
}
