//! Settings and the layered loader that produces them.
//!
//! Priority, lowest to highest:
//! 1. Built-in defaults
//! 2. Global: `$XDG_CONFIG_HOME/yesno/config.toml` (or the platform equivalent)
//! 3. Project: `./yesno.toml`
//! 4. Explicit `--config <path>`
//! 5. `YESNO_*` environment variables
//!
//! Command-line flags are applied on top by the binary.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::consts::{
    APP_NAME, DEFAULT_COOLDOWN, DEFAULT_DELAY, DEFAULT_MIN_QUESTION_LEN, ENV_PREFIX,
};
use crate::keywords::{DEFAULT_NEGATIVE, DEFAULT_POSITIVE, KeywordSet};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Simulated oracle latency in milliseconds.
    pub delay_ms: u64,
    /// Minimum gap between accepted submissions in milliseconds.
    pub cooldown_ms: u64,
    pub min_question_len: usize,
    /// Fixed seed for reproducible answers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub keywords: KeywordSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordSettings {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY.as_millis() as u64,
            cooldown_ms: DEFAULT_COOLDOWN.as_millis() as u64,
            min_question_len: DEFAULT_MIN_QUESTION_LEN,
            seed: None,
            keywords: KeywordSettings::default(),
        }
    }
}

impl Default for KeywordSettings {
    fn default() -> Self {
        let owned = |list: &[&str]| list.iter().map(|k| k.to_string()).collect();
        Self {
            positive: owned(DEFAULT_POSITIVE),
            negative: owned(DEFAULT_NEGATIVE),
        }
    }
}

impl Settings {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }

    pub fn keyword_set(&self) -> KeywordSet {
        KeywordSet::new(&self.keywords.positive, &self.keywords.negative)
    }
}

/// One layer that contributed to the loaded settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Global(PathBuf),
    Project(PathBuf),
    Explicit(PathBuf),
    Environment,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Global(path)
            | ConfigSource::Project(path)
            | ConfigSource::Explicit(path) => write!(f, "{}", path.display()),
            ConfigSource::Environment => write!(f, "${ENV_PREFIX}*"),
        }
    }
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load settings from every source, highest priority last.
    pub fn load(explicit: Option<&Path>) -> Result<Settings> {
        let mut figment = Figment::from(Serialized::defaults(Settings::default()));

        for source in Self::sources(explicit)? {
            figment = match source {
                ConfigSource::Global(path)
                | ConfigSource::Project(path)
                | ConfigSource::Explicit(path) => figment.merge(Toml::file(path)),
                ConfigSource::Environment => {
                    figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
                }
            };
        }

        figment
            .extract()
            .context("failed to load configuration")
    }

    /// The layers present right now, lowest priority first. Defaults are
    /// always applied and not listed. A missing explicit file is an error.
    pub fn sources(explicit: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(global) = Self::global_config_path() {
            if global.exists() {
                sources.push(ConfigSource::Global(global));
            }
        }

        if let Some(project) = Self::project_config_path() {
            sources.push(ConfigSource::Project(project));
        }

        if let Some(path) = explicit {
            if !path.exists() {
                bail!("config file not found: {}", path.display());
            }
            sources.push(ConfigSource::Explicit(path.to_path_buf()));
        }

        if std::env::vars_os().any(|(key, _)| key.to_string_lossy().starts_with(ENV_PREFIX)) {
            sources.push(ConfigSource::Environment);
        }

        Ok(sources)
    }

    /// Defaults only (for `--no-config`).
    pub fn load_defaults() -> Settings {
        Settings::default()
    }

    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_NAME).join("config.toml"))
    }

    pub fn project_config_path() -> Option<PathBuf> {
        let path = PathBuf::from(format!("{APP_NAME}.toml"));
        path.exists().then_some(path)
    }
}
