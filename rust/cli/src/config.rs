//! Layered configuration: defaults, then a TOML file named by
//! `PATIENCE_CONFIG`, then `PATIENCE_SEED` / `PATIENCE_LOG`, then `--seed`.

use serde::{Deserialize, Serialize};
use std::fs;

pub const CONFIG_ENV: &str = "PATIENCE_CONFIG";
pub const SEED_ENV: &str = "PATIENCE_SEED";
pub const LOG_ENV: &str = "PATIENCE_LOG";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub log_filter: String,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Cli,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub log_filter: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            log_filter: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            log_filter: "warn".into(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    load_with_env(|key| std::env::var(key).ok())
}

/// Same as [`load_with_sources`] with the environment supplied by `env`.
pub fn load_with_env<F>(env: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Some(path) = env(CONFIG_ENV).filter(|p| !p.is_empty()) {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.log_filter {
            cfg.log_filter = v;
            sources.log_filter = ValueSource::File;
        }
    }

    if let Some(seed) = env(SEED_ENV).filter(|s| !s.is_empty()) {
        cfg.seed = Some(
            seed.trim()
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed: {}", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(filter) = env(LOG_ENV).filter(|s| !s.is_empty()) {
        cfg.log_filter = filter;
        sources.log_filter = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

/// Applies the `--seed` argument on top of the resolved configuration.
///
/// A seed that is not a plain number clears any configured seed so the
/// engine derives one from the clock; the returned message explains why.
pub fn apply_cli_seed(resolved: &mut ConfigResolved, arg: Option<&str>) -> Result<(), String> {
    let Some(raw) = arg else {
        return Ok(());
    };
    resolved.sources.seed = ValueSource::Cli;
    match raw.trim().parse::<u64>() {
        Ok(v) => {
            resolved.config.seed = Some(v);
            Ok(())
        }
        Err(_) => {
            resolved.config.seed = None;
            Err(format!(
                "Seed '{}' is not a number; using a time-based seed.",
                raw
            ))
        }
    }
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    log_filter: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.log_filter.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "Invalid configuration: log_filter must not be empty".into(),
        ));
    }
    Ok(())
}
