//! Layered CLI configuration.
//!
//! Values resolve in order: built-in defaults, then the TOML file named by
//! `CARDDUEL_CONFIG`, then individual environment variables. Each value
//! remembers where it came from so `cfg` can report it.
//!
//! ```toml
//! min_stake = "0.5"
//! max_stake = 5
//! pool = "250"
//! bankroll = 20
//! seed = 42
//! ```

use cardduel_engine::config::{TableConfig, UNIT};
use cardduel_engine::errors::GameError;
use serde::{Deserialize, Serialize};
use std::fs;

use crate::validation::parse_amount;

pub const CONFIG_ENV: &str = "CARDDUEL_CONFIG";
pub const SEED_ENV: &str = "CARDDUEL_SEED";
pub const MIN_STAKE_ENV: &str = "CARDDUEL_MIN_STAKE";
pub const MAX_STAKE_ENV: &str = "CARDDUEL_MAX_STAKE";
pub const POOL_ENV: &str = "CARDDUEL_POOL";
pub const BANKROLL_ENV: &str = "CARDDUEL_BANKROLL";

/// Amounts are in smallest units.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub min_stake: u64,
    pub max_stake: u64,
    /// Opening pool balance
    pub pool: u64,
    /// Opening balance of the local participant
    pub bankroll: u64,
    pub seed: Option<u64>,
}

impl Config {
    pub fn table(&self) -> TableConfig {
        TableConfig {
            min_stake: self.min_stake,
            max_stake: self.max_stake,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let table = TableConfig::default();
        Self {
            min_stake: table.min_stake,
            max_stake: table.max_stake,
            pool: 100 * UNIT,
            bankroll: 10 * UNIT,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub min_stake: ValueSource,
    pub max_stake: ValueSource,
    pub pool: ValueSource,
    pub bankroll: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            min_stake: ValueSource::Default,
            max_stake: ValueSource::Default,
            pool: ValueSource::Default,
            bankroll: ValueSource::Default,
            seed: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
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
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Some(path) = non_empty_env(CONFIG_ENV) {
        let s = fs::read_to_string(&path)?;
        let f: FileConfig = toml::from_str(&s)?;
        tracing::debug!(path = %path, "loaded config file");
        if let Some(v) = f.min_stake {
            cfg.min_stake = v.to_units("min_stake")?;
            sources.min_stake = ValueSource::File;
        }
        if let Some(v) = f.max_stake {
            cfg.max_stake = v.to_units("max_stake")?;
            sources.max_stake = ValueSource::File;
        }
        if let Some(v) = f.pool {
            cfg.pool = v.to_units("pool")?;
            sources.pool = ValueSource::File;
        }
        if let Some(v) = f.bankroll {
            cfg.bankroll = v.to_units("bankroll")?;
            sources.bankroll = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }

    if let Some(seed) = non_empty_env(SEED_ENV) {
        cfg.seed = Some(
            seed.trim()
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed '{}'", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(v) = env_amount(MIN_STAKE_ENV)? {
        cfg.min_stake = v;
        sources.min_stake = ValueSource::Env;
    }
    if let Some(v) = env_amount(MAX_STAKE_ENV)? {
        cfg.max_stake = v;
        sources.max_stake = ValueSource::Env;
    }
    if let Some(v) = env_amount(POOL_ENV)? {
        cfg.pool = v;
        sources.pool = ValueSource::Env;
    }
    if let Some(v) = env_amount(BANKROLL_ENV)? {
        cfg.bankroll = v;
        sources.bankroll = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

/// TOML amounts may be integers (whole units), floats, or decimal strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Whole(u64),
    Float(f64),
    Decimal(String),
}

impl RawAmount {
    fn to_units(&self, key: &str) -> Result<u64, ConfigError> {
        let text = match self {
            RawAmount::Whole(v) => v.to_string(),
            RawAmount::Float(v) => v.to_string(),
            RawAmount::Decimal(s) => s.clone(),
        };
        parse_amount(&text).map_err(|e| ConfigError::Invalid(format!("Invalid {}: {}", key, e)))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    min_stake: Option<RawAmount>,
    #[serde(default)]
    max_stake: Option<RawAmount>,
    #[serde(default)]
    pool: Option<RawAmount>,
    #[serde(default)]
    bankroll: Option<RawAmount>,
    #[serde(default)]
    seed: Option<u64>,
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_amount(key: &str) -> Result<Option<u64>, ConfigError> {
    match non_empty_env(key) {
        Some(v) => parse_amount(&v)
            .map(Some)
            .map_err(|e| ConfigError::Invalid(format!("Invalid {}: {}", key, e))),
        None => Ok(None),
    }
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    cfg.table().validate().map_err(|e| match e {
        GameError::InvalidConfig(msg) => ConfigError::Invalid(msg),
        other => ConfigError::Invalid(other.to_string()),
    })
}
