use pokerhand_engine::simulation::Predicate;
use serde::{Deserialize, Serialize};
use std::fs;

pub const CONFIG_ENV: &str = "POKERHAND_CONFIG";
pub const SEED_ENV: &str = "POKERHAND_SEED";
pub const TARGET_ENV: &str = "POKERHAND_TARGET";
pub const MAX_TRIALS_ENV: &str = "POKERHAND_MAX_TRIALS";
pub const PREDICATE_ENV: &str = "POKERHAND_PREDICATE";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub target: u64,
    pub max_trials: Option<u64>,
    pub predicate: Predicate,
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
    pub seed: ValueSource,
    pub target: ValueSource,
    pub max_trials: ValueSource,
    pub predicate: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            target: ValueSource::Default,
            max_trials: ValueSource::Default,
            predicate: ValueSource::Default,
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
            target: 10,
            max_trials: None,
            predicate: Predicate::Straight,
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

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    resolve(|key| std::env::var(key).ok())
}

/// Defaults, then the TOML file named by `POKERHAND_CONFIG`, then individual env overrides.
pub fn resolve<F>(lookup: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Some(path) = lookup(CONFIG_ENV).filter(|p| !p.is_empty()) {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.target {
            cfg.target = v;
            sources.target = ValueSource::File;
        }
        if let Some(v) = f.max_trials {
            cfg.max_trials = Some(v);
            sources.max_trials = ValueSource::File;
        }
        if let Some(v) = f.predicate {
            cfg.predicate = v
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid predicate: {}", v)))?;
            sources.predicate = ValueSource::File;
        }
    }

    if let Some(seed) = lookup(SEED_ENV)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(target) = lookup(TARGET_ENV)
        && !target.is_empty()
    {
        cfg.target = target
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid target".into()))?;
        sources.target = ValueSource::Env;
    }
    if let Some(max) = lookup(MAX_TRIALS_ENV)
        && !max.is_empty()
    {
        cfg.max_trials = Some(
            max.parse()
                .map_err(|_| ConfigError::Invalid("Invalid max_trials".into()))?,
        );
        sources.max_trials = ValueSource::Env;
    }
    if let Some(pred) = lookup(PREDICATE_ENV)
        && !pred.is_empty()
    {
        cfg.predicate = pred
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid predicate: {}", pred)))?;
        sources.predicate = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    target: Option<u64>,
    #[serde(default)]
    max_trials: Option<u64>,
    #[serde(default)]
    predicate: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.target == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: target must be >=1".into(),
        ));
    }
    if cfg.max_trials == Some(0) {
        return Err(ConfigError::Invalid(
            "Invalid configuration: max_trials must be >0".into(),
        ));
    }
    Ok(())
}
