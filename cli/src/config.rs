use serde::{Deserialize, Serialize};
use std::fs;

use klondike_engine::rules::{EmptyPileRule, RecycleOrder, Rules};

/// Resolved CLI configuration: the default table plus an optional fixed seed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub recycle: RecycleOrder,
    pub empty_pile: EmptyPileRule,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            recycle: RecycleOrder::KeepOrder,
            empty_pile: EmptyPileRule::AnyCard,
        }
    }
}

impl Config {
    pub fn rules(&self) -> Rules {
        Rules {
            recycle: self.recycle,
            empty_pile: self.empty_pile,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

impl ValueSource {
    pub fn label(self) -> &'static str {
        match self {
            ValueSource::Default => "default",
            ValueSource::File => "file",
            ValueSource::Env => "env",
        }
    }
}

/// Where each resolved value came from, for the `cfg` command.
#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub recycle: ValueSource,
    pub empty_pile: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            recycle: ValueSource::Default,
            empty_pile: ValueSource::Default,
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
            ConfigError::Io(e) => write!(f, "config I/O error: {}", e),
            ConfigError::Parse(e) => write!(f, "config parse error: {}", e),
            ConfigError::Invalid(msg) => write!(f, "invalid config value: {}", msg),
        }
    }
}

/// Optional values as they appear in a TOML config file.
#[derive(Debug, Deserialize)]
struct FileConfig {
    seed: Option<u64>,
    recycle: Option<RecycleOrder>,
    empty_pile: Option<EmptyPileRule>,
}

/// Resolve the configuration with default < file < env precedence.
///
/// The file is only consulted when `KLONDIKE_CONFIG` names a path; the
/// per-value environment overrides are `KLONDIKE_SEED`, `KLONDIKE_RECYCLE`
/// (`keep-order`/`reverse`) and `KLONDIKE_EMPTY_PILE`
/// (`any-card`/`king-only`).
pub fn resolve() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut src = ConfigSources::default();

    if let Ok(path) = std::env::var("KLONDIKE_CONFIG") {
        let text = fs::read_to_string(&path)?;
        let file_cfg: FileConfig = toml::from_str(&text)?;
        if let Some(seed) = file_cfg.seed {
            cfg.seed = Some(seed);
            src.seed = ValueSource::File;
        }
        if let Some(recycle) = file_cfg.recycle {
            cfg.recycle = recycle;
            src.recycle = ValueSource::File;
        }
        if let Some(empty_pile) = file_cfg.empty_pile {
            cfg.empty_pile = empty_pile;
            src.empty_pile = ValueSource::File;
        }
    }

    if let Ok(v) = std::env::var("KLONDIKE_SEED") {
        let seed = v
            .parse::<u64>()
            .map_err(|_| ConfigError::Invalid(format!("KLONDIKE_SEED: '{}' is not a u64", v)))?;
        cfg.seed = Some(seed);
        src.seed = ValueSource::Env;
    }
    if let Ok(v) = std::env::var("KLONDIKE_RECYCLE") {
        cfg.recycle = parse_recycle(&v)?;
        src.recycle = ValueSource::Env;
    }
    if let Ok(v) = std::env::var("KLONDIKE_EMPTY_PILE") {
        cfg.empty_pile = parse_empty_pile(&v)?;
        src.empty_pile = ValueSource::Env;
    }

    Ok(ConfigResolved {
        config: cfg,
        sources: src,
    })
}

fn parse_recycle(v: &str) -> Result<RecycleOrder, ConfigError> {
    match v {
        "keep-order" => Ok(RecycleOrder::KeepOrder),
        "reverse" => Ok(RecycleOrder::Reverse),
        other => Err(ConfigError::Invalid(format!(
            "KLONDIKE_RECYCLE: '{}' (expected keep-order or reverse)",
            other
        ))),
    }
}

fn parse_empty_pile(v: &str) -> Result<EmptyPileRule, ConfigError> {
    match v {
        "any-card" => Ok(EmptyPileRule::AnyCard),
        "king-only" => Ok(EmptyPileRule::KingOnly),
        other => Err(ConfigError::Invalid(format!(
            "KLONDIKE_EMPTY_PILE: '{}' (expected any-card or king-only)",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_permissive_table() {
        let cfg = Config::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.rules(), Rules::default());
    }

    #[test]
    fn file_values_parse_from_toml() {
        let parsed: FileConfig =
            toml::from_str("seed = 42\nrecycle = \"reverse\"\nempty_pile = \"king-only\"")
                .expect("valid toml");
        assert_eq!(parsed.seed, Some(42));
        assert_eq!(parsed.recycle, Some(RecycleOrder::Reverse));
        assert_eq!(parsed.empty_pile, Some(EmptyPileRule::KingOnly));
    }

    #[test]
    fn partial_file_leaves_other_values_unset() {
        let parsed: FileConfig = toml::from_str("seed = 7").expect("valid toml");
        assert_eq!(parsed.seed, Some(7));
        assert!(parsed.recycle.is_none());
        assert!(parsed.empty_pile.is_none());
    }

    #[test]
    fn env_value_parsers_reject_junk() {
        assert!(parse_recycle("keep-order").is_ok());
        assert!(parse_recycle("sideways").is_err());
        assert!(parse_empty_pile("king-only").is_ok());
        assert!(parse_empty_pile("aces-wild").is_err());
    }
}
