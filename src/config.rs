use crate::model::DEFAULT_BUDGET;
use eyre::{Result, WrapErr};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "hourtrack.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub tracker: TrackerConfig,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrackerConfig {
    #[serde(default = "default_budget")]
    pub default_budget: i64,
}

impl Default for TrackerConfig {
    fn default() -> TrackerConfig {
        TrackerConfig {
            default_budget: default_budget(),
        }
    }
}

fn default_budget() -> i64 {
    DEFAULT_BUDGET
}

impl Config {
    pub fn parse(content: &str) -> Result<Config> {
        toml::from_str(content).wrap_err("cannot parse configuration")
    }

    pub fn load(file_name: &Path) -> Result<Config> {
        let content = fs::read_to_string(file_name)
            .wrap_err_with(|| format!("cannot load configuration file {}", file_name.display()))?;
        Config::parse(&content)
    }

    /// Load the configuration file if given, or the default one if it
    /// exists, or fall back to the default configuration.
    pub fn load_or_default(file_name: Option<&Path>) -> Result<Config> {
        match file_name {
            Some(file_name) => Config::load(file_name),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Config::load(Path::new(DEFAULT_CONFIG_FILE))
            }
            None => Ok(Config::default()),
        }
    }
}

#[test]
fn test_parse() {
    let config = Config::parse("[tracker]\ndefault_budget = 90\n").unwrap();
    assert_eq!(config.tracker.default_budget, 90);
    let config = Config::parse("").unwrap();
    assert_eq!(config.tracker.default_budget, DEFAULT_BUDGET);
    assert!(Config::parse("[tracker]\nbudget = 90\n").is_err());
    assert!(Config::parse("[tracker]\ndefault_budget = \"lots\"\n").is_err());
}
