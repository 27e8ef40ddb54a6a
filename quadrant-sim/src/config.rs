use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::info;
use serde::Deserialize;

/// Simulator configuration, read from `quadrant.toml`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Directory backing the persistent store
    pub store_dir: PathBuf,
    /// Simulate a device with health sensors
    pub health: bool,
    /// Report a 24-hour clock preference
    pub clock_24h: bool,
    /// Battery charge at startup
    pub battery_percent: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            store_dir: PathBuf::from("./quadrant-store"),
            health: true,
            clock_24h: true,
            battery_percent: 100,
        }
    }
}

impl SimConfig {
    pub const PATH: &'static str = "./quadrant.toml";

    /// Load the config file, falling back to defaults if it does not exist
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            info!("No config at `{}`, using defaults", path.display());
            return Ok(Self::default());
        }

        info!("Loading config from `{}`", path.display());
        let text = fs::read_to_string(path)
            .with_context(|| format!("Error reading config file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Error parsing config file {}", path.display()))
    }

    fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        assert_eq!(SimConfig::parse("").unwrap(), SimConfig::default());
    }

    #[test]
    fn test_partial_file() {
        let config = SimConfig::parse("health = false\nbattery_percent = 42\n").unwrap();
        assert!(!config.health);
        assert_eq!(config.battery_percent, 42);
        assert!(config.clock_24h);
        assert_eq!(config.store_dir, PathBuf::from("./quadrant-store"));
    }

    #[test]
    fn test_bad_value_rejected() {
        assert!(SimConfig::parse("battery_percent = \"full\"").is_err());
    }

    #[test]
    fn test_shipped_config_parses() {
        let config = SimConfig::parse(include_str!("../quadrant.toml")).unwrap();
        assert_eq!(config.battery_percent, 86);
    }
}
