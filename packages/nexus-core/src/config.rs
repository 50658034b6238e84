//! Runtime configuration loaded from TOML.

use crate::spectrum::WAVE_POINTS;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "AURELIA_NEXUS_CONFIG";

/// Tunables for the conversation and its animation loop.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Spectrum perturbation period
    pub tick_interval_ms: u64,
    /// Lower bound (inclusive) of the reply delay
    pub reply_delay_min_ms: u64,
    /// Upper bound (exclusive) of the reply delay
    pub reply_delay_max_ms: u64,
    /// Number of spectrum bars
    pub spectrum_points: usize,
    /// Fixed RNG seed for reproducible sessions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Start with the three welcome messages
    pub seed_conversation: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_interval_ms: 220,
            reply_delay_min_ms: 1000,
            reply_delay_max_ms: 2200,
            spectrum_points: WAVE_POINTS,
            seed: None,
            seed_conversation: true,
        }
    }
}

impl Config {
    /// Get the default config file path.
    ///
    /// Default path: `~/.aurelia/nexus.toml`
    /// Can be overridden with the `AURELIA_NEXUS_CONFIG` environment variable.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = env::var(CONFIG_ENV) {
            if !path.trim().is_empty() {
                return PathBuf::from(path);
            }
        }

        directories::BaseDirs::new()
            .map(|dirs| dirs.home_dir().join(".aurelia/nexus.toml"))
            .unwrap_or_else(|| PathBuf::from("nexus.toml"))
    }

    /// Load from the default path.
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::default_path())
    }

    /// Load from a specific path. A missing file yields the defaults.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the conversation cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.tick_interval_ms == 0 {
            return Err(Error::InvalidConfig(
                "tick_interval_ms must be positive".to_string(),
            ));
        }
        if self.reply_delay_max_ms <= self.reply_delay_min_ms {
            return Err(Error::InvalidConfig(format!(
                "reply_delay_max_ms ({}) must exceed reply_delay_min_ms ({})",
                self.reply_delay_max_ms, self.reply_delay_min_ms
            )));
        }
        if self.spectrum_points == 0 {
            return Err(Error::InvalidConfig(
                "spectrum_points must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tick_interval(), Duration::from_millis(220));
        assert_eq!(config.spectrum_points, 52);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from_path(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nexus.toml");
        fs::write(&path, "seed = 11\nspectrum_points = 16\n").unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.seed, Some(11));
        assert_eq!(config.spectrum_points, 16);
        assert_eq!(config.reply_delay_min_ms, 1000);
        assert!(config.seed_conversation);
    }

    #[test]
    fn test_invalid_delay_window_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nexus.toml");
        fs::write(&path, "reply_delay_min_ms = 500\nreply_delay_max_ms = 500\n").unwrap();

        let result = Config::load_from_path(&path);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_zero_tick_rejected() {
        let config = Config {
            tick_interval_ms: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_malformed_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nexus.toml");
        fs::write(&path, "tick_interval_ms = \"fast\"").unwrap();
        assert!(matches!(Config::load_from_path(&path), Err(Error::Toml(_))));
    }

    #[test]
    fn test_round_trips_through_toml() {
        let config = Config {
            seed: Some(5),
            ..Default::default()
        };
        let text = toml::to_string(&config).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }
}
