//! Configuration loading and management.

use std::path::{Path, PathBuf};

use chrono::NaiveTime;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use ct_core::{AgendaTimes, SessionLimits};

/// Application configuration.
///
/// Every field has a sensible default; a TOML file and `CT_*` environment
/// variables can override them (e.g. `CT_MORNING_MINUTES=150`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Morning session capacity in minutes.
    pub morning_minutes: u32,
    /// Soft minimum target for the afternoon session in minutes.
    pub afternoon_min_minutes: u32,
    /// Afternoon session capacity in minutes.
    pub afternoon_max_minutes: u32,
    /// Wall-clock start of the morning session (`%H:%M:%S`).
    pub morning_start: NaiveTime,
    /// Wall-clock start of the afternoon session (`%H:%M:%S`).
    pub afternoon_start: NaiveTime,
}

impl Default for Config {
    fn default() -> Self {
        let limits = SessionLimits::default();
        let times = AgendaTimes::default();
        Self {
            morning_minutes: limits.morning_minutes,
            afternoon_min_minutes: limits.afternoon_min_minutes,
            afternoon_max_minutes: limits.afternoon_max_minutes,
            morning_start: times.morning_start,
            afternoon_start: times.afternoon_start,
        }
    }
}

impl Config {
    /// Loads configuration from default locations.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load() -> Result<Self, figment::Error> {
        Self::load_from(None)
    }

    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (CT_*)
        figment = figment.merge(Env::prefixed("CT_"));

        let config: Self = figment.extract()?;
        config
            .limits()
            .validate()
            .map_err(|e| figment::Error::from(e.to_string()))?;
        Ok(config)
    }

    /// Session capacities as the packer consumes them.
    #[must_use]
    pub const fn limits(&self) -> SessionLimits {
        SessionLimits {
            morning_minutes: self.morning_minutes,
            afternoon_min_minutes: self.afternoon_min_minutes,
            afternoon_max_minutes: self.afternoon_max_minutes,
        }
    }

    /// Agenda anchors as the formatter consumes them.
    #[must_use]
    pub const fn agenda_times(&self) -> AgendaTimes {
        AgendaTimes {
            morning_start: self.morning_start,
            afternoon_start: self.afternoon_start,
        }
    }
}

/// Returns the platform-specific config directory for ct.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("ct"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_domain_defaults() {
        let config = Config::default();
        assert_eq!(config.limits(), SessionLimits::default());
        assert_eq!(config.agenda_times(), AgendaTimes::default());
    }

    #[test]
    fn test_load_from_rejects_invalid_limits() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "afternoon_min_minutes = 300\n").unwrap();

        let result = Config::load_from(Some(&path));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_merges_partial_file_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "morning_minutes = 150\nmorning_start = \"08:30:00\"\n").unwrap();

        let config = Config::load_from(Some(&path)).unwrap();
        assert_eq!(config.morning_minutes, 150);
        assert_eq!(
            config.morning_start,
            NaiveTime::from_hms_opt(8, 30, 0).unwrap()
        );
        // Untouched fields keep their defaults.
        assert_eq!(config.afternoon_max_minutes, 240);
    }
}
