//! Configuration handling for the TUI

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Longest accepted transition duration
const MAX_DURATION_MS: u64 = 5_000;

/// Narrowest accepted compact breakpoint
const MIN_COMPACT_WIDTH: u16 = 20;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{field} must be at most {max}, got {value}")]
    TooLarge {
        field: &'static str,
        value: u64,
        max: u64,
    },
    #[error("compact_width must be at least {min}, got {value}")]
    CompactWidthTooSmall { value: u16, min: u16 },
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TuiConfig {
    /// Animate the contact dialog
    pub animations: Option<bool>,
    /// Dialog enter duration in milliseconds
    pub enter_duration_ms: Option<u64>,
    /// Dialog leave duration in milliseconds
    pub leave_duration_ms: Option<u64>,
    /// Terminal width below which the header collapses into the menu button
    pub compact_width: Option<u16>,
}

impl TuiConfig {
    pub const DEFAULT_ENTER_MS: u64 = 300;
    pub const DEFAULT_LEAVE_MS: u64 = 200;
    pub const DEFAULT_COMPACT_WIDTH: u16 = 100;

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "translucid", "translucid-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config directory.
    ///
    /// A malformed or out-of-range file is reported and replaced by the
    /// defaults; I/O failures are returned.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) if path.exists() => match Self::load_from(&path) {
                Ok(config) => Ok(config),
                Err(err @ ConfigError::Io { .. }) => Err(err),
                Err(err) => {
                    tracing::warn!("ignoring config: {err}");
                    Ok(Self::default())
                }
            },
            _ => Ok(Self::default()),
        }
    }

    /// Load and validate configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: TuiConfig =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("enter_duration_ms", self.enter_duration_ms),
            ("leave_duration_ms", self.leave_duration_ms),
        ] {
            if let Some(value) = value.filter(|v| *v > MAX_DURATION_MS) {
                return Err(ConfigError::TooLarge {
                    field,
                    value,
                    max: MAX_DURATION_MS,
                });
            }
        }
        if let Some(width) = self.compact_width.filter(|w| *w < MIN_COMPACT_WIDTH) {
            return Err(ConfigError::CompactWidthTooSmall {
                value: width,
                min: MIN_COMPACT_WIDTH,
            });
        }
        Ok(())
    }

    pub fn animations_enabled(&self) -> bool {
        self.animations.unwrap_or(true)
    }

    /// Dialog enter duration (zero when animations are off)
    pub fn enter_duration(&self) -> Duration {
        if !self.animations_enabled() {
            return Duration::ZERO;
        }
        Duration::from_millis(self.enter_duration_ms.unwrap_or(Self::DEFAULT_ENTER_MS))
    }

    /// Dialog leave duration (zero when animations are off)
    pub fn leave_duration(&self) -> Duration {
        if !self.animations_enabled() {
            return Duration::ZERO;
        }
        Duration::from_millis(self.leave_duration_ms.unwrap_or(Self::DEFAULT_LEAVE_MS))
    }

    pub fn compact_width(&self) -> u16 {
        self.compact_width.unwrap_or(Self::DEFAULT_COMPACT_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("translucid-tui-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.animations.is_none());
        assert!(config.enter_duration_ms.is_none());
        assert!(config.leave_duration_ms.is_none());
        assert!(config.compact_width.is_none());
    }

    #[test]
    fn test_defaults_resolve() {
        let config = TuiConfig::default();
        assert!(config.animations_enabled());
        assert_eq!(config.enter_duration(), Duration::from_millis(300));
        assert_eq!(config.leave_duration(), Duration::from_millis(200));
        assert_eq!(config.compact_width(), 100);
    }

    #[test]
    fn test_disabled_animations_zero_durations() {
        let config = TuiConfig {
            animations: Some(false),
            enter_duration_ms: Some(500),
            ..Default::default()
        };
        assert_eq!(config.enter_duration(), Duration::ZERO);
        assert_eq!(config.leave_duration(), Duration::ZERO);
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            animations: Some(true),
            enter_duration_ms: Some(150),
            leave_duration_ms: Some(100),
            compact_width: Some(80),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        let json = r#"{"compact_width": 90, "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.compact_width, Some(90));
        assert!(parsed.animations.is_none());
    }

    #[test]
    fn test_validate_rejects_long_durations() {
        let config = TuiConfig {
            leave_duration_ms: Some(60_000),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::TooLarge {
                field: "leave_duration_ms",
                ..
            }
        ));
    }

    #[test]
    fn test_validate_rejects_tiny_breakpoint() {
        let config = TuiConfig {
            compact_width: Some(5),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::CompactWidthTooSmall { value: 5, .. })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let path = temp_path("roundtrip/config.json");
        let config = TuiConfig {
            compact_width: Some(72),
            ..Default::default()
        };
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
        assert_eq!(TuiConfig::load_from(&path).unwrap(), config);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_load_from_malformed_file() {
        let path = temp_path("malformed/config.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            TuiConfig::load_from(&path),
            Err(ConfigError::Parse { .. })
        ));
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_load_from_missing_file() {
        let path = temp_path("missing/config.json");
        assert!(matches!(
            TuiConfig::load_from(&path),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_load_returns_ok_without_file() {
        // Falls back to defaults when nothing is configured
        assert!(TuiConfig::load().is_ok());
    }
}
