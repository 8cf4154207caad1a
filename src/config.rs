//! Catalog configuration.
//!
//! Every field has a default, so an empty TOML document (or no document at
//! all) is a valid configuration. The only demo with tunable behavior is the
//! traffic light, whose tick count and pacing live under `[traffic_light]`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{PatternError, Result};

/// Environment variable naming a config file when `--config` is not given.
pub const CONFIG_ENV: &str = "PATTERNS_CONFIG";

/// Environment variable overriding `traffic_light.tick_delay_ms`.
pub const TICK_DELAY_ENV: &str = "PATTERNS_TICK_DELAY_MS";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    pub traffic_light: TrafficLightConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrafficLightConfig {
    pub ticks: u32,
    pub tick_delay_ms: u64,
}

impl Default for TrafficLightConfig {
    fn default() -> Self {
        Self {
            ticks: 6,
            tick_delay_ms: 1000,
        }
    }
}

impl TrafficLightConfig {
    pub fn tick_delay(&self) -> Duration {
        Duration::from_millis(self.tick_delay_ms)
    }
}

impl CatalogConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| PatternError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Resolves the configuration: explicit path, then `PATTERNS_CONFIG`,
    /// then defaults. `PATTERNS_TICK_DELAY_MS` is applied last.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let from_env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let mut config = match explicit.map(Path::to_path_buf).or(from_env) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading catalog config");
                Self::from_file(&path)?
            }
            None => Self::default(),
        };

        if let Ok(raw) = std::env::var(TICK_DELAY_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.traffic_light.tick_delay_ms = ms,
                Err(_) => tracing::warn!(value = %raw, "ignoring non-numeric {}", TICK_DELAY_ENV),
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CatalogConfig::default();
        assert_eq!(config.traffic_light.ticks, 6);
        assert_eq!(config.traffic_light.tick_delay(), Duration::from_secs(1));
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(CatalogConfig::from_toml("").unwrap(), CatalogConfig::default());
    }

    #[test]
    fn test_partial_section() {
        let config = CatalogConfig::from_toml("[traffic_light]\ntick_delay_ms = 0\n").unwrap();
        assert_eq!(config.traffic_light.ticks, 6);
        assert_eq!(config.traffic_light.tick_delay_ms, 0);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = CatalogConfig::from_toml("[traffic_light]\ncolour = \"red\"\n").unwrap_err();
        assert!(matches!(err, PatternError::ConfigParse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = CatalogConfig::from_file(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, PatternError::ConfigRead { .. }));
    }
}
