//! Settings loaded from a TOML file.

use crate::games::tictactoe::SortOrder;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Environment variable naming a settings file.
pub const CONFIG_ENV: &str = "STRICTLY_TIMETRAVEL_CONFIG";

/// User-configurable settings.
///
/// Every key is optional:
///
/// ```toml
/// ascending = false
/// log_filter = "debug"
/// log_file = "/tmp/timetravel.log"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Initial move list order.
    #[serde(default = "default_ascending")]
    ascending: bool,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// File the terminal UI writes logs to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_ascending() -> bool {
    true
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_timetravel.log")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ascending: default_ascending(),
            log_filter: default_log_filter(),
            log_file: default_log_file(),
        }
    }
}

impl Settings {
    /// Loads settings from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        info!(ascending = settings.ascending, "Settings loaded");
        Ok(settings)
    }

    /// Loads from `path`, else from [`CONFIG_ENV`], else defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(PathBuf::from(path)),
            None => {
                debug!("No settings file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Overrides the initial move list order.
    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.ascending = order == SortOrder::Ascending;
        self
    }

    /// Initial move list order.
    pub fn order(&self) -> SortOrder {
        SortOrder::from_ascending(self.ascending)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str("ascending = false").unwrap();
        assert_eq!(settings.order(), SortOrder::Descending);
        assert_eq!(settings.log_filter(), "info");
    }

    #[test]
    fn test_with_order_overrides() {
        let settings = Settings::default().with_order(SortOrder::Descending);
        assert!(!settings.ascending());
    }
}
