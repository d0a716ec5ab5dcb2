//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::keys::KeyEntry;

/// Default injector tool
pub const DEFAULT_INJECTOR: &str = "enigo";

/// Default log level when neither CLI nor env override it
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub injector: Option<String>,
    pub log_level: Option<String>,
    pub keys: Option<Vec<KeyEntry>>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            injector: Some(DEFAULT_INJECTOR.to_string()),
            log_level: Some(DEFAULT_LOG_LEVEL.to_string()),
            keys: Some(Self::default_keys()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// The key table a fresh install starts with
    pub fn default_keys() -> Vec<KeyEntry> {
        vec![KeyEntry::new("A", 1000)]
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this. The key table
    /// is replaced as a whole, never merged row by row.
    pub fn merge(self, other: Self) -> Self {
        Self {
            injector: other.injector.or(self.injector),
            log_level: other.log_level.or(self.log_level),
            keys: other.keys.or(self.keys),
        }
    }

    /// Get injector tool name, or "enigo" if not set
    pub fn injector_or_default(&self) -> &str {
        self.injector.as_deref().unwrap_or(DEFAULT_INJECTOR)
    }

    /// Get log level, or "warn" if not set
    pub fn log_level_or_default(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Get the key table, or the single default row if not set
    pub fn keys_or_default(&self) -> Vec<KeyEntry> {
        self.keys.clone().unwrap_or_else(Self::default_keys)
    }
}
