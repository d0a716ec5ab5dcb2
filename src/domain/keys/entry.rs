//! User-authored key entries

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::{InvalidKeyEntry, KeyEntryParseError};

/// Interval used when an entry is added without one
pub const DEFAULT_INTERVAL_MS: i64 = 1000;

/// One row of the key table: which key, how often, and whether it runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEntry {
    pub key: String,
    pub interval_ms: i64,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

impl KeyEntry {
    pub fn new(key: impl Into<String>, interval_ms: i64) -> Self {
        Self {
            key: key.into().trim().to_string(),
            interval_ms,
            enabled: true,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Whether this entry takes part in a run
    pub fn is_runnable(&self) -> bool {
        self.enabled && self.interval_ms > 0 && !self.key.trim().is_empty()
    }

    /// Check the entry before it is stored
    pub fn validate(&self) -> Result<(), InvalidKeyEntry> {
        if self.key.trim().is_empty() || self.interval_ms <= 0 {
            return Err(InvalidKeyEntry);
        }
        Ok(())
    }
}

impl fmt::Display for KeyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ms - {}",
            self.key,
            self.interval_ms,
            if self.enabled { "enabled" } else { "disabled" }
        )
    }
}

impl FromStr for KeyEntry {
    type Err = KeyEntryParseError;

    /// Parse `KEY:MS`. The last `:` separates the interval, so `:` itself
    /// can be used as a key (`"::250"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || KeyEntryParseError {
            input: s.to_string(),
        };

        let (key, interval) = s.rsplit_once(':').ok_or_else(err)?;
        let interval_ms = parse_interval(interval);
        let entry = KeyEntry::new(key, interval_ms);
        entry.validate().map_err(|_| err())?;
        Ok(entry)
    }
}

/// Entries that will run, in table order
pub fn runnable_entries(entries: &[KeyEntry]) -> Vec<&KeyEntry> {
    entries.iter().filter(|e| e.is_runnable()).collect()
}

/// Lenient interval parse: blank or non-numeric input yields 0.
pub fn parse_interval(value: &str) -> i64 {
    value.trim().parse().unwrap_or(0)
}
