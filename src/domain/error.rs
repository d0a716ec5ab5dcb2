//! Domain error types

use thiserror::Error;

/// Error when a key descriptor cannot be mapped to a key target
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnsupportedKeyError {
    #[error("empty key")]
    Empty,

    #[error("unsupported key: {input}")]
    Unsupported { input: String },
}

impl UnsupportedKeyError {
    /// The descriptor that failed to resolve (empty for blank input)
    pub fn input(&self) -> &str {
        match self {
            Self::Empty => "",
            Self::Unsupported { input } => input,
        }
    }
}

/// Error when parsing a `KEY:MS` entry string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid key entry: \"{input}\". Expected format: <key>:<interval ms> (e.g., A:1000, F5:250, SPACE:500)")]
pub struct KeyEntryParseError {
    pub input: String,
}

/// Error when a key entry fails validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Enter a key and a positive interval in ms.")]
pub struct InvalidKeyEntry;

/// Error when parsing a duration string
#[derive(Debug, Clone, Error)]
#[error("Invalid duration format: \"{input}\". Expected <number> followed by ms, s, m, or h, optionally combined (e.g., 500ms, 30s, 1m, 1h, 2m30s)")]
pub struct DurationParseError {
    pub input: String,
}

/// Error when an unknown platform name is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid platform: \"{input}\". Valid platforms are: windows, macos, linux")]
pub struct InvalidPlatformError {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {message}")]
    ReadError { path: String, message: String },

    #[error("Failed to parse config file {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
