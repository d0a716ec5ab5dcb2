//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::keys::{KeyEntry, Platform};
use crate::domain::Duration;
use crate::infrastructure::InjectorTool;

/// Auto Key Presser - press keys repeatedly at configurable intervals
#[derive(Parser, Debug)]
#[command(name = "auto-key-presser")]
#[command(version)]
#[command(about = "Press keys repeatedly, each on its own interval, until stopped")]
#[command(long_about = None)]
pub struct Cli {
    /// Key to press and its interval, repeatable (e.g., A:1000, F5:250, SPACE:500).
    /// Overrides the key table from the config file.
    #[arg(short = 'k', long = "key", value_name = "KEY:MS")]
    pub keys: Vec<KeyEntry>,

    /// Stop automatically after this long (e.g., 30s, 1m, 2m30s, 500ms)
    #[arg(short = 'f', long = "for", value_name = "TIME")]
    pub run_for: Option<Duration>,

    /// Log key presses instead of sending them
    #[arg(long, conflicts_with = "injector")]
    pub dry_run: bool,

    /// Key injection backend (enigo, dry-run)
    #[arg(long, value_name = "TOOL")]
    pub injector: Option<String>,

    /// Log level filter (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Config file location
    #[arg(long, global = true, value_name = "PATH", env = "AUTO_KEY_PRESSER_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage the stored key table
    Keys {
        #[command(subcommand)]
        action: KeysAction,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Key table actions
#[derive(Subcommand, Debug)]
pub enum KeysAction {
    /// List stored keys with their row numbers
    List,
    /// Add a key to the table
    Add {
        /// Key (ex: A, F5, SPACE)
        key: String,
        /// Interval in milliseconds
        #[arg(short, long, value_name = "MS", default_value = "1000")]
        interval: String,
        /// Store the key disabled
        #[arg(long)]
        disabled: bool,
    },
    /// Remove the key at ROW
    Remove {
        row: usize,
    },
    /// Change the key or interval at ROW
    Edit {
        row: usize,
        /// New key
        #[arg(long)]
        key: Option<String>,
        /// New interval in milliseconds
        #[arg(short, long, value_name = "MS")]
        interval: Option<String>,
    },
    /// Enable the key at ROW
    Enable {
        row: usize,
    },
    /// Disable the key at ROW
    Disable {
        row: usize,
    },
    /// Show what each key resolves to
    Check {
        /// Keys to resolve
        #[arg(required = true)]
        keys: Vec<String>,
        /// Resolve against another platform's key codes (windows, macos, linux)
        #[arg(long)]
        platform: Option<Platform>,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Parsed options for a key-pressing run
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub entries: Vec<KeyEntry>,
    pub run_for: Option<Duration>,
    pub injector: InjectorTool,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["injector", "log_level"];

/// Valid log levels
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
