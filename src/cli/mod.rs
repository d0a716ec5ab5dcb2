//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, signal handling,
//! the key table and config subcommands, and the run entry point.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod keys_cmd;
pub mod presenter;
pub mod signals;

// Re-export commonly used types
pub use app::{run_presser, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, KeysAction, RunOptions};
pub use keys_cmd::handle_keys_command;
pub use presenter::Presenter;
