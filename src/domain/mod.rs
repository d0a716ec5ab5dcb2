//! Domain layer - Core business logic
//!
//! Contains value objects, key resolution, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod duration;
pub mod error;
pub mod keys;
pub mod runner;

// Re-export common types
pub use config::AppConfig;
pub use duration::Duration;
pub use error::*;
pub use keys::{KeyCode, KeyEntry, KeyResolver, KeyTarget, KeyTask, Platform};
pub use runner::RunnerState;
