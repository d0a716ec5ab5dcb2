//! Application layer - Use cases and port interfaces
//!
//! Contains the key-press runner, run planning, and the trait
//! definitions for external system interactions.

pub mod ports;
pub mod runner;
pub mod start;

// Re-export use cases
pub use runner::Runner;
pub use start::{plan_tasks, StartError, StartPlan};
