//! Key entries, resolution, and resolved tasks

mod entry;
mod platform;
mod resolver;
mod task;

pub use entry::{parse_interval, runnable_entries, KeyEntry, DEFAULT_INTERVAL_MS};
pub use platform::{Platform, NAMED_KEYS};
pub use resolver::KeyResolver;
pub use task::{KeyCode, KeyTarget, KeyTask};
