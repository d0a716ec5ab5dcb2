//! Turning the key table into runnable tasks

use std::time::Duration;

use thiserror::Error;

use crate::domain::error::UnsupportedKeyError;
use crate::domain::keys::{runnable_entries, KeyEntry, KeyResolver, KeyTask};

/// Reasons a run cannot start
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StartError {
    #[error("Add at least one enabled key with a positive interval.")]
    NoRunnableEntries,

    #[error("No valid keys to press:\n{}", join_errors(.0))]
    NoValidTasks(Vec<UnsupportedKeyError>),
}

/// Tasks ready for the runner plus the entries that were skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartPlan {
    pub tasks: Vec<KeyTask>,
    pub skipped: Vec<UnsupportedKeyError>,
}

impl StartPlan {
    pub fn has_skipped(&self) -> bool {
        !self.skipped.is_empty()
    }

    /// One line per skipped entry
    pub fn skipped_report(&self) -> String {
        join_errors(&self.skipped)
    }
}

/// Resolve every runnable entry, continuing past unsupported keys.
///
/// Disabled entries, entries with a non-positive interval, and entries with
/// a blank key are left out before resolution. Fails when nothing is left
/// to run.
pub fn plan_tasks(entries: &[KeyEntry], resolver: &KeyResolver) -> Result<StartPlan, StartError> {
    let runnable = runnable_entries(entries);
    if runnable.is_empty() {
        return Err(StartError::NoRunnableEntries);
    }

    let mut tasks = Vec::with_capacity(runnable.len());
    let mut skipped = Vec::new();
    for entry in runnable {
        match resolver.resolve(&entry.key) {
            // is_runnable guarantees interval_ms > 0
            Ok(target) => tasks.push(KeyTask::new(
                target,
                Duration::from_millis(entry.interval_ms as u64),
            )),
            Err(e) => skipped.push(e),
        }
    }

    if tasks.is_empty() {
        return Err(StartError::NoValidTasks(skipped));
    }

    Ok(StartPlan { tasks, skipped })
}

fn join_errors(errors: &[UnsupportedKeyError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
