//! CLI presenter for output formatting

use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::domain::keys::KeyEntry;
use crate::domain::RunnerState;

/// Presenter for CLI output formatting
pub struct Presenter {
    spinner: Option<ProgressBar>,
}

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self { spinner: None }
    }

    /// Start a spinner with message
    pub fn start_spinner(&mut self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        spinner.set_style(style);
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    /// Stop spinner without status
    pub fn stop_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print runner status
    pub fn status(&self, state: RunnerState) {
        eprintln!("{} Status: {}", "●".cyan(), state);
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }

    /// Print the key table, one numbered row per entry
    pub fn key_table(&self, entries: &[KeyEntry]) {
        if entries.is_empty() {
            println!("(no keys)");
            return;
        }
        for (row, entry) in entries.iter().enumerate() {
            println!("{}", format_row(row, entry));
        }
    }

    /// Spinner message for a run of `count` keys
    pub fn format_running(&self, count: usize) -> String {
        let noun = if count == 1 { "key" } else { "keys" };
        format!("Pressing {} {}... (Ctrl+C to stop)", count, noun)
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

fn format_row(row: usize, entry: &KeyEntry) -> String {
    let line = format!("{:>3}  {}", row, entry);
    if entry.enabled {
        line
    } else {
        line.dimmed().to_string()
    }
}
