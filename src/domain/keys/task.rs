//! Resolved key targets and the immutable tasks the runner executes

use std::fmt;
use std::time::Duration;

/// Platform key code (Windows virtual-key, macOS CG key code, or X11 keysym)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyCode(pub u32);

impl KeyCode {
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04X}", self.0)
    }
}

/// What a task sends on every tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyTarget {
    /// Press and release a physical key by platform code
    Code(KeyCode),
    /// Inject a Unicode character directly
    Unicode(char),
}

impl KeyTarget {
    pub fn is_unicode(&self) -> bool {
        matches!(self, Self::Unicode(_))
    }
}

impl fmt::Display for KeyTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code(code) => write!(f, "code {}", code),
            Self::Unicode(ch) => write!(f, "unicode U+{:04X} ({:?})", *ch as u32, ch),
        }
    }
}

/// Immutable execution unit: one target pressed every `interval`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyTask {
    pub target: KeyTarget,
    pub interval: Duration,
}

impl KeyTask {
    pub const fn new(target: KeyTarget, interval: Duration) -> Self {
        Self { target, interval }
    }

    pub fn from_millis(target: KeyTarget, interval_ms: u64) -> Self {
        Self::new(target, Duration::from_millis(interval_ms))
    }
}
