//! Key descriptor resolution
//!
//! Maps a user-supplied key descriptor (`"A"`, `"F5"`, `"space"`) to the
//! target the runner injects. Rules, first match wins:
//!
//! 1. A trimmed descriptor of exactly one character is injected as that
//!    Unicode character, case preserved. This covers letters and digits too.
//! 2. A single uppercase letter or digit maps to the platform key code.
//! 3. A named key (`SPACE`, `ENTER`, `ESC`/`ESCAPE`, `TAB`, arrows, `F1`..`F12`),
//!    matched case-insensitively, maps to the platform key code.
//! 4. Anything else is unsupported.

use crate::domain::error::UnsupportedKeyError;

use super::platform::Platform;
use super::task::KeyTarget;

/// Resolves key descriptors against one platform's key-code tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyResolver {
    platform: Platform,
}

impl KeyResolver {
    pub const fn new(platform: Platform) -> Self {
        Self { platform }
    }

    pub const fn for_current_platform() -> Self {
        Self::new(Platform::current())
    }

    pub const fn platform(&self) -> Platform {
        self.platform
    }

    /// Resolve a key descriptor into a key target.
    pub fn resolve(&self, input: &str) -> Result<KeyTarget, UnsupportedKeyError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(UnsupportedKeyError::Empty);
        }

        let mut chars = trimmed.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            return Ok(KeyTarget::Unicode(ch));
        }

        let key = trimmed.to_uppercase();

        // Kept even though rule 1 already claims every one-character input;
        // uppercasing can change the character count.
        let mut upper = key.chars();
        if let (Some(ch), None) = (upper.next(), upper.next()) {
            if let Some(code) = self
                .platform
                .letter_code(ch)
                .or_else(|| self.platform.digit_code(ch))
            {
                return Ok(KeyTarget::Code(code));
            }
        }

        self.platform
            .named_code(&key)
            .map(KeyTarget::Code)
            .ok_or_else(|| UnsupportedKeyError::Unsupported {
                input: input.to_string(),
            })
    }
}
