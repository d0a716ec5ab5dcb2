//! Key injector port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::keys::{KeyCode, KeyTarget};

/// Key injection errors
#[derive(Debug, Clone, Error)]
pub enum InjectError {
    #[error("Key injection backend unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to press key code {code}: {message}")]
    PressFailed { code: KeyCode, message: String },

    #[error("Failed to inject {ch:?}: {message}")]
    UnicodeFailed { ch: char, message: String },
}

/// Port for OS-level key injection
#[async_trait]
pub trait KeyInjector: Send + Sync {
    /// Press and release the key with the given platform code.
    async fn press_key_code(&self, code: KeyCode) -> Result<(), InjectError>;

    /// Send a key-down/key-up pair carrying a Unicode character.
    async fn inject_unicode(&self, ch: char) -> Result<(), InjectError>;

    /// Dispatch a resolved target to the matching operation.
    async fn inject(&self, target: KeyTarget) -> Result<(), InjectError> {
        match target {
            KeyTarget::Code(code) => self.press_key_code(code).await,
            KeyTarget::Unicode(ch) => self.inject_unicode(ch).await,
        }
    }
}
