//! Dry-run key injector

use async_trait::async_trait;
use tracing::info;

use crate::application::ports::{InjectError, KeyInjector};
use crate::domain::keys::KeyCode;

/// Injector that logs each key event instead of sending it
///
/// Selected by `--dry-run` or `injector = "dry-run"`.
pub struct DryRunInjector;

impl DryRunInjector {
    /// Create a new dry-run injector
    pub fn new() -> Self {
        Self
    }
}

impl Default for DryRunInjector {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyInjector for DryRunInjector {
    async fn press_key_code(&self, code: KeyCode) -> Result<(), InjectError> {
        info!(code = %code, "dry run: press");
        Ok(())
    }

    async fn inject_unicode(&self, ch: char) -> Result<(), InjectError> {
        info!(ch = ?ch, "dry run: unicode");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::keys::KeyTarget;

    #[tokio::test]
    async fn dry_run_always_succeeds() {
        let injector = DryRunInjector::new();
        assert!(injector.inject(KeyTarget::Unicode('x')).await.is_ok());
        assert!(injector.inject(KeyTarget::Code(KeyCode(0x20))).await.is_ok());
    }
}
