//! Key table command handler

use thiserror::Error;

use crate::application::ports::ConfigStore;
use crate::domain::error::{ConfigError, InvalidKeyEntry, UnsupportedKeyError};
use crate::domain::keys::{parse_interval, KeyEntry, KeyResolver, Platform, NAMED_KEYS};

use super::args::KeysAction;
use super::presenter::Presenter;

/// Errors from the `keys` subcommand
#[derive(Debug, Error)]
pub enum KeysCommandError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Invalid(#[from] InvalidKeyEntry),

    #[error("Select a row first: no row {row} in a table of {len} keys")]
    NoSuchRow { row: usize, len: usize },

    #[error("{} of the given keys cannot be pressed", .0.len())]
    Unresolved(Vec<UnsupportedKeyError>),
}

/// Handle keys subcommand
pub async fn handle_keys_command<S: ConfigStore>(
    action: KeysAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), KeysCommandError> {
    match action {
        KeysAction::List => handle_list(store, presenter).await,
        KeysAction::Add {
            key,
            interval,
            disabled,
        } => handle_add(store, presenter, &key, &interval, disabled).await,
        KeysAction::Remove { row } => {
            let removed = update_table(store, |keys| {
                check_row(keys, row)?;
                Ok(keys.remove(row))
            })
            .await?;
            presenter.success(&format!("Removed {}", removed));
            Ok(())
        }
        KeysAction::Edit { row, key, interval } => {
            let edited = update_table(store, |keys| {
                check_row(keys, row)?;
                let current = &keys[row];
                let mut entry = KeyEntry::new(
                    key.as_deref().unwrap_or(&current.key),
                    interval
                        .as_deref()
                        .map(parse_interval)
                        .unwrap_or(current.interval_ms),
                );
                entry.enabled = current.enabled;
                entry.validate()?;
                keys[row] = entry.clone();
                Ok(entry)
            })
            .await?;
            warn_if_unresolvable(presenter, &edited.key);
            presenter.success(&format!("{:>3}  {}", row, edited));
            Ok(())
        }
        KeysAction::Enable { row } => set_enabled(store, presenter, row, true).await,
        KeysAction::Disable { row } => set_enabled(store, presenter, row, false).await,
        KeysAction::Check { keys, platform } => handle_check(presenter, &keys, platform),
    }
}

async fn handle_list<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
) -> Result<(), KeysCommandError> {
    let config = store.load().await?;
    presenter.key_table(&config.keys_or_default());
    Ok(())
}

async fn handle_add<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    interval: &str,
    disabled: bool,
) -> Result<(), KeysCommandError> {
    let mut entry = KeyEntry::new(key, parse_interval(interval));
    entry.validate()?;
    if disabled {
        entry = entry.disabled();
    }

    let row = update_table(store, |keys| {
        keys.push(entry.clone());
        Ok(keys.len() - 1)
    })
    .await?;

    warn_if_unresolvable(presenter, &entry.key);
    presenter.success(&format!("{:>3}  {}", row, entry));
    Ok(())
}

async fn set_enabled<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    row: usize,
    enabled: bool,
) -> Result<(), KeysCommandError> {
    let entry = update_table(store, |keys| {
        check_row(keys, row)?;
        keys[row].enabled = enabled;
        Ok(keys[row].clone())
    })
    .await?;
    presenter.success(&format!("{:>3}  {}", row, entry));
    Ok(())
}

fn handle_check(
    presenter: &Presenter,
    keys: &[String],
    platform: Option<Platform>,
) -> Result<(), KeysCommandError> {
    let resolver = platform
        .map(KeyResolver::new)
        .unwrap_or_else(KeyResolver::for_current_platform);

    let mut failed = Vec::new();
    for key in keys {
        match resolver.resolve(key) {
            Ok(target) => presenter.output(&format!("{} -> {}", key, target)),
            Err(e) => {
                presenter.error(&format!("{} -> {}", key, e));
                failed.push(e);
            }
        }
    }

    if failed.is_empty() {
        return Ok(());
    }
    presenter.info(&format!(
        "Use a single character or one of: {}",
        NAMED_KEYS.join(", ")
    ));
    Err(KeysCommandError::Unresolved(failed))
}

/// Load the key table, apply `edit`, and save it back.
///
/// Nothing is written when `edit` fails.
async fn update_table<S, T, F>(store: &S, edit: F) -> Result<T, KeysCommandError>
where
    S: ConfigStore,
    F: FnOnce(&mut Vec<KeyEntry>) -> Result<T, KeysCommandError>,
{
    let mut config = store.load().await?;
    let mut keys = config.keys_or_default();
    let result = edit(&mut keys)?;
    config.keys = Some(keys);
    store.save(&config).await?;
    Ok(result)
}

fn check_row(keys: &[KeyEntry], row: usize) -> Result<(), KeysCommandError> {
    if row >= keys.len() {
        return Err(KeysCommandError::NoSuchRow {
            row,
            len: keys.len(),
        });
    }
    Ok(())
}

/// Stored keys are resolved at start time; flag ones that will be skipped.
fn warn_if_unresolvable(presenter: &Presenter, key: &str) {
    if let Err(e) = KeyResolver::for_current_platform().resolve(key) {
        presenter.warn(&format!("{} (it will be skipped when running)", e));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::domain::config::AppConfig;

    struct MemoryStore {
        config: Mutex<AppConfig>,
    }

    impl MemoryStore {
        fn with_keys(keys: Vec<KeyEntry>) -> Self {
            Self {
                config: Mutex::new(AppConfig {
                    keys: Some(keys),
                    ..Default::default()
                }),
            }
        }

        fn keys(&self) -> Option<Vec<KeyEntry>> {
            self.config.lock().unwrap().keys.clone()
        }
    }

    #[async_trait]
    impl ConfigStore for MemoryStore {
        async fn load(&self) -> Result<AppConfig, ConfigError> {
            Ok(self.config.lock().unwrap().clone())
        }

        async fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
            *self.config.lock().unwrap() = config.clone();
            Ok(())
        }

        fn path(&self) -> PathBuf {
            PathBuf::from("memory")
        }

        fn exists(&self) -> bool {
            true
        }

        async fn init(&self) -> Result<(), ConfigError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn add_appends_to_default_table() {
        let store = MemoryStore {
            config: Mutex::new(AppConfig::empty()),
        };
        let action = KeysAction::Add {
            key: "F5".to_string(),
            interval: "250".to_string(),
            disabled: false,
        };
        handle_keys_command(action, &store, &Presenter::new())
            .await
            .unwrap();

        assert_eq!(
            store.keys(),
            Some(vec![KeyEntry::new("A", 1000), KeyEntry::new("F5", 250)])
        );
    }

    #[tokio::test]
    async fn add_rejects_bad_interval() {
        let store = MemoryStore::with_keys(Vec::new());
        let action = KeysAction::Add {
            key: "A".to_string(),
            interval: "fast".to_string(),
            disabled: false,
        };
        let err = handle_keys_command(action, &store, &Presenter::new())
            .await
            .unwrap_err();

        assert!(matches!(err, KeysCommandError::Invalid(_)));
        assert_eq!(store.keys(), Some(Vec::new()));
    }

    #[tokio::test]
    async fn add_keeps_unsupported_key_with_warning() {
        let store = MemoryStore::with_keys(Vec::new());
        let action = KeysAction::Add {
            key: "HYPER".to_string(),
            interval: "100".to_string(),
            disabled: true,
        };
        handle_keys_command(action, &store, &Presenter::new())
            .await
            .unwrap();

        assert_eq!(store.keys(), Some(vec![KeyEntry::new("HYPER", 100).disabled()]));
    }

    #[tokio::test]
    async fn remove_out_of_range_leaves_table() {
        let store = MemoryStore::with_keys(vec![KeyEntry::new("A", 100)]);
        let err = handle_keys_command(KeysAction::Remove { row: 1 }, &store, &Presenter::new())
            .await
            .unwrap_err();

        assert!(matches!(err, KeysCommandError::NoSuchRow { row: 1, len: 1 }));
        assert_eq!(store.keys(), Some(vec![KeyEntry::new("A", 100)]));
    }

    #[tokio::test]
    async fn remove_last_row_leaves_empty_table() {
        let store = MemoryStore::with_keys(vec![KeyEntry::new("A", 100)]);
        handle_keys_command(KeysAction::Remove { row: 0 }, &store, &Presenter::new())
            .await
            .unwrap();

        assert_eq!(store.keys(), Some(Vec::new()));
    }

    #[tokio::test]
    async fn edit_changes_only_given_fields() {
        let store = MemoryStore::with_keys(vec![KeyEntry::new("A", 100).disabled()]);
        let action = KeysAction::Edit {
            row: 0,
            key: None,
            interval: Some("500".to_string()),
        };
        handle_keys_command(action, &store, &Presenter::new())
            .await
            .unwrap();

        assert_eq!(store.keys(), Some(vec![KeyEntry::new("A", 500).disabled()]));
    }

    #[tokio::test]
    async fn edit_rejects_blank_key() {
        let store = MemoryStore::with_keys(vec![KeyEntry::new("A", 100)]);
        let action = KeysAction::Edit {
            row: 0,
            key: Some("  ".to_string()),
            interval: None,
        };
        let err = handle_keys_command(action, &store, &Presenter::new())
            .await
            .unwrap_err();

        assert!(matches!(err, KeysCommandError::Invalid(_)));
        assert_eq!(store.keys(), Some(vec![KeyEntry::new("A", 100)]));
    }

    #[tokio::test]
    async fn enable_and_disable_toggle_row() {
        let store = MemoryStore::with_keys(vec![KeyEntry::new("A", 100), KeyEntry::new("B", 200)]);
        let presenter = Presenter::new();

        handle_keys_command(KeysAction::Disable { row: 1 }, &store, &presenter)
            .await
            .unwrap();
        assert_eq!(
            store.keys(),
            Some(vec![KeyEntry::new("A", 100), KeyEntry::new("B", 200).disabled()])
        );

        handle_keys_command(KeysAction::Enable { row: 1 }, &store, &presenter)
            .await
            .unwrap();
        assert_eq!(
            store.keys(),
            Some(vec![KeyEntry::new("A", 100), KeyEntry::new("B", 200)])
        );
    }

    #[test]
    fn check_reports_every_unresolved_key() {
        let keys = vec!["F1".to_string(), "HYPER".to_string(), "".to_string()];
        let err = handle_check(&Presenter::new(), &keys, Some(Platform::Windows)).unwrap_err();

        match err {
            KeysCommandError::Unresolved(errors) => assert_eq!(
                errors,
                vec![
                    UnsupportedKeyError::Unsupported {
                        input: "HYPER".to_string()
                    },
                    UnsupportedKeyError::Empty,
                ]
            ),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn check_succeeds_when_all_resolve() {
        let keys = vec!["enter".to_string(), "a".to_string()];
        assert!(handle_check(&Presenter::new(), &keys, Some(Platform::MacOs)).is_ok());
    }
}
