//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;
use crate::infrastructure::injector::VALID_INJECTOR_TOOLS;
use crate::infrastructure::InjectorTool;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS, VALID_LOG_LEVELS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;
    let value = normalize_config_value(key, value)?;

    let mut config = store.load().await?;
    match key {
        "injector" => config.injector = Some(value.clone()),
        "log_level" => config.log_level = Some(value.clone()),
        _ => unreachable!(), // Already validated
    }

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;
    let config = store.load().await?;
    presenter.output(config_value(&config, key).unwrap_or(NOT_SET));
    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        presenter.key_value(key, config_value(&config, key).unwrap_or(NOT_SET));
    }
    let keys = match &config.keys {
        Some(keys) => format!("{} (see `keys list`)", keys.len()),
        None => NOT_SET.to_string(),
    };
    presenter.key_value("keys", &keys);

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn check_key(key: &str) -> Result<(), ConfigError> {
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }
    Ok(())
}

fn config_value<'a>(config: &'a AppConfig, key: &str) -> Option<&'a str> {
    match key {
        "injector" => config.injector.as_deref(),
        "log_level" => config.log_level.as_deref(),
        _ => None,
    }
}

/// Validate a config value and return the form that gets stored
fn normalize_config_value(key: &str, value: &str) -> Result<String, ConfigError> {
    match key {
        "injector" => value
            .parse::<InjectorTool>()
            .map(|tool| tool.to_string())
            .map_err(|_| ConfigError::ValidationError {
                key: key.to_string(),
                message: format!(
                    "Invalid value '{}'. Valid options: {}",
                    value,
                    VALID_INJECTOR_TOOLS.join(", ")
                ),
            }),
        "log_level" => {
            let lower = value.trim().to_lowercase();
            if VALID_LOG_LEVELS.contains(&lower.as_str()) {
                Ok(lower)
            } else {
                Err(ConfigError::ValidationError {
                    key: key.to_string(),
                    message: format!(
                        "Invalid value '{}'. Valid options: {}",
                        value,
                        VALID_LOG_LEVELS.join(", ")
                    ),
                })
            }
        }
        _ => Ok(value.to_string()),
    }
}
