//! Main app runner: config loading, logging, and the key-pressing run

use std::io;
use std::process::ExitCode;

use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::application::ports::ConfigStore;
use crate::application::{plan_tasks, Runner, StartError};
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;
use crate::domain::keys::KeyResolver;
use crate::infrastructure::create_injector;

use super::args::RunOptions;
use super::presenter::Presenter;
use super::signals::ShutdownSignal;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Why a run could not be carried out
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Start(#[from] StartError),

    #[error("Failed to setup signal handler: {0}")]
    Signals(#[from] io::Error),

    #[error("Ctrl+C handling is unavailable; pass --for to bound the run")]
    NoShutdownSignal,
}

/// Press the configured keys until a shutdown signal or the time limit.
pub async fn run_presser(options: RunOptions) -> ExitCode {
    let mut presenter = Presenter::new();
    match press_keys(options, &mut presenter).await {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Plan, start, wait, and stop one run.
pub async fn press_keys(options: RunOptions, presenter: &mut Presenter) -> Result<(), RunError> {
    // Listen before starting so an early Ctrl+C still stops the run cleanly
    let shutdown = ShutdownSignal::listen()?;
    press_keys_until(options, presenter, shutdown).await
}

async fn press_keys_until(
    options: RunOptions,
    presenter: &mut Presenter,
    mut shutdown: ShutdownSignal,
) -> Result<(), RunError> {
    let resolver = KeyResolver::for_current_platform();
    let plan = plan_tasks(&options.entries, &resolver)?;

    if plan.has_skipped() {
        presenter.warn(&format!("Some keys were skipped:\n{}", plan.skipped_report()));
    }

    info!(
        injector = %options.injector,
        platform = %resolver.platform(),
        "starting run"
    );
    let runner = Runner::new(create_injector(options.injector));
    let count = plan.tasks.len();
    runner.start(plan.tasks);

    presenter.status(runner.state());
    let message = presenter.format_running(count);
    presenter.start_spinner(&message);

    let outcome = match options.run_for {
        // With no listener left the time limit still ends the run
        Some(limit) => {
            tokio::select! {
                Some(reason) = shutdown.recv() => debug!(%reason, "shutdown requested"),
                _ = tokio::time::sleep(limit.as_std()) => debug!(%limit, "time limit reached"),
            }
            Ok(())
        }
        None => match shutdown.recv().await {
            Some(reason) => {
                debug!(%reason, "shutdown requested");
                Ok(())
            }
            None => Err(RunError::NoShutdownSignal),
        },
    };

    presenter.stop_spinner();
    runner.stop().await;
    presenter.status(runner.state());

    outcome
}

/// Load the config file and merge it with CLI values.
///
/// Precedence: defaults < file < cli.
pub async fn load_merged_config<S: ConfigStore>(
    store: &S,
    cli_config: AppConfig,
) -> Result<AppConfig, ConfigError> {
    let file_config = store.load().await?;

    Ok(AppConfig::defaults().merge(file_config).merge(cli_config))
}

/// Like [`load_merged_config`], but an unreadable config file falls back to
/// the defaults. The load error is handed back so the caller can report it.
pub async fn load_merged_config_or_defaults<S: ConfigStore>(
    store: &S,
    cli_config: AppConfig,
) -> (AppConfig, Option<ConfigError>) {
    match store.load().await {
        Ok(file_config) => (
            AppConfig::defaults().merge(file_config).merge(cli_config),
            None,
        ),
        Err(e) => (AppConfig::defaults().merge(cli_config), Some(e)),
    }
}

/// Install the global tracing subscriber on stderr.
///
/// `cli_level` wins over `RUST_LOG`, which wins over the configured level.
/// Returns an error message if the chosen filter could not be parsed; the
/// configured default is used in that case.
pub fn init_logging(cli_level: Option<&str>, config_level: &str) -> Result<(), String> {
    let env_level = std::env::var(EnvFilter::DEFAULT_ENV)
        .ok()
        .filter(|s| !s.is_empty());
    let wanted = cli_level
        .map(str::to_string)
        .or(env_level)
        .unwrap_or_else(|| config_level.to_string());

    let (filter, result) = match EnvFilter::try_new(&wanted) {
        Ok(filter) => (filter, Ok(())),
        Err(e) => (
            EnvFilter::new(config_level),
            Err(format!("Invalid log level '{}': {}", wanted, e)),
        ),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    result
}
