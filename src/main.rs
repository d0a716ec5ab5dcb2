//! Auto Key Presser CLI entry point

use std::process::ExitCode;

use clap::Parser;

use auto_key_presser::cli::{
    app::{
        init_logging, load_merged_config, load_merged_config_or_defaults, run_presser, EXIT_ERROR,
        EXIT_USAGE_ERROR,
    },
    args::{Cli, Commands, RunOptions},
    config_cmd::handle_config_command,
    keys_cmd::handle_keys_command,
    presenter::Presenter,
};
use auto_key_presser::domain::config::{AppConfig, DEFAULT_LOG_LEVEL};
use auto_key_presser::infrastructure::{InjectorTool, XdgConfigStore};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();
    let store = XdgConfigStore::from_override(cli.config.clone());

    // Config commands read the file themselves, so a broken file can still be located and replaced
    let command = match cli.command {
        Some(Commands::Config { action }) => {
            if let Err(e) = init_logging(cli.log_level.as_deref(), DEFAULT_LOG_LEVEL) {
                presenter.warn(&e);
            }
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        command => command,
    };

    // Keys given on the command line replace the stored table for this run
    let cli_config = AppConfig {
        injector: cli.injector.clone(),
        log_level: cli.log_level.clone(),
        keys: if cli.keys.is_empty() {
            None
        } else {
            Some(cli.keys.clone())
        },
    };

    // A run with its own key table does not need the file
    let (config, load_error) = if command.is_none() && !cli.keys.is_empty() {
        load_merged_config_or_defaults(&store, cli_config).await
    } else {
        match load_merged_config(&store, cli_config).await {
            Ok(config) => (config, None),
            Err(e) => {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
        }
    };

    if let Err(e) = init_logging(cli.log_level.as_deref(), config.log_level_or_default()) {
        presenter.warn(&e);
    }
    if let Some(e) = load_error {
        presenter.warn(&format!("{}; using defaults", e));
    }

    if let Some(Commands::Keys { action }) = command {
        if let Err(e) = handle_keys_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    let injector = if cli.dry_run {
        InjectorTool::DryRun
    } else {
        match config.injector_or_default().parse::<InjectorTool>() {
            Ok(tool) => tool,
            Err(e) => {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_USAGE_ERROR);
            }
        }
    };

    let options = RunOptions {
        entries: config.keys_or_default(),
        run_for: cli.run_for,
        injector,
    };

    run_presser(options).await
}
