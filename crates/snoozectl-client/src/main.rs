//! snoozectl CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use snoozectl_client::cli::{Cli, Command, ConfigAction};
use snoozectl_client::commands;
use snoozectl_client::config::ClientConfig;
use snoozectl_client::error::{ClientError, ClientResult};
use snoozectl_core::{TracingConfig, init_tracing};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let debug = cli.debug || config.debug;
    let tracing_config = match cli.command {
        _ if debug => TracingConfig::cli_debug(),
        Some(Command::Watch { .. }) if cli.json => TracingConfig::daemon(),
        Some(Command::Watch { .. }) => TracingConfig::default().with_level(tracing::Level::INFO),
        _ => TracingConfig::default(),
    };
    if let Err(e) = init_tracing(tracing_config) {
        eprintln!("warning: {}", e);
    }

    match run(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> ClientResult<ClientConfig> {
    match cli.config {
        Some(ref path) => ClientConfig::load_from(path).map_err(ClientError::Config),
        None => ClientConfig::load().map_err(ClientError::Config),
    }
}

/// The config file in effect: `--config` if given, else the default location.
fn config_path(cli: &Cli) -> PathBuf {
    cli.config.clone().unwrap_or_else(ClientConfig::default_path)
}

async fn run(cli: Cli, config: ClientConfig) -> ClientResult<()> {
    let config_path = config_path(&cli);
    match cli.command {
        Some(Command::Show { override_value }) => {
            commands::show::run(&config, override_value.as_deref(), cli.json)
        }
        Some(Command::Check { value }) => commands::check::run(&config, &value, cli.json),
        Some(Command::Watch { file, interval }) => {
            commands::watch::run(&config, &file, interval, cli.json).await
        }
        Some(Command::Config { action }) => match action {
            ConfigAction::Dump => commands::config::dump(&config, &config_path),
            ConfigAction::Validate => commands::config::validate(&config),
            ConfigAction::Path => commands::config::path(&config_path),
        },
        None => commands::show::run(&config, None, cli.json),
    }
}
