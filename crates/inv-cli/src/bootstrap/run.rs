use clap::Parser;
use std::process::ExitCode;
use tracing::debug;

use crate::cli::Cli;
use crate::commands::{self, Output};

use super::config::load_config_or_default;
use super::runtime::AppRuntime;
use super::tracing::init_tracing_subscriber;
use super::wiring::{resolve_settings, wire_dependencies, Overrides};

/// Parse the process arguments and run the selected command.
pub async fn run() -> ExitCode {
    run_cli(Cli::parse()).await
}

pub async fn run_cli(cli: Cli) -> ExitCode {
    let output = Output::new(cli.json);

    let runtime = match build_runtime(&cli) {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    match commands::dispatch(&runtime, &output, cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(kind = err.kind.as_str(), message = %err.message, "command failed");
            output.error(&err);
            ExitCode::from(err.exit_code())
        }
    }
}

fn build_runtime(cli: &Cli) -> anyhow::Result<AppRuntime> {
    let config = load_config_or_default(cli.config.clone())?;
    let settings = resolve_settings(
        config,
        Overrides {
            data_file: cli.data_file.clone(),
        },
    )?;

    init_tracing_subscriber(&settings.logging, cli.verbose)?;
    debug!(data_file = %settings.data_file.display(), "runtime configured");

    let deps = wire_dependencies(&settings);
    Ok(AppRuntime::new(deps, settings))
}
