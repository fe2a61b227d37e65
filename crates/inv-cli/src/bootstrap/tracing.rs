//! Tracing configuration for the inventory CLI
//!
//! Command results go to stdout, so every log layer writes elsewhere: the
//! terminal layer uses stderr and the optional file layer a daily rolling file.
//! `RUST_LOG` overrides the built-in filter.

use std::{fs, io, path::Path, sync::OnceLock};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry};

use super::wiring::LoggingSettings;

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const LOG_FILE_PREFIX: &str = "inventory.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives.
///
/// Release builds only show warnings unless `verbose` is set, so normal command
/// output is not interleaved with log lines.
fn build_filter_directives(is_dev: bool, verbose: bool) -> Vec<String> {
    let crate_level = match (is_dev, verbose) {
        (true, _) => "debug",
        (false, true) => "info",
        (false, false) => "warn",
    };

    let mut directives = vec!["warn".to_string()];
    for krate in ["inv_core", "inv_app", "inv_infra", "inv_cli", "inventory"] {
        directives.push(format!("{krate}={crate_level}"));
    }
    directives
}

/// Initialize the global tracing subscriber. Call once, before any command runs.
///
/// A log directory that cannot be prepared disables the file layer with a
/// message on stderr; it does not stop the command.
///
/// # Errors
///
/// Returns `Err` if a subscriber is already registered.
pub fn init_tracing_subscriber(settings: &LoggingSettings, verbose: bool) -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development(), verbose);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    let stderr_writer = BoxMakeWriter::new(io::stderr);
    let file_writer = settings.file_dir.as_deref().and_then(|dir| {
        build_file_writer(dir)
            .map_err(|err| eprintln!("Failed to initialize file logging: {err}"))
            .ok()
    });

    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
        .with_level(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(stderr_writer);

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

fn build_file_writer(dir: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(dir)?;

    let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}
