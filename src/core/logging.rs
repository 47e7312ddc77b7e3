//! Structured logging system
//!
//! JSON or text output, to stdout or a rolling file, with `RUST_LOG`
//! taking precedence over the configured level.

use crate::core::config::LoggingConfig;
use anyhow::{Context, Result};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Keeps the non-blocking writer alive; drop it last.
pub struct Logger {
    _guard: WorkerGuard,
}

impl Logger {
    /// Initialize the global tracing subscriber from configuration
    pub fn init(config: &LoggingConfig) -> Result<Self> {
        let level = parse_log_level(&config.level)?;

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level.as_str()));

        let (writer, guard) = match config.output.as_str() {
            "stdout" => tracing_appender::non_blocking(std::io::stdout()),
            "file" => {
                let log_file = config
                    .log_file
                    .as_ref()
                    .context("log_file must be specified when output is 'file'")?;

                let directory = log_file
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .unwrap_or_else(|| std::path::Path::new("."));
                std::fs::create_dir_all(directory).context("Failed to create log directory")?;

                let filename = log_file
                    .file_name()
                    .context("Log file must have a filename")?;

                let appender = RollingFileAppender::new(
                    parse_rotation(&config.rotation)?,
                    directory,
                    filename,
                );
                tracing_appender::non_blocking(appender)
            }
            other => anyhow::bail!("Invalid output configuration: {}", other),
        };

        let fmt_layer = match config.format.as_str() {
            "json" => fmt::layer()
                .json()
                .with_writer(writer)
                .with_current_span(true)
                .with_target(true)
                .boxed(),
            "text" => fmt::layer()
                .with_writer(writer)
                .with_target(true)
                .with_ansi(config.output == "stdout")
                .boxed(),
            other => anyhow::bail!("Invalid format configuration: {}", other),
        };

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .context("Failed to initialize tracing subscriber")?;

        tracing::info!(
            level = %config.level,
            format = %config.format,
            output = %config.output,
            "Logging system initialized"
        );

        Ok(Logger { _guard: guard })
    }
}

fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => anyhow::bail!("Invalid log level: {}", level),
    }
}

fn parse_rotation(rotation: &str) -> Result<Rotation> {
    match rotation {
        "daily" => Ok(Rotation::DAILY),
        "hourly" => Ok(Rotation::HOURLY),
        "never" => Ok(Rotation::NEVER),
        _ => anyhow::bail!("Invalid log rotation: {}", rotation),
    }
}
