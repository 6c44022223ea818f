//! Structured logging with tracing
//!
//! Configures a `tracing-subscriber` registry with an env filter, optional
//! JSON output and optional daily-rotated file output.

use crate::config::LoggingConfig;
use crate::constants::{DEFAULT_LOG_FILE_STEM, LOG_ENV_VAR};
use shelf_domain::error::{Error, Result};
use std::path::Path;
use tracing::{Level, debug, info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with the provided configuration
///
/// A subscriber that is already installed (for example by a previous test)
/// is left in place.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file_appender = config
        .file_output
        .as_deref()
        .map(rolling_file_appender)
        .transpose()?;

    // Layer types differ between JSON and text output, hence the two branches
    let installed = if config.json_format {
        let stdout = fmt::layer().json().with_target(true).with_thread_ids(true);
        let file = file_appender.map(|appender| {
            fmt::layer()
                .json()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true)
        });
        Registry::default()
            .with(filter)
            .with(stdout)
            .with(file)
            .try_init()
    } else {
        let stdout = fmt::layer().with_target(true).with_thread_ids(true);
        let file = file_appender.map(|appender| {
            fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true)
        });
        Registry::default()
            .with(filter)
            .with(stdout)
            .with(file)
            .try_init()
    };

    match installed {
        Ok(()) => info!("Logging initialized with level: {}", level),
        Err(_) => debug!("Global subscriber already installed; keeping it"),
    }
    Ok(())
}

/// Daily-rotated appender for `path`
///
/// The date is inserted between stem and extension, so `logs/shelf.log`
/// rotates through `logs/shelf.2026-01-31.log`, `logs/shelf.2026-02-01.log`.
pub fn rolling_file_appender(path: &Path) -> Result<RollingFileAppender> {
    let directory = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let prefix = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_LOG_FILE_STEM.to_string());

    let mut builder = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix);
    if let Some(extension) = path.extension() {
        builder = builder.filename_suffix(extension.to_string_lossy().into_owned());
    }

    builder.build(directory).map_err(|e| {
        Error::configuration_with_source(
            format!("Cannot open log file {}", path.display()),
            e,
        )
    })
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {}. Use trace, debug, info, warn, or error",
            level
        ))),
    }
}

/// Log configuration loading status
pub fn log_config_loaded(config_path: &Path, success: bool) {
    if success {
        info!("Configuration loaded from {}", config_path.display());
    } else {
        warn!("Configuration file not found: {}", config_path.display());
    }
}
