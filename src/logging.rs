//! `tracing` subscriber setup.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Environment variable that overrides `logging.filter`.
pub const LOG_ENV: &str = "COUNTER_LOG";

/// Where logs go when no log file is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    Stderr,
    /// Used while the TUI owns the terminal.
    Disabled,
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log filter '{filter}': {message}")]
    InvalidFilter { filter: String, message: String },

    #[error("Failed to open log file '{path}': {source}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to install log subscriber: {0}")]
    Install(String),
}

pub fn init_tracing(config: &LoggingConfig, fallback: Fallback) -> Result<(), LoggingError> {
    let filter = build_filter(&config.filter)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339());

    let installed = match (&config.file, fallback) {
        (Some(path), _) => {
            let file = open_log_file(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        (None, Fallback::Stderr) => builder.with_writer(io::stderr).try_init(),
        (None, Fallback::Disabled) => return Ok(()),
    };

    installed.map_err(|e| LoggingError::Install(e.to_string()))
}

/// `COUNTER_LOG` wins over the configured directive.
fn build_filter(configured: &str) -> Result<EnvFilter, LoggingError> {
    match std::env::var(LOG_ENV) {
        Ok(directive) => parse_filter(&directive),
        Err(std::env::VarError::NotPresent) => parse_filter(configured),
        Err(std::env::VarError::NotUnicode(raw)) => Err(LoggingError::InvalidFilter {
            filter: raw.to_string_lossy().into_owned(),
            message: format!("{} is not valid unicode", LOG_ENV),
        }),
    }
}

fn parse_filter(directive: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(directive).map_err(|e| LoggingError::InvalidFilter {
        filter: directive.to_string(),
        message: e.to_string(),
    })
}

fn open_log_file(path: &Path) -> Result<fs::File, LoggingError> {
    let open_err = |source| LoggingError::OpenFile {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(open_err)?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(open_err)
}
