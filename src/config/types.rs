use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub counter: CounterConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// What a transition does when it would leave the `i64` range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Clamp at `i64::MIN` / `i64::MAX`.
    #[default]
    Saturate,
    /// Two's-complement wrap-around.
    Wrap,
    /// Drop the transition; the value stays where it is.
    Reject,
}

impl OverflowPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverflowPolicy::Saturate => "saturate",
            OverflowPolicy::Wrap => "wrap",
            OverflowPolicy::Reject => "reject",
        }
    }
}

/// Counter behaviour.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CounterConfig {
    #[serde(default)]
    pub overflow: OverflowPolicy,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// How long the input thread waits for an event before re-checking
    /// the shutdown flag, in milliseconds (default: 50).
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// Capture mouse clicks so buttons can be clicked (default: true).
    #[serde(default = "default_mouse")]
    pub mouse: bool,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive (default: "info").
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Log file. Without it the interactive UI does not log at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_poll_interval_ms() -> u64 {
    50
}

fn default_mouse() -> bool {
    true
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            mouse: default_mouse(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            file: None,
        }
    }
}
