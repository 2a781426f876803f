//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError, OverflowPolicy};

#[derive(Debug, Parser)]
#[command(name = "counter", version, about = "A terminal counter with + and - buttons")]
pub struct Cli {
    /// Config file (default: the platform config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override what happens at the i64 bounds
    #[arg(long, value_enum)]
    pub overflow: Option<OverflowPolicy>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Press buttons without a UI (e.g. "++-") and print the displayed value
    #[arg(long, value_name = "SEQUENCE", allow_hyphen_values = true)]
    pub press: Option<String>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    /// Load the config file and apply command-line overrides on top.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_existing(path)?,
            None => Config::load()?,
        };
        if let Some(overflow) = self.overflow {
            config.counter.overflow = overflow;
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_accepts_leading_hyphen() {
        let cli = Cli::try_parse_from(["counter", "--press", "-+-"]).unwrap();
        assert_eq!(cli.press.as_deref(), Some("-+-"));
    }

    #[test]
    fn overflow_flag_parses_policy() {
        let cli = Cli::try_parse_from(["counter", "--overflow", "reject"]).unwrap();
        assert_eq!(cli.overflow, Some(OverflowPolicy::Reject));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
