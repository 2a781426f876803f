use std::io::{self, IsTerminal};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;

use counter_tui::args::Cli;
use counter_tui::logging::{init_tracing, Fallback};
use counter_tui::script::{parse_presses, run_presses};
use counter_tui::shutdown::ShutdownCoordinator;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.resolve_config()?;

    if cli.print_config {
        print!("{}", config.to_toml().context("Failed to render config")?);
        return Ok(());
    }

    if let Some(sequence) = &cli.press {
        init_tracing(&config.logging, Fallback::Stderr)?;
        let presses = parse_presses(sequence)?;
        println!("{}", run_presses(config.counter.overflow, &presses));
        return Ok(());
    }

    if !io::stdout().is_terminal() {
        bail!("stdout is not a terminal; use --press for headless mode");
    }

    init_tracing(&config.logging, Fallback::Disabled)?;
    let shutdown = ShutdownCoordinator::new();
    shutdown
        .register_signals()
        .context("Failed to register signal handlers")?;
    counter_tui::ui::run(&config, shutdown.handle()).context("Terminal UI failed")?;
    Ok(())
}
