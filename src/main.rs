//! mode_rotation CLI
//!
//! Entry point for the mode_rotation command-line application.

use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mode_rotation::cli::output::display_error;
use mode_rotation::cli::Cli;

fn init_tracing(verbose: u8, ansi: bool) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("mode_rotation={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .compact()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    // Flags alone until the settings file is read, so early errors honor --json
    cli.output_config(None).apply_global();

    let settings = cli.load_settings()?;
    cli.output_config(Some(&settings)).apply_global();

    cli.run(&settings)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, !cli.no_color && std::io::stderr().is_terminal());

    // Run the command and handle errors
    match run(cli) {
        Ok(()) => Ok(()),
        Err(e) => {
            display_error(&e);
            std::process::exit(1);
        }
    }
}
