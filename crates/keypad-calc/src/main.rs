//! keypad-calc: pocket calculator for the terminal
//!
//! ## Usage
//!
//! ```bash
//! keypad-calc tui                    # Interactive calculator
//! keypad-calc run "4+2==="           # Prints 10
//! keypad-calc run "5+3=" --trace     # Display after every key
//! keypad-calc run "6/0=" --json      # Snapshot as JSON
//! keypad-calc -c calc.yaml config    # Effective configuration
//! ```

use std::process::ExitCode;

use clap::Parser;
use keypad_calc::cli::{replay, Cli, Commands};
use keypad_calc::config::CalcConfig;
use keypad_calc::error::CliResult;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;
    init_logging(cli.verbose, &config);

    match cli.command {
        Commands::Tui => run_tui(&config),
        Commands::Run(args) => {
            for line in replay(&config, &args)? {
                println!("{line}");
            }
            Ok(())
        }
        Commands::Config => {
            print!("{}", serde_yaml_ng::to_string(&config)?);
            Ok(())
        }
    }
}

/// Installs the stderr log subscriber; `-v` flags override the configured filter
fn init_logging(verbose: u8, config: &CalcConfig) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&config.log_filter))
            .unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(feature = "tui")]
fn run_tui(config: &CalcConfig) -> CliResult<()> {
    keypad_calc::tui::run(config)?;
    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_tui(_config: &CalcConfig) -> CliResult<()> {
    Err(keypad_calc::error::CliError::config(
        "built without the `tui` feature; rebuild with --features tui",
    ))
}
