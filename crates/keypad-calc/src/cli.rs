//! CLI command definitions using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use crate::config::CalcConfig;
use crate::core::{Calculator, Snapshot};
use crate::error::CliResult;
use crate::keypad::parse_sequence;

/// keypad-calc: a pocket calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "keypad-calc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// YAML configuration file
    #[arg(short, long, global = true, env = "KEYPAD_CALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive terminal calculator
    Tui,

    /// Replay a key sequence such as "5+3=" and print the display
    Run(RunArgs),

    /// Print the effective configuration as YAML
    Config,
}

/// Arguments for the run command
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Keys to press: digits, '.', + - * /, '=', 'C'
    pub keys: String,

    /// Print the display after every key instead of only at the end
    #[arg(short, long)]
    pub trace: bool,

    /// Print snapshots as JSON
    #[arg(long)]
    pub json: bool,
}

/// One traced key press
#[derive(Debug, Serialize)]
struct TraceStep<'a> {
    key: String,
    #[serde(flatten)]
    snapshot: &'a Snapshot,
}

impl Cli {
    /// Loads the configuration named by `--config`, or the defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_config(&self) -> CliResult<CalcConfig> {
        match &self.config {
            Some(path) => CalcConfig::load(path),
            None => Ok(CalcConfig::default()),
        }
    }
}

/// Replays a key sequence and returns the lines to print
///
/// # Errors
///
/// Returns an error for a key without a button (nothing is pressed) or if
/// JSON output fails.
pub fn replay(config: &CalcConfig, args: &RunArgs) -> CliResult<Vec<String>> {
    let actions = parse_sequence(&args.keys)?;
    let mut calc = Calculator::from_config(config);
    let mut lines = Vec::new();

    for action in actions {
        let snapshot = calc.press(action);
        if args.trace {
            lines.push(if args.json {
                serde_json::to_string(&TraceStep {
                    key: action.label(),
                    snapshot: &snapshot,
                })?
            } else {
                format!("{:>2}  {}", action.label(), snapshot.display)
            });
        }
    }

    if !args.trace {
        let snapshot = calc.snapshot();
        lines.push(if args.json {
            serde_json::to_string(&snapshot)?
        } else {
            snapshot.display
        });
    }

    Ok(lines)
}
