//! Command-line comparison of the summation strategies.
//!
//! Delegates to `summation::write_report` so the output format stays testable
//! without spawning a process.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use summation::{DEFAULT_INPUTS, ReportFormat, Strategy, WholeNumber, write_report};

/// Compare loop, recursive and closed-form summation of 1..=n.
#[derive(Debug, Parser)]
#[command(name = "summation", version)]
struct Cli {
    /// Values of n to sum up to. Defaults to 1, 5, 10 and 100.
    #[arg(value_name = "N", allow_negative_numbers = true)]
    inputs: Vec<WholeNumber>,

    /// Restrict the comparison to one strategy.
    #[arg(long, value_name = "METHOD")]
    method: Option<Strategy>,

    /// Emit one JSON object per result instead of a table.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let inputs = if cli.inputs.is_empty() {
        DEFAULT_INPUTS.to_vec()
    } else {
        cli.inputs
    };
    let strategies = cli.method.map_or_else(|| Strategy::ALL.to_vec(), |m| vec![m]);
    let format = if cli.json {
        ReportFormat::JsonLines
    } else {
        ReportFormat::Text
    };

    match write_report(io::stdout().lock(), &inputs, &strategies, format) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}
