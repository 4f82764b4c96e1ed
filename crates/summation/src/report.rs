//! Rendering of the side-by-side comparison printed by the `summation` binary.

use std::io::{self, Write};

use serde_json::json;

use crate::{Strategy, SummationResult, WholeNumber};

/// Inputs compared when none are given on the command line.
pub const DEFAULT_INPUTS: [WholeNumber; 4] = [
    WholeNumber::new(1),
    WholeNumber::new(5),
    WholeNumber::new(10),
    WholeNumber::new(100),
];

/// Output layout for [`write_report`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Aligned, human readable table.
    #[default]
    Text,
    /// One JSON object per line.
    JsonLines,
}

/// Run each strategy on each input and write the comparison to `out`.
///
/// A strategy that refuses an input is reported on its own line instead of
/// aborting the whole report.
///
/// # Errors
///
/// Propagates write failures from `out`.
///
/// # Examples
/// ```
/// use summation::{ReportFormat, Strategy, WholeNumber, write_report};
///
/// let mut out = Vec::new();
/// write_report(
///     &mut out,
///     &[WholeNumber::new(10)],
///     &[Strategy::GaussClosedForm],
///     ReportFormat::Text,
/// )
/// .expect("write to vec");
/// let text = String::from_utf8(out).expect("utf-8");
/// assert!(text.contains("output =     55"));
/// ```
pub fn write_report(
    mut out: impl Write,
    inputs: &[WholeNumber],
    strategies: &[Strategy],
    format: ReportFormat,
) -> io::Result<()> {
    if format == ReportFormat::Text {
        writeln!(out, "=== Integer Summation: Three Approaches ===")?;
        writeln!(out)?;
    }
    for &input in inputs {
        if format == ReportFormat::Text {
            writeln!(out, "Input n = {input}")?;
        }
        for &strategy in strategies {
            match (strategy.run(input), format) {
                (Ok(result), ReportFormat::Text) => write_text_line(&mut out, &result)?,
                (Ok(result), ReportFormat::JsonLines) => {
                    serde_json::to_writer(&mut out, &result).map_err(io::Error::other)?;
                    writeln!(out)?;
                }
                (Err(err), ReportFormat::Text) => {
                    writeln!(out, "  [{:<20}]  skipped: {err}", strategy.method())?;
                }
                (Err(err), ReportFormat::JsonLines) => {
                    let row = json!({
                        "method": strategy.method(),
                        "input": input,
                        "error": err.to_string(),
                    });
                    serde_json::to_writer(&mut out, &row).map_err(io::Error::other)?;
                    writeln!(out)?;
                }
            }
        }
        if format == ReportFormat::Text {
            writeln!(out)?;
        }
    }
    Ok(())
}

fn write_text_line(out: &mut impl Write, result: &SummationResult) -> io::Result<()> {
    writeln!(
        out,
        "  [{:<20}]  output = {:>6}  time = {:<5}  space = {}",
        result.method, result.output, result.time_complexity, result.space_complexity
    )
}
