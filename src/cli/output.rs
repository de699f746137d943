//! Output formatting for the run summary.
//!
//! Supports text and JSON output formats.

use crate::convert::{ConversionReport, Outcome, SkipReason, format_histogram};
use crate::error::Error;
use serde::Serialize;
use std::fmt::Write;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Formats a conversion report.
#[must_use]
pub fn format_report(report: &ConversionReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_report_text(report),
        OutputFormat::Json => format_json(report),
    }
}

fn format_report_text(report: &ConversionReport) -> String {
    let mut output = String::new();
    let verb = if report.dry_run {
        "Would convert"
    } else {
        "Converted"
    };
    let _ = writeln!(
        output,
        "{verb} {} of {} files under {}",
        report.converted_count(),
        report.files_found,
        report.root.display()
    );
    let _ = writeln!(output, "  Skipped:     {}", report.skipped_count());
    let _ = writeln!(output, "  Ignored:     {}", report.ignored);
    let _ = writeln!(output, "  Extensions:  {}", format_histogram(&report.extensions));

    if report.files.is_empty() {
        return output;
    }

    output.push('\n');
    let _ = writeln!(output, "{:<10} {:<16} Path", "Status", "Detail");
    output.push_str(&"-".repeat(60));
    output.push('\n');

    for file in &report.files {
        let (status, detail) = match &file.outcome {
            Outcome::Converted { from } => ("converted", format!("from {from}")),
            Outcome::Skipped { reason } => ("skipped", skip_reason_text(*reason).to_string()),
        };
        let _ = writeln!(
            output,
            "{:<10} {:<16} {}",
            status,
            detail,
            file.path.display()
        );
    }

    output
}

const fn skip_reason_text(reason: SkipReason) -> &'static str {
    match reason {
        SkipReason::NoCharsetDeclaration => "no charset",
    }
}

/// Formats an error for the given output format.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorOutput {
                success: bool,
                error: String,
            }
            format_json(&ErrorOutput {
                success: false,
                error: error.to_string(),
            })
        }
    }
}

/// Formats a value as JSON.
fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}
