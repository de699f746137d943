//! Batch conversion of a directory tree.
//!
//! The driver enumerates files below a root, picks a [`Rule`] for each by
//! extension, and hands matching files to the [`Converter`] one at a time.
//! The first error aborts the whole run; files converted before it stay
//! converted.

pub mod converter;
pub mod policy;
pub mod report;

pub use converter::Converter;
pub use policy::{MARKUP_EXTENSIONS, Rule, TEXT_EXTENSION, rule_for};
pub use report::{ConversionReport, FileOutcome, Outcome, SkipReason, format_histogram};

use crate::error::Result;
use crate::io::scan_files;
use std::path::Path;
use tracing::{debug, info};

/// Converts every eligible file below `root`.
///
/// # Arguments
///
/// * `root` - Directory to convert.
/// * `converter` - Converter to apply to each eligible file.
///
/// # Errors
///
/// Returns the first traversal, I/O, or encoding error encountered.
pub fn convert_tree<P: AsRef<Path>>(root: P, converter: &Converter) -> Result<ConversionReport> {
    let scan = scan_files(root.as_ref())?;
    let extensions = scan.extension_histogram();
    info!(
        "found {} files with extensions: {}",
        scan.len(),
        format_histogram(&extensions)
    );

    let mut report = ConversionReport {
        root: scan.root.clone(),
        dry_run: converter.is_dry_run(),
        files_found: scan.len(),
        extensions,
        ..ConversionReport::default()
    };

    for relative in &scan.files {
        let Some(rule) = rule_for(relative) else {
            debug!("{}: no rule, ignoring", relative.display());
            report.ignored += 1;
            continue;
        };

        let outcome = converter.convert(&scan.resolve(relative), rule)?;
        report.files.push(FileOutcome {
            path: relative.clone(),
            outcome,
        });
    }

    info!(
        "{} converted, {} skipped, {} ignored",
        report.converted_count(),
        report.skipped_count(),
        report.ignored
    );

    Ok(report)
}
