//! Per-file outcomes and the run summary.

use crate::io::ExtensionCount;
use serde::Serialize;
use std::path::PathBuf;

/// Why a file was left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// A markup file without a `charset=<name>"` declaration.
    NoCharsetDeclaration,
}

/// What happened to a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// Rewritten as UTF-8 (or would have been, in a dry run).
    Converted {
        /// Canonical name of the source encoding.
        from: String,
    },
    /// Left byte-for-byte unchanged.
    Skipped {
        /// Why the file was skipped.
        reason: SkipReason,
    },
}

/// Outcome for one file, keyed by its path relative to the root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    /// Path relative to the conversion root.
    pub path: PathBuf,
    /// What happened.
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Summary of a conversion run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConversionReport {
    /// Directory that was converted.
    pub root: PathBuf,
    /// Whether files were left unwritten.
    pub dry_run: bool,
    /// Number of regular files found (after exclusions).
    pub files_found: usize,
    /// Extension histogram, most common first.
    pub extensions: Vec<ExtensionCount>,
    /// Number of files whose extension has no conversion rule.
    pub ignored: usize,
    /// Outcomes for every file a rule applied to, in processing order.
    pub files: Vec<FileOutcome>,
}

impl ConversionReport {
    /// Number of converted files.
    #[must_use]
    pub fn converted_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.outcome, Outcome::Converted { .. }))
            .count()
    }

    /// Number of skipped files.
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.outcome, Outcome::Skipped { .. }))
            .count()
    }
}

/// Renders a histogram as `.html: 3, .txt: 2`.
#[must_use]
pub fn format_histogram(extensions: &[ExtensionCount]) -> String {
    if extensions.is_empty() {
        return "none".to_string();
    }
    extensions
        .iter()
        .map(|c| format!("{}: {}", c.extension, c.count))
        .collect::<Vec<_>>()
        .join(", ")
}
