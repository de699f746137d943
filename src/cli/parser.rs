//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros. Running with no
//! arguments converts the current directory.

use clap::Parser;
use std::path::PathBuf;

/// Convert legacy-encoded `.htm`, `.html` and `.txt` files to UTF-8 in place.
///
/// Markup files are decoded using their own `charset=` declaration, which
/// is rewritten to `utf-8`; text files are assumed to be windows-1250.
/// `.git`, `.nojekyll` and `.vscode` at the top of the tree are skipped.
#[derive(Parser, Debug)]
#[command(name = "utf8-convert")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory tree to convert.
    #[arg(env = "UTF8_CONVERT_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Report what would be converted without writing any file.
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Summary format (text, json).
    #[arg(long, default_value = "text")]
    pub format: String,
}
