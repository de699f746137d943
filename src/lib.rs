//! # utf8-convert
//!
//! Batch conversion of legacy-encoded text files to UTF-8.
//!
//! utf8-convert walks a directory tree and rewrites every `.htm`, `.html`
//! and `.txt` file in place as UTF-8:
//!
//! - **Markup**: the source encoding is taken from the file's own
//!   `charset=<name>"` declaration, which is rewritten to `charset=utf-8"`.
//!   Files without a declaration are left alone.
//! - **Plain text**: assumed to be windows-1250.
//! - **Fail-fast**: the first unreadable or undecodable file stops the run.
//!
//! ```no_run
//! use utf8_convert::{Converter, convert_tree};
//!
//! let report = convert_tree("site", &Converter::new()).unwrap();
//! println!("{} files converted", report.converted_count());
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
// Note: unsafe is needed for memory-mapped I/O (memmap2)
#![warn(unsafe_code)]

pub mod cli;
pub mod convert;
pub mod encoding;
pub mod error;
pub mod io;
pub mod logging;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export conversion types
pub use convert::{ConversionReport, Converter, FileOutcome, Outcome, Rule, convert_tree, rule_for};

// Re-export CLI types
pub use cli::{Cli, OutputFormat};
