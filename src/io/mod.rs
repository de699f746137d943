//! I/O utilities for utf8-convert.
//!
//! Provides raw byte reading with memory mapping support, in-place file
//! rewriting, and directory enumeration.

pub mod reader;
pub mod walker;

pub use reader::{FileContents, FileReader, overwrite_file, read_bytes};
pub use walker::{EXCLUDED_ROOTS, ExtensionCount, ScanResult, dotted_extension, scan_files};
