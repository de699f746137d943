//! CLI layer for utf8-convert.
//!
//! Provides the command-line interface using clap, the command that drives
//! a conversion run, and summary formatting.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::Cli;
