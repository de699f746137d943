//! CLI command implementation.

use crate::cli::output::{OutputFormat, format_report};
use crate::cli::parser::Cli;
use crate::convert::{Converter, convert_tree};
use crate::error::{CommandError, Result};

/// Executes the conversion described by the parsed arguments.
///
/// # Returns
///
/// The formatted run summary.
///
/// # Errors
///
/// Returns an error if the root is not a directory or the conversion fails.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);

    if !cli.root.is_dir() {
        return Err(CommandError::InvalidArgument(format!(
            "{} is not a directory",
            cli.root.display()
        ))
        .into());
    }

    let converter = Converter::new().with_dry_run(cli.dry_run);
    let report = convert_tree(&cli.root, &converter)?;

    Ok(format_report(&report, format))
}
