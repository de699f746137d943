//! Extension-based conversion rules.

use crate::encoding::{LEGACY_TEXT_ENCODING, SourceEncoding};
use crate::io::dotted_extension;
use std::path::Path;

/// Extensions whose source encoding is read from a charset declaration.
pub const MARKUP_EXTENSIONS: [&str; 2] = [".htm", ".html"];

/// Extension of plain-text files converted from [`LEGACY_TEXT_ENCODING`].
pub const TEXT_EXTENSION: &str = ".txt";

/// How the source encoding of a file is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Read it from the file's charset declaration.
    Detect,
    /// Use a fixed encoding and translate line endings to `\n`.
    Assume(SourceEncoding),
}

/// Returns the conversion rule for `path`, or `None` if the file is ignored.
///
/// Matching is case-sensitive and looks at the last extension only.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use utf8_convert::convert::{Rule, rule_for};
///
/// assert_eq!(rule_for(Path::new("docs/index.html")), Some(Rule::Detect));
/// assert_eq!(rule_for(Path::new("logo.png")), None);
/// ```
#[must_use]
pub fn rule_for(path: &Path) -> Option<Rule> {
    let extension = dotted_extension(path)?;
    if MARKUP_EXTENSIONS.contains(&extension.as_str()) {
        Some(Rule::Detect)
    } else if extension == TEXT_EXTENSION {
        Some(Rule::Assume(LEGACY_TEXT_ENCODING))
    } else {
        None
    }
}
