//! Charset declaration detection and rewriting.
//!
//! Markup files announce their encoding with a `charset=<name>"` token
//! (typically inside a `<meta>` element). Detection is a plain byte-pattern
//! search over the undecoded file: it is case-sensitive, takes the first
//! declaration found, and never checks whether the declaration is truthful.

use crate::error::{EncodingError, Result};
use regex::bytes::Regex;
use std::borrow::Cow;
use std::ops::Range;
use std::sync::OnceLock;

/// Charset name written into rewritten declarations.
pub const TARGET_CHARSET: &str = "utf-8";

/// Matches `charset=` followed by one or more non-quote bytes and a closing
/// quote. Unicode mode is off so that legacy bytes inside the value still
/// match.
const DECLARATION_PATTERN: &str = r#"(?-u)charset=([^"]+)""#;

#[allow(clippy::expect_used)]
fn declaration_regex() -> &'static Regex {
    static DECLARATION: OnceLock<Regex> = OnceLock::new();
    DECLARATION.get_or_init(|| Regex::new(DECLARATION_PATTERN).expect("valid regex"))
}

/// The first charset declaration found in a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharsetDeclaration {
    /// Declared encoding label, as written in the file.
    pub label: String,
    /// Byte range of the label within the file.
    pub range: Range<usize>,
}

/// Finds the first charset declaration in `bytes`.
///
/// Returns `Ok(None)` when the file carries no declaration.
///
/// # Arguments
///
/// * `bytes` - Raw file content.
/// * `path` - Path used in error messages.
///
/// # Errors
///
/// Returns [`EncodingError::NonAsciiLabel`] if the declared value contains
/// non-ASCII bytes.
///
/// # Examples
///
/// ```
/// use utf8_convert::encoding::detect_charset;
///
/// let html = br#"<meta content="text/html; charset=windows-1252">"#;
/// let found = detect_charset(html, "index.html").unwrap().unwrap();
/// assert_eq!(found.label, "windows-1252");
/// ```
pub fn detect_charset(bytes: &[u8], path: &str) -> Result<Option<CharsetDeclaration>> {
    let Some(value) = declaration_regex()
        .captures(bytes)
        .and_then(|caps| caps.get(1))
    else {
        return Ok(None);
    };

    if !value.as_bytes().is_ascii() {
        return Err(EncodingError::NonAsciiLabel {
            path: path.to_string(),
        }
        .into());
    }

    Ok(Some(CharsetDeclaration {
        label: String::from_utf8_lossy(value.as_bytes()).into_owned(),
        range: value.range(),
    }))
}

/// Rewrites every charset declaration in `bytes` to declare UTF-8.
///
/// The substitution is purely byte-level and happens before decoding,
/// which is sound for every ASCII-compatible source encoding. Returns the
/// input unchanged (borrowed) when there is nothing to rewrite.
#[must_use]
pub fn rewrite_declarations(bytes: &[u8]) -> Cow<'_, [u8]> {
    let replacement = format!("charset={TARGET_CHARSET}\"");
    declaration_regex().replace_all(bytes, replacement.as_bytes())
}
