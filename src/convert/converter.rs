//! Single-file conversion.
//!
//! A file is read once, decoded, and written back once as UTF-8. Files
//! with an assumed encoding also have their line endings translated to
//! `\n`; files with a declared charset keep theirs. Decoding is strict and any failure is returned to the caller untouched: there is
//! no backup and no rollback, so a file is either fully rewritten or not
//! written at all.

use crate::convert::policy::Rule;
use crate::convert::report::{Outcome, SkipReason};
use crate::encoding::{
    SourceEncoding, TARGET_CHARSET, decode_strict, detect_charset, encode_target, resolve_label,
    rewrite_declarations, translate_newlines,
};
use crate::error::Result;
use crate::io::{overwrite_file, read_bytes};
use std::path::Path;
use tracing::{debug, info, warn};

/// Rewrites files in place as UTF-8.
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    dry_run: bool,
}

impl Converter {
    /// Creates a converter that writes its results.
    #[must_use]
    pub const fn new() -> Self {
        Self { dry_run: false }
    }

    /// Sets dry-run mode: files are read and decoded but never written.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Returns true if this converter leaves files unwritten.
    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Converts `path` according to `rule`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or written, the declared
    /// encoding is unknown, or the content is malformed in the source
    /// encoding.
    pub fn convert(&self, path: &Path, rule: Rule) -> Result<Outcome> {
        match rule {
            Rule::Detect => self.convert_detected(path),
            Rule::Assume(encoding) => self.convert_from(path, encoding),
        }
    }

    /// Converts a file whose source encoding is given by its own charset
    /// declaration, rewriting every declaration to name UTF-8.
    ///
    /// Files without a declaration are skipped and left unchanged.
    ///
    /// # Errors
    ///
    /// See [`Converter::convert`].
    pub fn convert_detected(&self, path: &Path) -> Result<Outcome> {
        let shown = path.to_string_lossy();

        // the mapping, if any, is released before the file is rewritten
        let (text, encoding) = {
            let bytes = read_bytes(path)?;

            let Some(declaration) = detect_charset(&bytes, &shown)? else {
                warn!("{shown}: no charset found, skipping");
                return Ok(Outcome::Skipped {
                    reason: SkipReason::NoCharsetDeclaration,
                });
            };

            let encoding = resolve_label(&declaration.label)?;
            debug!(
                "{shown}: declared charset {} at bytes {:?}",
                declaration.label, declaration.range
            );

            let rewritten = rewrite_declarations(&bytes);
            (decode_strict(&rewritten, encoding, &shown)?, encoding)
        };

        self.write(path, &text, encoding)
    }

    /// Converts a file from a known source encoding.
    ///
    /// The content is decoded as-is and `\r\n` and lone `\r` line endings
    /// become `\n`. Charset declarations, if any, are not touched.
    ///
    /// # Errors
    ///
    /// See [`Converter::convert`].
    pub fn convert_from(&self, path: &Path, encoding: SourceEncoding) -> Result<Outcome> {
        let shown = path.to_string_lossy();
        let text = {
            let bytes = read_bytes(path)?;
            decode_strict(&bytes, encoding, &shown)?
        };
        self.write(path, &translate_newlines(text), encoding)
    }

    fn write(&self, path: &Path, text: &str, from: SourceEncoding) -> Result<Outcome> {
        if self.dry_run {
            info!(
                "{}: would convert from {} to {TARGET_CHARSET}",
                path.display(),
                from.name()
            );
        } else {
            overwrite_file(path, &encode_target(text))?;
            info!(
                "{}: converted from {} to {TARGET_CHARSET}",
                path.display(),
                from.name()
            );
        }

        Ok(Outcome::Converted {
            from: from.name().to_string(),
        })
    }
}
