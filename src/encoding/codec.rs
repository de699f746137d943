//! Encoding lookup and strict decoding.
//!
//! Labels are resolved with the WHATWG Encoding Standard rules that
//! `encoding_rs` implements, so `latin2`, `ISO-8859-2` and ` iso_8859-2 `
//! all name the same encoding. The Latin-1 and ASCII families are the
//! exception: WHATWG folds them into windows-1252, but a page declaring
//! `iso-8859-1` or `us-ascii` is decoded as exactly that here.

use crate::error::{EncodingError, Error, Result};
use encoding_rs::{DecoderResult, Encoding, UTF_8_INIT, WINDOWS_1250_INIT};

/// Encoding assumed for plain-text files, which carry no declaration.
pub static LEGACY_TEXT_ENCODING: SourceEncoding = SourceEncoding::Standard(&WINDOWS_1250_INIT);

/// Canonical output encoding.
pub static TARGET_ENCODING: &Encoding = &UTF_8_INIT;

/// Labels decoded as ISO-8859-1, after [`normalize_alias`].
const LATIN1_ALIASES: [&str; 11] = [
    "latin_1",
    "latin1",
    "latin",
    "l1",
    "iso_8859_1",
    "iso8859_1",
    "8859",
    "cp819",
    "ibm819",
    "iso_ir_100",
    "csisolatin1",
];

/// Labels decoded as 7-bit ASCII, after [`normalize_alias`].
const ASCII_ALIASES: [&str; 11] = [
    "ascii",
    "us_ascii",
    "us",
    "646",
    "cp367",
    "ibm367",
    "iso646_us",
    "iso_ir_6",
    "csascii",
    "ansi_x3.4_1968",
    "ansi_x3.4_1986",
];

/// Encoding a file is decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEncoding {
    /// An encoding from the WHATWG Encoding Standard.
    Standard(&'static Encoding),
    /// ISO-8859-1: every byte is the code point of the same value.
    Latin1,
    /// 7-bit ASCII: any byte above 0x7F is malformed.
    Ascii,
}

impl SourceEncoding {
    /// Returns the canonical name of the encoding.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Standard(encoding) => encoding.name(),
            Self::Latin1 => "ISO-8859-1",
            Self::Ascii => "US-ASCII",
        }
    }
}

impl From<&'static Encoding> for SourceEncoding {
    fn from(encoding: &'static Encoding) -> Self {
        Self::Standard(encoding)
    }
}

/// Lowercases and replaces `-` and spaces with `_`, the way codec aliases
/// are spelled.
fn normalize_alias(label: &str) -> String {
    label.trim().to_ascii_lowercase().replace(['-', ' '], "_")
}

/// Resolves an encoding label.
///
/// # Errors
///
/// Returns [`EncodingError::UnknownLabel`] if the label is not recognised.
///
/// # Examples
///
/// ```
/// use utf8_convert::encoding::{SourceEncoding, resolve_label};
///
/// assert_eq!(resolve_label("ISO-8859-1").unwrap(), SourceEncoding::Latin1);
/// assert_eq!(resolve_label("cp1250").unwrap().name(), "windows-1250");
/// ```
pub fn resolve_label(label: &str) -> Result<SourceEncoding> {
    let alias = normalize_alias(label);
    if LATIN1_ALIASES.contains(&alias.as_str()) {
        return Ok(SourceEncoding::Latin1);
    }
    if ASCII_ALIASES.contains(&alias.as_str()) {
        return Ok(SourceEncoding::Ascii);
    }

    Encoding::for_label(label.as_bytes())
        .map(SourceEncoding::Standard)
        .ok_or_else(|| {
            EncodingError::UnknownLabel {
                label: label.to_string(),
            }
            .into()
        })
}

/// Decodes `bytes` as `encoding`, failing on the first malformed sequence.
///
/// No BOM sniffing or stripping is done: a leading BOM decodes to
/// U+FEFF like any other character. Line endings are kept as they are.
///
/// For the single-byte `windows-*` code pages, bytes in 0x80..=0x9F that
/// the vendor table leaves undefined count as malformed rather than
/// decoding to C1 controls.
///
/// # Arguments
///
/// * `bytes` - Raw file content.
/// * `encoding` - Source encoding.
/// * `path` - Path used in error messages.
///
/// # Errors
///
/// Returns [`EncodingError::Malformed`] with the byte offset of the first
/// sequence that is invalid in `encoding`.
///
/// # Examples
///
/// ```
/// use utf8_convert::encoding::{LEGACY_TEXT_ENCODING, decode_strict};
///
/// let text = decode_strict(b"\x9ael\x9d", LEGACY_TEXT_ENCODING, "a.txt").unwrap();
/// assert_eq!(text, "šelť");
/// assert!(decode_strict(b"a\x98b", LEGACY_TEXT_ENCODING, "a.txt").is_err());
/// ```
pub fn decode_strict(bytes: &[u8], encoding: SourceEncoding, path: &str) -> Result<String> {
    let malformed = |offset: usize| -> Error {
        EncodingError::Malformed {
            path: path.to_string(),
            encoding: encoding.name().to_string(),
            offset,
        }
        .into()
    };

    match encoding {
        SourceEncoding::Latin1 => Ok(bytes.iter().copied().map(char::from).collect()),
        SourceEncoding::Ascii => match bytes.iter().position(|byte| !byte.is_ascii()) {
            Some(offset) => Err(malformed(offset)),
            None => Ok(bytes.iter().copied().map(char::from).collect()),
        },
        SourceEncoding::Standard(standard) => {
            let text = decode_standard(bytes, standard).map_err(malformed)?;
            if standard.name().starts_with("windows-")
                && let Some(offset) = undefined_control_offset(bytes, &text)
            {
                return Err(malformed(offset));
            }
            Ok(text)
        }
    }
}

/// Runs the `encoding_rs` decoder, returning the offset of the first
/// malformed sequence on failure.
fn decode_standard(bytes: &[u8], encoding: &'static Encoding) -> std::result::Result<String, usize> {
    let mut decoder = encoding.new_decoder_without_bom_handling();
    let capacity = decoder
        .max_utf8_buffer_length_without_replacement(bytes.len())
        .unwrap_or(bytes.len());
    let mut text = String::with_capacity(capacity);
    let mut consumed = 0;

    loop {
        let (result, read) =
            decoder.decode_to_string_without_replacement(&bytes[consumed..], &mut text, true);
        consumed += read;

        match result {
            DecoderResult::InputEmpty => return Ok(text),
            DecoderResult::OutputFull => {
                let remaining = bytes.len() - consumed;
                let additional = decoder
                    .max_utf8_buffer_length_without_replacement(remaining)
                    .unwrap_or(remaining)
                    .max(4);
                text.reserve(additional);
            }
            DecoderResult::Malformed(bad, extra) => {
                return Err(consumed - usize::from(bad) - usize::from(extra));
            }
        }
    }
}

/// Finds the first byte in 0x80..=0x9F that a single-byte code page passed
/// through as the C1 control of the same value.
///
/// Single-byte decoding yields exactly one character per input byte.
fn undefined_control_offset(bytes: &[u8], text: &str) -> Option<usize> {
    bytes
        .iter()
        .zip(text.chars())
        .position(|(&byte, ch)| (0x80..=0x9F).contains(&byte) && u32::from(byte) == u32::from(ch))
}

/// Translates `\r\n` and lone `\r` line endings to `\n`.
///
/// # Examples
///
/// ```
/// use utf8_convert::encoding::translate_newlines;
///
/// assert_eq!(translate_newlines("a\r\nb\rc\n".to_string()), "a\nb\nc\n");
/// ```
#[must_use]
pub fn translate_newlines(text: String) -> String {
    if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text
    }
}

/// Encodes `text` in the canonical output encoding.
#[must_use]
pub fn encode_target(text: &str) -> Vec<u8> {
    let (bytes, _, _) = TARGET_ENCODING.encode(text);
    bytes.into_owned()
}
