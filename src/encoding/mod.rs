//! Text encoding support.
//!
//! - **detect**: finds and rewrites `charset=<name>"` declarations in raw bytes
//! - **codec**: resolves encoding labels and decodes strictly via `encoding_rs`

pub mod codec;
pub mod detect;

pub use codec::{
    LEGACY_TEXT_ENCODING, SourceEncoding, TARGET_ENCODING, decode_strict, encode_target,
    resolve_label, translate_newlines,
};
pub use detect::{CharsetDeclaration, TARGET_CHARSET, detect_charset, rewrite_declarations};
