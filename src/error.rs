//! Error types for utf8-convert operations.
//!
//! This module provides the error hierarchy using `thiserror` for directory
//! traversal, file I/O, encoding resolution and decoding, and CLI handling.
//! Every variant is fatal to a conversion run; the only non-fatal situation
//! (a markup file without a charset declaration) is not an error at all and
//! is reported as a skipped file instead.

use thiserror::Error;

/// Result type alias for utf8-convert operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O errors (file and directory operations).
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// Encoding resolution or decoding errors.
    #[error("encoding error: {0}")]
    Encoding(#[from] EncodingError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),
}

/// I/O-specific errors for file operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path to the file that was not found.
        path: String,
    },

    /// Failed to read file.
    #[error("failed to read file: {path}: {reason}")]
    ReadFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Failed to write file.
    #[error("failed to write file: {path}: {reason}")]
    WriteFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Memory mapping error.
    #[error("memory mapping failed: {path}: {reason}")]
    MmapFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Directory traversal error.
    #[error("failed to walk directory: {path}: {reason}")]
    WalkFailed {
        /// Path at which traversal failed.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Generic I/O error wrapper.
    #[error("I/O error: {0}")]
    Generic(String),
}

/// Errors raised while resolving or applying a text encoding.
#[derive(Error, Debug)]
pub enum EncodingError {
    /// The label does not name an encoding known to the codec.
    #[error("unknown encoding: {label}")]
    UnknownLabel {
        /// Label as found in the file or supplied by the caller.
        label: String,
    },

    /// A charset declaration whose value is not ASCII.
    #[error("charset declaration in {path} is not ASCII")]
    NonAsciiLabel {
        /// Path to the file carrying the declaration.
        path: String,
    },

    /// The file's bytes are not valid in the stated encoding.
    #[error("{path} is not valid {encoding} (malformed bytes at offset {offset})")]
    Malformed {
        /// Path to the file.
        path: String,
        /// Canonical name of the encoding used for decoding.
        encoding: String,
        /// Byte offset of the first malformed sequence.
        offset: usize,
    },
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Invalid argument provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(IoError::Generic(err.to_string()))
    }
}

impl From<walkdir::Error> for IoError {
    fn from(err: walkdir::Error) -> Self {
        let path = err
            .path()
            .map_or_else(String::new, |p| p.to_string_lossy().to_string());
        let reason = err
            .io_error()
            .map_or_else(|| err.to_string(), ToString::to_string);
        Self::WalkFailed { path, reason }
    }
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Self::Io(err.into())
    }
}
