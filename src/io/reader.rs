//! Raw file access with memory mapping support.
//!
//! Conversion works on undecoded bytes, so everything here deals in byte
//! slices; decoding is left to [`crate::encoding`].

// Memory mapping requires unsafe but is well-documented and safe for read-only access
#![allow(unsafe_code)]

use crate::error::{IoError, Result};
use memmap2::Mmap;
use std::fs::File;
use std::io::Read;
use std::ops::Deref;
use std::path::Path;

/// Threshold for using memory mapping (1MB).
const MMAP_THRESHOLD: u64 = 1024 * 1024;

/// Maximum file size to read into memory (1GB).
const MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Raw content of a file, either read into memory or mapped.
///
/// Dereferences to the file's bytes. A mapping must be dropped before the
/// same file is overwritten.
#[derive(Debug)]
pub enum FileContents {
    /// Bytes read into an owned buffer.
    Read(Vec<u8>),
    /// Read-only mapping of the file.
    Mapped(Mmap),
}

impl Deref for FileContents {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            Self::Read(bytes) => bytes,
            Self::Mapped(mmap) => mmap,
        }
    }
}

/// File reader with support for memory mapping.
///
/// Automatically chooses the best reading strategy based on file size:
/// - Small files (< 1MB): Read directly into memory
/// - Large files (>= 1MB): Map the file and decode straight from the mapping
///
/// # Examples
///
/// ```no_run
/// use utf8_convert::io::FileReader;
///
/// let reader = FileReader::open("legacy.html").unwrap();
/// let contents = reader.contents().unwrap();
/// assert!(contents.starts_with(b"<"));
/// ```
pub struct FileReader {
    /// File handle.
    file: File,
    /// File size in bytes.
    size: u64,
    /// File path for error messages.
    path: String,
}

impl FileReader {
    /// Opens a file for reading.
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist, can't be opened, or
    /// exceeds the maximum supported size.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let path_str = path_ref.to_string_lossy().to_string();

        if !path_ref.exists() {
            return Err(IoError::FileNotFound { path: path_str }.into());
        }

        let file = File::open(path_ref).map_err(|e| IoError::ReadFailed {
            path: path_str.clone(),
            reason: e.to_string(),
        })?;

        let metadata = file.metadata().map_err(|e| IoError::ReadFailed {
            path: path_str.clone(),
            reason: e.to_string(),
        })?;

        let size = metadata.len();

        if size > MAX_FILE_SIZE {
            return Err(IoError::ReadFailed {
                path: path_str,
                reason: format!("file too large: {size} bytes (max: {MAX_FILE_SIZE} bytes)"),
            }
            .into());
        }

        Ok(Self {
            file,
            size,
            path: path_str,
        })
    }

    /// Returns the file content.
    ///
    /// Large files are mapped rather than copied.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or mapping fails.
    pub fn contents(&self) -> Result<FileContents> {
        if self.size >= MMAP_THRESHOLD {
            self.map().map(FileContents::Mapped)
        } else {
            self.read_direct().map(FileContents::Read)
        }
    }

    fn map(&self) -> Result<Mmap> {
        // Safety: the mapping is read-only and dropped before the file is rewritten
        unsafe {
            Mmap::map(&self.file).map_err(|e| {
                IoError::MmapFailed {
                    path: self.path.clone(),
                    reason: e.to_string(),
                }
                .into()
            })
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn read_direct(&self) -> Result<Vec<u8>> {
        let mut file = &self.file;
        let mut buffer = Vec::with_capacity(self.size as usize);
        file.read_to_end(&mut buffer)
            .map_err(|e| IoError::ReadFailed {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;
        Ok(buffer)
    }
}

/// Reads a file's raw bytes, automatically choosing the best method.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
///
/// # Examples
///
/// ```no_run
/// use utf8_convert::io::read_bytes;
///
/// let bytes = read_bytes("index.htm").unwrap();
/// println!("{} bytes", bytes.len());
/// ```
pub fn read_bytes<P: AsRef<Path>>(path: P) -> Result<FileContents> {
    FileReader::open(path)?.contents()
}

/// Overwrites an existing file with `content`.
///
/// The file is truncated and rewritten in place; there is no temporary
/// file and no backup.
///
/// # Errors
///
/// Returns an error if the file is missing or cannot be written.
pub fn overwrite_file<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path_ref = path.as_ref();
    let path_str = path_ref.to_string_lossy().to_string();

    if !path_ref.is_file() {
        return Err(IoError::FileNotFound { path: path_str }.into());
    }

    std::fs::write(path_ref, content).map_err(|e| IoError::WriteFailed {
        path: path_str,
        reason: e.to_string(),
    })?;

    Ok(())
}
