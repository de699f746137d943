//! Directory enumeration.
//!
//! Lists every regular file below a root, pruning top-level tool
//! directories, and tallies extensions for the startup diagnostic.

use crate::error::Result;
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Names excluded when they appear as the first path segment below the root.
pub const EXCLUDED_ROOTS: [&str; 3] = [".git", ".nojekyll", ".vscode"];

/// Number of files seen with one extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionCount {
    /// Extension including the leading dot (e.g. `.html`).
    pub extension: String,
    /// Number of files carrying it.
    pub count: usize,
}

/// Result of enumerating a directory tree.
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    /// Root the relative paths are anchored at.
    pub root: PathBuf,
    /// File paths relative to `root`, sorted by component.
    pub files: Vec<PathBuf>,
}

impl ScanResult {
    /// Number of files found.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns true if no files were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Absolute (root-joined) path of a relative entry.
    #[must_use]
    pub fn resolve(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }

    /// Extension histogram, most common first.
    ///
    /// Ties keep the order in which the extension first appears in
    /// `files`. Files without an extension are not counted.
    #[must_use]
    pub fn extension_histogram(&self) -> Vec<ExtensionCount> {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut counts: Vec<ExtensionCount> = Vec::new();

        for extension in self.files.iter().filter_map(|p| dotted_extension(p)) {
            if let Some(&i) = index.get(&extension) {
                counts[i].count += 1;
            } else {
                index.insert(extension.clone(), counts.len());
                counts.push(ExtensionCount {
                    extension,
                    count: 1,
                });
            }
        }

        // stable: equal counts stay in first-seen order
        counts.sort_by(|a, b| b.count.cmp(&a.count));
        counts
    }
}

/// Returns the final extension of `path` with a leading dot.
///
/// Hidden files such as `.bashrc` and names ending in a bare dot have no
/// extension.
#[must_use]
pub fn dotted_extension(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| ext.to_string_lossy())
        .filter(|ext| !ext.is_empty())
        .map(|ext| format!(".{ext}"))
}

/// Returns true if `relative` starts with an excluded segment.
#[must_use]
pub fn is_excluded(relative: &Path) -> bool {
    relative
        .components()
        .next()
        .and_then(|first| first.as_os_str().to_str())
        .is_some_and(|first| EXCLUDED_ROOTS.contains(&first))
}

/// Recursively lists regular files below `root`.
///
/// A symbolic link is listed under its own path when it resolves to a
/// regular file. Links to directories are not descended into, and broken
/// links are skipped. Any traversal error aborts the scan.
///
/// # Errors
///
/// Returns [`crate::error::IoError::WalkFailed`] if a directory cannot be read.
pub fn scan_files<P: AsRef<Path>>(root: P) -> Result<ScanResult> {
    let root = root.as_ref();
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .min_depth(1)
        .into_iter()
        .filter_entry(|entry| entry.depth() != 1 || !is_excluded(Path::new(entry.file_name())));

    for entry in walker {
        let entry = entry?;
        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if !is_file {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(root)
            .map_or_else(|_| entry.path().to_path_buf(), Path::to_path_buf);
        files.push(relative);
    }

    files.sort();

    Ok(ScanResult {
        root: root.to_path_buf(),
        files,
    })
}
