//! Source tree enumeration.
//!
//! Walks the build output directory and yields every regular file as a
//! forward-slash-normalized relative path, in deterministic sorted order.

use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

/// Enumeration errors.
#[derive(Debug, Error)]
pub enum EnumerateError {
    /// Source root does not exist or is not a directory.
    #[error("source path not found or not a directory: {0}")]
    NotFound(PathBuf),

    /// Walk error while traversing the tree.
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// A file landed outside the source root.
    #[error("invalid source path: {0}")]
    InvalidPath(PathBuf),
}

/// Result type for enumeration operations.
pub type Result<T> = std::result::Result<T, EnumerateError>;

/// One file discovered under the source root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path relative to the source root, `/`-separated.
    pub relative_path: String,

    /// Absolute path on the local filesystem.
    pub absolute_path: PathBuf,
}

/// A validated source root to enumerate files from.
#[derive(Debug, Clone)]
pub struct SourceTree {
    root: PathBuf,
}

impl SourceTree {
    /// Create a source tree rooted at `root`.
    ///
    /// Fails when the root does not exist or is not a directory.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(EnumerateError::NotFound(root));
        }
        Ok(Self { root })
    }

    /// The source root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Enumerate every regular file under the root, at any depth.
    ///
    /// The result is sorted lexicographically by relative path, so runs
    /// over the same tree always see the same order. Each call performs
    /// a fresh walk.
    pub fn files(&self) -> Result<Vec<FileEntry>> {
        let mut entries = Vec::new();

        for entry in WalkDir::new(&self.root) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(&self.root)
                .map_err(|_| EnumerateError::InvalidPath(entry.path().to_path_buf()))?;
            let relative_path = relative.display().to_string().replace('\\', "/");

            entries.push(FileEntry {
                relative_path,
                absolute_path: entry.path().to_path_buf(),
            });
        }

        entries.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        Ok(entries)
    }
}
