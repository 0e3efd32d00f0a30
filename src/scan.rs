//! Directory listing shared by the sidebar and rewrite generators.
//!
//! ## Directory Structure
//!
//! Both generators expect a documentation tree like:
//!
//! ```text
//! src/                             # Navigation root
//! ├── index.md                     # Home page (ignored by navigation)
//! ├── 01-introduction.md           # Page (numbered = ordered)
//! ├── 02-getting-started/          # Group (numbered = in sidebar)
//! │   ├── 01-installation.md
//! │   ├── 02-first-steps.md
//! │   └── _draft.md                # Underscore = ignored
//! ├── 03-http-client/
//! │   └── 01-requests.md
//! └── assets/                      # Unnumbered = rewrites only
//!     └── notes.md
//! ```
//!
//! ## Ordering
//!
//! Raw `read_dir` order is platform-dependent, so entries are sorted: numbered
//! names first by their prefix value, unnumbered names after them, ties broken
//! by the raw file name.

use crate::naming;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("Rewrite destination {destination} claimed by both {first} and {second}")]
    DuplicateDestination {
        destination: String,
        first: String,
        second: String,
    },
}

/// A file or directory found while listing a navigation directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// File name, lossily converted to UTF-8
    pub name: String,
    pub is_dir: bool,
    pub path: PathBuf,
}

/// List a directory's entries in navigation order.
pub fn collect_entries(dir: &Path) -> Result<Vec<DirectoryEntry>, ScanError> {
    let io_err = |source| ScanError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let path = entry.path();
        // Follow symlinks so linked directories behave like real ones
        let is_dir = path.is_dir();
        entries.push(DirectoryEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            is_dir,
            path,
        });
    }

    entries.sort_by(|a, b| sort_key(&a.name).cmp(&sort_key(&b.name)));
    Ok(entries)
}

/// Sort key for a file name: ordering number (unnumbered last), then name.
pub fn sort_key(name: &str) -> (u64, &str) {
    (naming::ordering_number(name).unwrap_or(u64::MAX), name)
}

/// Ensure the navigation root exists and is a directory.
pub fn ensure_dir(root: &Path) -> Result<(), ScanError> {
    let meta = fs::metadata(root).map_err(|source| ScanError::Io {
        path: root.to_path_buf(),
        source,
    })?;
    if !meta.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }
    Ok(())
}

/// `path` relative to `root`, joined with `/` regardless of platform.
///
/// Returns `None` when `path` is not inside `root`.
pub fn relative_slash_path(path: &Path, root: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(parts.join("/"))
}
