//! Page discovery for indexing.
//!
//! Walks the page root to find HTML files to index, skipping hidden entries
//! and symlinks.

use std::{
    ffi::OsStr,
    io::{Error as IoError, ErrorKind},
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

use crate::IndexError;

/// Discovers all HTML pages under the given root directory.
///
/// Returns files that:
/// - Have an `.html` or `.htm` extension (case-insensitive)
/// - Are regular files (directories and symlinks are skipped)
/// - Are not hidden (no leading `.` on any walked component)
///
/// The returned paths are sorted for stable traversal order. Order is not
/// semantically significant - search results are relevance-ranked later -
/// but stable order keeps runs and logs comparable.
pub fn discover_pages(root: &Path) -> Result<Vec<PathBuf>, IndexError> {
    if !root.is_dir() {
        return Err(IndexError::Io(IoError::new(
            ErrorKind::NotFound,
            format!("page directory not found: {}", root.display()),
        )));
    }

    let mut pages = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| !is_hidden(e.file_name()))
    {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        if entry.file_type().is_dir() || entry.file_type().is_symlink() {
            continue;
        }

        if is_html(entry.path()) {
            pages.push(entry.path().to_path_buf());
        }
    }

    pages.sort();
    Ok(pages)
}

/// Checks whether a file name starts with a dot.
fn is_hidden(name: &OsStr) -> bool {
    name.to_str().is_some_and(|s| s.starts_with('.'))
}

/// Checks whether a path has an HTML extension.
fn is_html(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
}
