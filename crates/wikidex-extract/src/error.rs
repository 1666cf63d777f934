//! Error types for the wikidex-extract crate.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when extracting text from pages.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Failed to read a page file.
    #[error("failed to read page {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}
