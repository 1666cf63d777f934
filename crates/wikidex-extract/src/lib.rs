//! HTML text extraction and page naming for wikidex.
//!
//! This crate turns raw HTML pages into material the index can store:
//! - Markup stripping with a small two-state scanner (`extract`)
//! - A word-list variant for pre-tokenized consumers (`extract_words`)
//! - Stable page ids derived from filenames (`page_id`)
//!
//! The scanner is deliberately lenient: malformed markup is dropped, never
//! reported. Only failing to read a file at all is an error.

#![warn(missing_docs)]

mod error;
mod id;
mod scan;

pub use error::ExtractError;
pub use id::page_id;
pub use scan::{extract, extract_file, extract_words};
