//! Markup-stripping scanner.
//!
//! A two-state scanner over the page content:
//!
//! - **Tag state**: entered on `<`, discards everything up to and including
//!   the next `>`. An unterminated tag at end of input is silently dropped -
//!   lenience toward malformed HTML is deliberate, documented behavior.
//! - **Text state**: copies characters through verbatim, except the single
//!   quote, which is elided so extracted text can be embedded in match
//!   expressions without delimiter collisions.
//!
//! Whitespace is preserved; segmenting the text into terms is the index
//! tokenizer's job, not the scanner's.

use std::{fs, path::Path};

use crate::ExtractError;

/// Strips markup from an HTML string, returning the plain text.
///
/// A `>` outside any tag is ordinary text and is copied through. Empty input
/// yields empty output.
pub fn extract(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut chars = html.chars();

    while let Some(ch) = chars.next() {
        match ch {
            // Tag state: discard through the closing `>`. If the input ends
            // first, the unterminated tag is dropped and the scan ends.
            '<' => {
                for inner in chars.by_ref() {
                    if inner == '>' {
                        break;
                    }
                }
            }
            '\'' => {}
            _ => text.push(ch),
        }
    }

    text
}

/// Strips markup and splits each text run on spaces, returning words in
/// document order.
///
/// A word ends at a space or at a tag boundary: `<b>a</b>b` is two words,
/// not one. Duplicates are preserved; empty runs (consecutive spaces, spaces
/// adjacent to tags) are not emitted. Used when a consumer wants
/// pre-tokenized words rather than the raw text stream.
pub fn extract_words(html: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut word = String::new();
    let mut chars = html.chars();

    while let Some(ch) = chars.next() {
        match ch {
            '<' => {
                if !word.is_empty() {
                    words.push(std::mem::take(&mut word));
                }
                for inner in chars.by_ref() {
                    if inner == '>' {
                        break;
                    }
                }
            }
            ' ' => {
                if !word.is_empty() {
                    words.push(std::mem::take(&mut word));
                }
            }
            '\'' => {}
            _ => word.push(ch),
        }
    }

    if !word.is_empty() {
        words.push(word);
    }

    words
}

/// Reads a page file and extracts its text.
///
/// Page dumps are not reliably valid UTF-8, so the content is read lossily.
/// A read failure is reported per page; callers indexing a batch continue
/// with the remaining pages.
pub fn extract_file(path: &Path) -> Result<String, ExtractError> {
    let bytes = fs::read(path).map_err(|source| ExtractError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(extract(&String::from_utf8_lossy(&bytes)))
}
