//! Error types for match-expression parsing.

use std::{error::Error, fmt};

/// Parse error with position information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Error message.
    pub message: String,
    /// Token index where the error occurred (if applicable).
    pub token_index: Option<usize>,
}

impl ParseError {
    /// Creates a new parse error.
    pub fn new(message: impl Into<String>, token_index: Option<usize>) -> Self {
        Self {
            message: message.into(),
            token_index,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(idx) = self.token_index {
            write!(f, "at token {}: {}", idx, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl Error for ParseError {}
