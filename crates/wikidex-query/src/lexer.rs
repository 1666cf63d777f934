//! Match-expression lexer.
//!
//! Converts a translated match expression into a token stream for the
//! parser. The translation step already reduced the alphabet to terms,
//! spaces, and the three operator keywords, so lexing cannot fail: tokens
//! are whitespace-separated words, and the uppercase keywords `AND`, `OR`,
//! and `NOT` are operators.
//!
//! Keywords are case-sensitive. A lowercase `and` in a query is an ordinary
//! search term, matching how the stored expression language treats it.

/// A token in the match-expression language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A bare word (search term).
    Term(String),

    /// The AND keyword.
    And,

    /// The OR keyword.
    Or,

    /// The NOT keyword.
    Not,
}

/// Tokenizes a match expression.
pub fn tokenize(input: &str) -> Vec<Token> {
    input
        .split_whitespace()
        .map(|word| match word {
            "AND" => Token::And,
            "OR" => Token::Or,
            "NOT" => Token::Not,
            term => Token::Term(term.to_string()),
        })
        .collect()
}
