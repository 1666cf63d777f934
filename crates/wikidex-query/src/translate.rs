//! User-query translation.
//!
//! Rewrites the user-facing operator characters (`&`, `|`, `~`) into the
//! match-expression keywords and drops every character outside a fixed
//! allow-list. This is the safety boundary between raw user input and the
//! index: filtering, not escaping, so there is no escape-sequence ambiguity
//! and no delimiter character can survive into the expression.

/// Translates a raw user query into a match expression.
///
/// Pure and total: every input yields a string, possibly empty. The
/// allow-list admits spaces, ASCII digits and letters, and the accented
/// Latin-1 letters used by the page corpus; the multiplication and division
/// signs inside that block are not letters and are excluded. Everything
/// else is dropped.
pub fn translate(raw: &str) -> String {
    let mut expr = String::with_capacity(raw.len());

    for ch in raw.chars() {
        match ch {
            '&' => expr.push_str(" AND "),
            '|' => expr.push_str(" OR "),
            '~' => expr.push_str(" NOT "),
            ' ' | '0'..='9' | 'A'..='Z' | 'a'..='z' => expr.push(ch),
            '×' | '÷' => {}
            'À'..='ÿ' => expr.push(ch),
            _ => {}
        }
    }

    expr
}
