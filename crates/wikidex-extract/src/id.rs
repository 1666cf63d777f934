//! Page id derivation.

/// Derives a stable page id from a filename.
///
/// The id is the filename up to (not including) the first `.`, with single
/// quotes elided - the same elision the text scanner applies, so ids are safe
/// to embed in match expressions and URLs. A filename with no `.` yields the
/// whole name, quotes elided.
pub fn page_id(filename: &str) -> String {
    filename
        .chars()
        .take_while(|&ch| ch != '.')
        .filter(|&ch| ch != '\'')
        .collect()
}
