//! Text analysis for page content.
//!
//! Page bodies and query terms go through one analyzer: simple word
//! tokenization, lowercasing, a 40-byte token cap, and Snowball stemming in
//! the configured language. Sharing the analyzer between the write path and
//! query compilation is what makes matching work - both sides reduce text to
//! the same normal form. The corpus this tool was built for is a Spanish
//! wiki dump, hence the "spanish" default upstream.

use tantivy::tokenizer::{
    Language, LowerCaser, RemoveLongFilter, SimpleTokenizer, Stemmer, TextAnalyzer,
};

use crate::IndexError;

/// Name of the custom tokenizer registered with Tantivy.
pub(crate) const PAGE_TOKENIZER: &str = "wikidex_text";

/// Maximum token length in bytes before filtering.
const MAX_TOKEN_LENGTH: usize = 40;

/// Parses a stemmer language string into a Tantivy `Language`.
///
/// Supports lowercase language names matching Tantivy's `Language` enum.
/// Returns an error if the language is not recognized.
pub fn parse_language(name: &str) -> Result<Language, IndexError> {
    match name.to_lowercase().as_str() {
        "arabic" => Ok(Language::Arabic),
        "danish" => Ok(Language::Danish),
        "dutch" => Ok(Language::Dutch),
        "english" => Ok(Language::English),
        "finnish" => Ok(Language::Finnish),
        "french" => Ok(Language::French),
        "german" => Ok(Language::German),
        "greek" => Ok(Language::Greek),
        "hungarian" => Ok(Language::Hungarian),
        "italian" => Ok(Language::Italian),
        "norwegian" => Ok(Language::Norwegian),
        "portuguese" => Ok(Language::Portuguese),
        "romanian" => Ok(Language::Romanian),
        "russian" => Ok(Language::Russian),
        "spanish" => Ok(Language::Spanish),
        "swedish" => Ok(Language::Swedish),
        "tamil" => Ok(Language::Tamil),
        "turkish" => Ok(Language::Turkish),
        other => Err(IndexError::InvalidLanguage(other.to_string())),
    }
}

/// Builds the page text analyzer with the specified stemmer language.
pub fn build_analyzer(language: Language) -> TextAnalyzer {
    TextAnalyzer::builder(SimpleTokenizer::default())
        .filter(LowerCaser)
        .filter(RemoveLongFilter::limit(MAX_TOKEN_LENGTH))
        .filter(Stemmer::new(language))
        .build()
}

/// Builds the page text analyzer from a language name string.
///
/// Convenience function combining [`parse_language`] and [`build_analyzer`].
pub fn build_analyzer_from_name(language_name: &str) -> Result<TextAnalyzer, IndexError> {
    let language = parse_language(language_name)?;
    Ok(build_analyzer(language))
}
