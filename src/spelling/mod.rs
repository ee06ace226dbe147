//! # Spelling Module
//!
//! Resolves text into phonetic code words: "Hi" → Hotel, India.
//!
//! Resolution is a pure, total function: every character maps to *some*
//! display word. Case is folded and diacritics are stripped before the table
//! lookup, so "é" spells like "E"; characters with no table entry resolve to
//! the `[?]` placeholder instead of failing.
//!
//! The mapping table itself lives in [`alphabet`].

pub mod alphabet;

pub use alphabet::code_word;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Display word for characters outside the mapping table.
pub const PLACEHOLDER: &str = "[?]";

/// One input character paired with its resolved code word.
///
/// Tokens are produced fresh for every render request and keep input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The character exactly as the user typed it.
    pub source: char,
    /// The resolved code word, or [`PLACEHOLDER`].
    pub word: String,
}

/// Resolve every character of `text` to a [`Token`], in input order.
pub fn resolve_tokens(text: &str) -> Vec<Token> {
    text.chars()
        .map(|source| Token {
            source,
            word: resolve_code_word(source),
        })
        .collect()
}

/// Resolve a single character to its code word.
///
/// Falls back to [`PLACEHOLDER`] when the normalized character has no table
/// entry, or when normalization expands the character into more than one
/// (e.g. ß uppercases to "SS", which is not a table key).
pub fn resolve_code_word(c: char) -> String {
    let normalized = normalize_char(c);
    let mut chars = normalized.chars();
    match (chars.next(), chars.next()) {
        (Some(key), None) => code_word(key).unwrap_or(PLACEHOLDER).to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Uppercase, decompose (NFD) and drop combining marks.
fn normalize_char(c: char) -> String {
    c.to_uppercase()
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .collect()
}

/// Plain-text spelling, one `letter  word` line per character.
///
/// This is the non-interactive output used by `alfazulu --print`.
pub fn spell_lines(text: &str) -> Vec<String> {
    resolve_tokens(text)
        .iter()
        .map(|token| format!("{}  {}", token.source, token.word))
        .collect()
}
