//! Checks on whether input can be represented before converting it.

use super::cell::is_braille_cell;
use super::encoder::encode;
use super::table::SymbolTable;
use super::types::error::{BrailleError, Result};
use super::utils::fold_lower;

/// Returns true when every character of `text` has a glyph.
///
/// Empty input is rejected rather than vacuously accepted.
pub fn can_encode(text: &str) -> bool {
    can_encode_with(SymbolTable::global(), text)
}

pub fn can_encode_with(table: &SymbolTable, text: &str) -> bool {
    !text.is_empty() && text.chars().all(|ch| table.contains_char(fold_lower(ch)))
}

/// Distinct characters of `text` that have no glyph, as written and in
/// first-seen order.
pub fn unsupported_chars(text: &str) -> Vec<char> {
    let table = SymbolTable::global();
    let mut missing = Vec::new();
    for ch in text.chars() {
        if !table.contains_char(fold_lower(ch)) && !missing.contains(&ch) {
            missing.push(ch);
        }
    }
    missing
}

/// Rejects blank input and input containing unsupported characters.
///
/// # Errors
/// - [`BrailleError::EmptyInput`] if `text` is empty or whitespace only
/// - [`BrailleError::UnsupportedCharacters`] listing every offending character
pub fn check(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(BrailleError::EmptyInput);
    }
    let missing = unsupported_chars(text);
    if !missing.is_empty() {
        return Err(BrailleError::UnsupportedCharacters(missing));
    }
    Ok(())
}

/// Like [`encode`], but refuses input that would need pass-through.
pub fn encode_strict(text: &str) -> Result<String> {
    check(text)?;
    Ok(encode(text))
}

/// Returns true when `text` looks like Braille input: only six-dot cells and
/// ASCII spaces. Empty input is rejected.
pub fn is_valid_braille(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|ch| ch == ' ' || is_braille_cell(ch))
}
