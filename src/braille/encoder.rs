//! Text → Braille.

use log::trace;

use super::table::{is_numeric_separator, SymbolTable, CAPITAL_INDICATOR, NUMBER_INDICATOR};
use super::utils::fold_lower;

/// Per-call encoder state.
///
/// Capitalisation is decided per character, so the only thing carried from
/// one character to the next is whether a numeric run is open.
#[derive(Debug, Default)]
struct EncodeState {
    in_numeric_run: bool,
}

/// Encodes Spanish text as Braille cells using the global symbol table.
///
/// Never fails: characters without a glyph are copied through unchanged.
pub fn encode(text: &str) -> String {
    encode_with(SymbolTable::global(), text)
}

/// Encodes `text` against an explicit table.
///
/// # Numeric runs
/// The first digit of a run is preceded by [`NUMBER_INDICATOR`]. Inside a run,
/// `-`, `,` and `.` are written as-is; if the next character is a digit the
/// indicator is repeated, otherwise the run ends.
pub fn encode_with(table: &SymbolTable, text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 3);
    let mut state = EncodeState::default();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        let is_digit = ch.is_ascii_digit();

        if is_digit && !state.in_numeric_run {
            out.push_str(NUMBER_INDICATOR);
            state.in_numeric_run = true;
        }

        if state.in_numeric_run && is_numeric_separator(ch) {
            if let Some(glyph) = table.glyph_for(ch) {
                out.push_str(glyph);
            }
            if chars.peek().is_some_and(|next| next.is_ascii_digit()) {
                out.push_str(NUMBER_INDICATOR);
            } else {
                state.in_numeric_run = false;
            }
            continue;
        }

        if !is_digit && !is_numeric_separator(ch) {
            state.in_numeric_run = false;
        }

        if ch.is_uppercase() && !is_digit && ch != ' ' {
            out.push_str(CAPITAL_INDICATOR);
        }

        match table.glyph_for(fold_lower(ch)) {
            Some(glyph) => out.push_str(glyph),
            None => {
                trace!("No glyph for {:?}, passing through", ch);
                out.push(ch);
            }
        }
    }

    out
}
