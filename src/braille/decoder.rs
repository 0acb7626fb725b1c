//! Braille → text.
//!
//! The decoder walks the input one cell at a time. At each position it first
//! tries the two-cell window against the reverse table, so that glyphs such as
//! `⠐⠣` come back as `(` instead of an unknown `⠐` followed by `⠣`. Only when
//! that misses are the single-cell rules applied:
//!
//! | cell                          | effect                                   |
//! |-------------------------------|------------------------------------------|
//! | capital indicator `⠨`         | next letter is uppercase                 |
//! | number indicator `⠼`          | enter numeric mode                       |
//! | `⠤` `⠂` `⠄`                   | emit `-` `,` `.`, numeric mode untouched |
//! | space or blank cell `⠀`       | emit a space, leave numeric mode         |
//! | any other mapped cell         | emit letter, digit or uppercase letter   |
//! | unmapped                      | copied through                           |

use log::trace;

use super::table::{
    is_numeric_separator, SymbolTable, BLANK_CELL, CAPITAL_INDICATOR, MAX_GLYPH_CELLS,
    NUMBER_INDICATOR,
};
use super::utils::{fold_upper, letter_to_digit};

/// Per-call decoder state. Both flags start cleared.
#[derive(Debug, Default)]
struct DecodeState {
    pending_capital: bool,
    in_numeric_mode: bool,
}

impl DecodeState {
    /// Appends a decoded character, applying numeric mode or a pending capital.
    fn emit(&mut self, ch: char, out: &mut String) {
        if self.in_numeric_mode {
            out.push(letter_to_digit(ch));
        } else if self.pending_capital {
            out.push(fold_upper(ch));
            self.pending_capital = false;
        } else {
            out.push(ch);
        }
    }
}

/// Decodes Braille cells to Spanish text using the global symbol table.
///
/// Never fails: cells without a mapping are copied through unchanged, and a
/// mode flag left set at the end of input is simply dropped.
pub fn decode(braille: &str) -> String {
    decode_with(SymbolTable::global(), braille)
}

/// Decodes `braille` against an explicit table.
pub fn decode_with(table: &SymbolTable, braille: &str) -> String {
    let cells: Vec<char> = braille.chars().collect();
    let mut out = String::with_capacity(cells.len());
    let mut state = DecodeState::default();
    let mut window = String::with_capacity(MAX_GLYPH_CELLS * 4);
    let mut pos = 0;

    while pos < cells.len() {
        if pos + MAX_GLYPH_CELLS <= cells.len() {
            window.clear();
            window.extend(&cells[pos..pos + MAX_GLYPH_CELLS]);
            if let Some(ch) = table.char_for(&window) {
                state.emit(ch, &mut out);
                pos += MAX_GLYPH_CELLS;
                continue;
            }
        }

        let cell = cells[pos];
        pos += 1;

        let mut buf = [0u8; 4];
        let unit: &str = cell.encode_utf8(&mut buf);

        if unit == CAPITAL_INDICATOR {
            state.pending_capital = true;
            continue;
        }
        if unit == NUMBER_INDICATOR {
            state.in_numeric_mode = true;
            continue;
        }
        if cell == ' ' || cell == BLANK_CELL {
            out.push(' ');
            state.in_numeric_mode = false;
            state.pending_capital = false;
            continue;
        }

        match table.char_for(unit) {
            Some(ch) if is_numeric_separator(ch) => out.push(ch),
            Some(ch) => state.emit(ch, &mut out),
            None => {
                trace!("No character for cell {:?}, passing through", cell);
                out.push(cell);
            }
        }
    }

    out
}
