//! Six-dot Braille cells as Unicode Braille Patterns.
//!
//! A cell is `U+2800` plus one bit per raised dot:
//!
//! ```text
//!   1 ● ● 4      dot:  1    2    3    4    5    6
//!   2 ● ● 5      bit:  0x01 0x02 0x04 0x08 0x10 0x20
//!   3 ● ● 6
//! ```

use super::table::BLANK_CELL;
use super::types::error::{BrailleError, Result};

const DOT_BITS: [u32; 6] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20];

/// Highest code point of the six-dot range (all dots raised).
const LAST_SIX_DOT_CELL: char = '\u{283F}';

/// Builds the cell with the given dots raised.
///
/// Repeated dots are ignored. An empty slice gives the blank cell.
///
/// # Errors
/// Returns [`BrailleError::InvalidDot`] for a dot outside 1..=6.
pub fn cell_from_dots(dots: &[u8]) -> Result<char> {
    let mut bits = 0u32;
    for &dot in dots {
        let bit = match dot {
            1..=6 => DOT_BITS[usize::from(dot - 1)],
            _ => return Err(BrailleError::InvalidDot(dot)),
        };
        bits |= bit;
    }
    Ok(char::from_u32(BLANK_CELL as u32 + bits).unwrap_or(BLANK_CELL))
}

/// Raised dots of a cell, in ascending order.
///
/// # Errors
/// Returns [`BrailleError::NotABrailleCell`] for anything outside
/// U+2800..=U+283F, including eight-dot patterns.
pub fn dots_of(cell: char) -> Result<Vec<u8>> {
    if !is_braille_cell(cell) {
        return Err(BrailleError::NotABrailleCell(cell));
    }
    let bits = cell as u32 - BLANK_CELL as u32;
    Ok((1u8..=6)
        .filter(|dot| bits & DOT_BITS[usize::from(dot - 1)] != 0)
        .collect())
}

pub fn is_braille_cell(ch: char) -> bool {
    (BLANK_CELL..=LAST_SIX_DOT_CELL).contains(&ch)
}
