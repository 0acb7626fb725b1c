//! Data types passed between the codec and its callers.

use std::fmt;
use std::str::FromStr;

use super::error::BrailleError;

/// Which way a conversion goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    TextToBraille,
    BrailleToText,
}

impl Direction {
    /// The canonical label, as accepted by [`FromStr`].
    pub fn label(&self) -> &'static str {
        match self {
            Direction::TextToBraille => "text-to-braille",
            Direction::BrailleToText => "braille-to-text",
        }
    }
}

impl FromStr for Direction {
    type Err = BrailleError;

    /// Accepts the English labels and the Spanish ones used by existing
    /// clients (`texto-a-braille`, `braille-a-texto`), ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text-to-braille" | "texto-a-braille" => Ok(Direction::TextToBraille),
            "braille-to-text" | "braille-a-texto" => Ok(Direction::BrailleToText),
            _ => Err(BrailleError::UnknownDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One finished conversion: what went in, what came out, and which way.
///
/// Lengths are counted in `char`s, so a two-cell glyph counts as two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub direction: Direction,
    pub input: String,
    pub output: String,
}

impl Translation {
    pub fn input_len(&self) -> usize {
        self.input.chars().count()
    }

    pub fn output_len(&self) -> usize {
        self.output.chars().count()
    }
}
