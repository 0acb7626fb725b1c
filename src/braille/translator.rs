//! Direction-flag dispatch for callers that hold a string and a label.

use super::decoder::decode;
use super::encoder::encode;
use super::types::models::{Direction, Translation};

/// Converts `text` in the given direction.
pub fn translate(text: &str, direction: Direction) -> String {
    match direction {
        Direction::TextToBraille => encode(text),
        Direction::BrailleToText => decode(text),
    }
}

impl Translation {
    /// Runs the conversion and keeps input and output together.
    pub fn run(text: &str, direction: Direction) -> Self {
        Self {
            direction,
            input: text.to_owned(),
            output: translate(text, direction),
        }
    }
}
