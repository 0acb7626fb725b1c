//! # braille-es
//!
//! Bidirectional transliteration between Spanish text and six-dot Braille,
//! written as Unicode Braille Pattern characters.
//!
//! Handles capital and number indicators, accented vowels, `ñ`, punctuation
//! and common symbols. Contractions (Grade 2) are not supported.
//!
//! ```
//! use braille_es::{decode, encode};
//!
//! let cells = encode("Hola 12");
//! assert_eq!(cells, "⠨⠓⠕⠇⠁ ⠼⠁⠃");
//! assert_eq!(decode(&cells), "Hola 12");
//! ```
pub mod braille;

// Re-export the main types for convenience
pub use braille::{
    can_encode,
    cell::{cell_from_dots, dots_of, is_braille_cell},
    decode,
    encode,
    input::{read_input, read_input_file},
    table::{CAPITAL_INDICATOR, NUMBER_INDICATOR},
    translator::translate,
    types::models::{Direction, Translation},
    validator::{check, encode_strict, is_valid_braille, unsupported_chars},
    BrailleError,
    Result,
    SymbolTable,
};
