//! Custom error types for the braille-es crate.

use thiserror::Error;

/// The primary error type for the fallible operations in this crate.
///
/// The codec itself (`encode`, `decode`, `can_encode`) is total and never
/// produces one of these; they come from the strict helpers, the cell
/// utilities and the input layer.
#[derive(Debug, Error)]
pub enum BrailleError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// The direction label is neither text-to-braille nor braille-to-text.
    #[error("Unknown conversion direction: {0:?}. Expected \"text-to-braille\" or \"braille-to-text\".")]
    UnknownDirection(String),

    /// The input is empty or contains only whitespace.
    #[error("Input text is empty")]
    EmptyInput,

    /// The input contains characters with no entry in the symbol table.
    #[error("Unsupported characters: {}", format_chars(.0))]
    UnsupportedCharacters(Vec<char>),

    /// A dot number outside 1..=6 was given for a six-dot cell.
    #[error("Invalid dot number {0}: six-dot cells use dots 1 through 6")]
    InvalidDot(u8),

    /// The character is not a six-dot Braille pattern (U+2800..=U+283F).
    #[error("Not a six-dot Braille cell: {0:?} (U+{code:04X})", code = code_point(.0))]
    NotABrailleCell(char),

    /// The encoding label is not recognised by encoding_rs.
    #[error("Unknown text encoding: {0}")]
    UnknownEncoding(String),

    /// The input bytes are not valid in the requested encoding.
    #[error("Input is not valid {encoding}")]
    MalformedInput { encoding: &'static str },
}

fn format_chars(chars: &[char]) -> String {
    chars
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn code_point(ch: &char) -> u32 {
    u32::from(*ch)
}

/// A convenience `Result` type alias using the crate's `BrailleError` type.
pub type Result<T> = std::result::Result<T, BrailleError>;
