//! Reading conversion input from bytes in a caller-chosen text encoding.

use std::path::Path;

use encoding_rs::{Encoding, UTF_8};
use log::{debug, info};

use super::types::error::{BrailleError, Result};

/// Decodes `bytes` as text.
///
/// `label` is any WHATWG encoding label (`"utf-8"`, `"latin1"`,
/// `"windows-1252"`, ...); `None` means UTF-8. A byte-order mark overrides
/// the label. Trailing line breaks are removed.
///
/// # Errors
/// - [`BrailleError::UnknownEncoding`] if the label is not recognised
/// - [`BrailleError::MalformedInput`] if the bytes are invalid for the encoding
pub fn read_input(bytes: &[u8], label: Option<&str>) -> Result<String> {
    let encoding = match label {
        Some(label) => Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| BrailleError::UnknownEncoding(label.to_string()))?,
        None => UTF_8,
    };

    let (text, used, had_errors) = encoding.decode(bytes);
    debug!("Decoded {} bytes as {}", bytes.len(), used.name());
    if had_errors {
        return Err(BrailleError::MalformedInput {
            encoding: used.name(),
        });
    }

    Ok(text.trim_end_matches(|c| c == '\r' || c == '\n').to_owned())
}

/// Reads and decodes a whole file. See [`read_input`].
pub fn read_input_file(path: impl AsRef<Path>, label: Option<&str>) -> Result<String> {
    let path = path.as_ref();
    info!("Reading input from {}", path.display());
    let bytes = std::fs::read(path)?;
    read_input(&bytes, label)
}
