//! Spanish ⇄ six-dot Braille codec.
//!
//! # Module Organization
//!
//! - [`table`]: the static symbol table and the two mode indicators
//! - [`encoder`]: text → Braille, tracking numeric runs and capitals
//! - [`decoder`]: Braille → text, inverting the encoder's mode logic
//! - [`validator`]: whether input is fully representable
//! - [`cell`]: dot numbers ⇄ Unicode Braille Patterns
//! - [`translator`]: dispatch on a [`Direction`](types::models::Direction)
//! - [`input`]: decoding input bytes with `encoding_rs`
//!
//! ```text
//! caller ─► encoder | decoder ─► table (read-only) ─► String
//!                    validator ─┘
//! ```

pub mod cell;
pub mod decoder;
pub mod encoder;
pub mod input;
pub mod table;
pub mod translator;
pub mod types;
pub mod validator;
mod utils;

pub use decoder::decode;
pub use encoder::encode;
pub use table::SymbolTable;
pub use types::error::{BrailleError, Result};
pub use validator::can_encode;
