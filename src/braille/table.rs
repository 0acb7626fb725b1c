//! The static symbol table shared by the encoder, decoder and validator.
//!
//! The forward direction maps one (lowercase) source character to its glyph,
//! a string of one or two Braille cells. The reverse direction is derived from
//! the forward table in two ordered phases:
//!
//! 1. **Bulk insert**: walk [`FORWARD`] in order, keeping the *first*
//!    character seen for every glyph. Glyphs equal to a mode indicator are
//!    skipped, since the decoder consumes those as control signals.
//! 2. **Overrides**: apply [`REVERSE_OVERRIDES`] in order, replacing whatever
//!    phase 1 left behind.
//!
//! ```text
//!   FORWARD ──bulk (first wins)──► reverse ──REVERSE_OVERRIDES──► final reverse
//! ```

use std::collections::HashMap;
use std::sync::OnceLock;

use log::debug;

/// Glyph placed before a letter that decodes as uppercase.
pub const CAPITAL_INDICATOR: &str = "⠨";

/// Glyph opening a numeric run: following `a`–`j` cells decode as `1`–`0`.
pub const NUMBER_INDICATOR: &str = "⠼";

/// The empty six-dot pattern (U+2800). Decodes as a space.
pub const BLANK_CELL: char = '\u{2800}';

/// Separators that may sit inside a numeric run without closing it.
pub const NUMERIC_SEPARATORS: [char; 3] = ['-', ',', '.'];

/// Longest glyph in the table, in cells.
pub const MAX_GLYPH_CELLS: usize = 2;

/// The literal forward table, in build order.
///
/// Digits share the glyphs of `a`–`j`; only numeric mode tells them apart.
#[rustfmt::skip]
pub const FORWARD: &[(char, &str)] = &[
    // Letters
    ('a', "⠁"), ('b', "⠃"), ('c', "⠉"), ('d', "⠙"), ('e', "⠑"),
    ('f', "⠋"), ('g', "⠛"), ('h', "⠓"), ('i', "⠊"), ('j', "⠚"),
    ('k', "⠅"), ('l', "⠇"), ('m', "⠍"), ('n', "⠝"), ('ñ', "⠻"),
    ('o', "⠕"), ('p', "⠏"), ('q', "⠟"), ('r', "⠗"), ('s', "⠎"),
    ('t', "⠞"), ('u', "⠥"), ('v', "⠧"), ('w', "⠺"), ('x', "⠭"),
    ('y', "⠽"), ('z', "⠵"),
    // Accented vowels
    ('á', "⠷"), ('é', "⠮"), ('í', "⠌"), ('ó', "⠬"), ('ú', "⠾"),
    ('ü', "⠳"),
    // Digits
    ('0', "⠚"), ('1', "⠁"), ('2', "⠃"), ('3', "⠉"), ('4', "⠙"),
    ('5', "⠑"), ('6', "⠋"), ('7', "⠛"), ('8', "⠓"), ('9', "⠊"),
    // Space
    (' ', " "),
    // Punctuation
    (',', "⠂"), ('.', "⠄"), ('?', "⠢"), ('¿', "⠢"), ('!', "⠖"),
    ('¡', "⠖"), (';', "⠆"), (':', "⠒"), ('-', "⠤"), ('(', "⠐⠣"),
    (')', "⠐⠜"),
    // Arithmetic and symbols
    ('+', "⠐⠖"), ('*', "⠡"), ('×', "⠡"), ('/', "⠸⠌"), ('÷', "⠸⠌"),
    ('=', "⠶"), ('<', "⠐⠅"), ('>', "⠨⠂"), ('%', "⠚⠴"), ('@', "⠈⠁"),
    ('#', "⠼"), ('$', "⠈⠎"), ('€', "⠈⠑"), ('&', "⠯"), ('_', "⠤⠤"),
    ('"', "⠦"), ('\'', "⠄"), ('[', "⠷"), (']', "⠾"), ('{', "⠐⠷"),
    ('}', "⠐⠾"), ('\\', "⠸⠡"), ('`', "⠸⠳"), ('~', "⠈⠱"), ('^', "⠈⠢"),
    ('°', "⠴"),
];

/// Reverse entries forced after the bulk insert, applied in order.
///
/// `⠢`, `⠖` and `⠡` decode as `¿`, `¡` and `×`. `⠌` must decode as `í`,
/// never as a bare division sign, and every multi-cell glyph must decode as
/// its own symbol rather than as two independent cells.
pub const REVERSE_OVERRIDES: &[(&str, char)] = &[
    ("⠢", '¿'),
    ("⠖", '¡'),
    ("⠡", '×'),
    ("⠌", 'í'),
    ("⠐⠣", '('),
    ("⠐⠜", ')'),
    ("⠐⠖", '+'),
    ("⠸⠌", '/'),
    ("⠐⠅", '<'),
    ("⠨⠂", '>'),
    ("⠚⠴", '%'),
    ("⠈⠁", '@'),
    ("⠈⠎", '$'),
    ("⠈⠑", '€'),
    ("⠤⠤", '_'),
    ("⠐⠷", '{'),
    ("⠐⠾", '}'),
    ("⠸⠡", '\\'),
    ("⠸⠳", '`'),
    ("⠈⠱", '~'),
    ("⠈⠢", '^'),
];

static TABLE: OnceLock<SymbolTable> = OnceLock::new();

/// Immutable bidirectional mapping between source characters and glyphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    forward: HashMap<char, &'static str>,
    reverse: HashMap<&'static str, char>,
}

impl SymbolTable {
    /// Builds a fresh table from [`FORWARD`] and [`REVERSE_OVERRIDES`].
    ///
    /// Most callers want [`SymbolTable::global`] instead.
    pub fn build() -> Self {
        let mut forward = HashMap::with_capacity(FORWARD.len());
        let mut reverse = HashMap::with_capacity(FORWARD.len());

        for &(ch, glyph) in FORWARD {
            forward.insert(ch, glyph);
            if is_indicator(glyph) {
                continue;
            }
            reverse.entry(glyph).or_insert(ch);
        }

        for &(glyph, ch) in REVERSE_OVERRIDES {
            reverse.insert(glyph, ch);
        }

        debug!(
            "Symbol table built: {} forward entries, {} reverse entries",
            forward.len(),
            reverse.len()
        );

        Self { forward, reverse }
    }

    /// The process-wide table, built on first use.
    pub fn global() -> &'static SymbolTable {
        TABLE.get_or_init(SymbolTable::build)
    }

    /// Glyph for an already case-folded source character.
    pub fn glyph_for(&self, ch: char) -> Option<&'static str> {
        self.forward.get(&ch).copied()
    }

    /// Source character for a complete glyph (one or two cells).
    pub fn char_for(&self, glyph: &str) -> Option<char> {
        self.reverse.get(glyph).copied()
    }

    pub fn contains_char(&self, ch: char) -> bool {
        self.forward.contains_key(&ch)
    }

    pub fn forward_len(&self) -> usize {
        self.forward.len()
    }

    pub fn reverse_len(&self) -> usize {
        self.reverse.len()
    }

    /// Iterates over every `(glyph, char)` pair of the reverse mapping.
    pub fn reverse_entries(&self) -> impl Iterator<Item = (&'static str, char)> + '_ {
        self.reverse.iter().map(|(glyph, ch)| (*glyph, *ch))
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::build()
    }
}

/// Returns true when `glyph` is one of the two mode indicators.
pub fn is_indicator(glyph: &str) -> bool {
    glyph == CAPITAL_INDICATOR || glyph == NUMBER_INDICATOR
}

pub fn is_numeric_separator(ch: char) -> bool {
    NUMERIC_SEPARATORS.contains(&ch)
}
