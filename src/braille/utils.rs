//! Small character helpers shared by the encoder, decoder and validator.

/// Lowercases `ch` when that yields exactly one character.
///
/// Characters whose lowercase form expands (e.g. `İ`) are returned unchanged.
pub fn fold_lower(ch: char) -> char {
    single(ch.to_lowercase()).unwrap_or(ch)
}

/// Uppercases `ch` when that yields exactly one character.
///
/// `ß` would expand to `SS`, so it comes back as-is.
pub fn fold_upper(ch: char) -> char {
    single(ch.to_uppercase()).unwrap_or(ch)
}

fn single(mut chars: impl Iterator<Item = char>) -> Option<char> {
    let first = chars.next()?;
    match chars.next() {
        Some(_) => None,
        None => Some(first),
    }
}

/// Maps the letters `a`–`j` to the digits they stand for in numeric mode.
///
/// Anything else is returned unchanged.
pub fn letter_to_digit(letter: char) -> char {
    match letter {
        'a' => '1',
        'b' => '2',
        'c' => '3',
        'd' => '4',
        'e' => '5',
        'f' => '6',
        'g' => '7',
        'h' => '8',
        'i' => '9',
        'j' => '0',
        other => other,
    }
}
