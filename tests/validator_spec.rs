use braille_es::{
    can_encode, cell_from_dots, check, dots_of, encode_strict, is_valid_braille,
    unsupported_chars, BrailleError,
};

const CELL_FIXTURES: &[(&[u8], char)] = &[
    (&[], '⠀'),
    (&[1], '⠁'),
    (&[1, 2], '⠃'),
    (&[4, 6], '⠨'),
    (&[3, 4, 5, 6], '⠼'),
    (&[1, 2, 3, 4, 5, 6], '⠿'),
];

#[test]
fn can_encode_rules() {
    assert!(!can_encode(""), "empty input is a negative case");
    assert!(can_encode("abc"));
    assert!(can_encode("abc#"));
    assert!(can_encode("ÁRBOL Ñandú 12,5%"));
    assert!(!can_encode("a☃"));
    assert!(!can_encode("\t"));
}

#[test]
fn unsupported_chars_are_distinct_and_ordered() {
    assert_eq!(unsupported_chars("hola"), Vec::<char>::new());
    assert_eq!(unsupported_chars("a☃b☃Ωω"), vec!['☃', 'Ω', 'ω']);
}

#[test]
fn check_reports_empty_and_unsupported() {
    assert!(matches!(check(""), Err(BrailleError::EmptyInput)));
    assert!(matches!(check("   "), Err(BrailleError::EmptyInput)));
    match check("hola☃ ☃") {
        Err(BrailleError::UnsupportedCharacters(chars)) => assert_eq!(chars, vec!['☃']),
        other => panic!("expected UnsupportedCharacters, got {:?}", other),
    }
    assert!(check("Hola").is_ok());
}

#[test]
fn unsupported_error_lists_characters() {
    let err = check("a☃Ω").expect_err("should reject");
    assert_eq!(err.to_string(), "Unsupported characters: ☃, Ω");
}

#[test]
fn strict_encoding() {
    assert_eq!(encode_strict("Hola").expect("encodable"), "⠨⠓⠕⠇⠁");
    assert!(encode_strict("☃").is_err());
}

#[test]
fn braille_input_detection() {
    assert!(is_valid_braille("⠨⠓⠕⠇⠁ ⠼⠁"));
    assert!(is_valid_braille("⠀"));
    assert!(!is_valid_braille("hola"));
    assert!(!is_valid_braille(""));
    assert!(!is_valid_braille("⣿"), "eight-dot patterns are rejected");
}

#[test]
fn cells_from_dots() {
    for (dots, cell) in CELL_FIXTURES {
        assert_eq!(cell_from_dots(dots).expect("valid dots"), *cell, "dots {:?}", dots);
        assert_eq!(dots_of(*cell).expect("six-dot cell"), dots.to_vec());
    }
    assert_eq!(cell_from_dots(&[1, 1]).expect("valid dots"), '⠁');
    assert_eq!(cell_from_dots(&[2, 1]).expect("valid dots"), '⠃');
}

#[test]
fn every_dot_combination_is_a_six_dot_cell() {
    for mask in 0u8..64 {
        let dots: Vec<u8> = (1u8..=6).filter(|dot| mask & (1 << (dot - 1)) != 0).collect();
        let cell = cell_from_dots(&dots).expect("valid dots");
        assert_eq!(cell as u32, 0x2800 + u32::from(mask), "dots {:?}", dots);
        assert_eq!(dots_of(cell).expect("six-dot cell"), dots);
    }
}

#[test]
fn invalid_cells_and_dots() {
    assert!(matches!(cell_from_dots(&[7]), Err(BrailleError::InvalidDot(7))));
    assert!(matches!(cell_from_dots(&[1, 0]), Err(BrailleError::InvalidDot(0))));
    assert!(matches!(dots_of('a'), Err(BrailleError::NotABrailleCell('a'))));
    assert!(matches!(dots_of('⣿'), Err(BrailleError::NotABrailleCell('⣿'))));
}
