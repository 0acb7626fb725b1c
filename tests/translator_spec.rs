use braille_es::{read_input, read_input_file, translate, BrailleError, Direction, Translation};
use std::fs;

#[test]
fn direction_labels() {
    let cases = [
        ("text-to-braille", Direction::TextToBraille),
        ("braille-to-text", Direction::BrailleToText),
        ("texto-a-braille", Direction::TextToBraille),
        ("BRAILLE-A-TEXTO", Direction::BrailleToText),
        (" text-to-braille ", Direction::TextToBraille),
    ];
    for (label, expected) in cases {
        assert_eq!(label.parse::<Direction>().expect("known label"), expected, "{:?}", label);
    }
    assert_eq!(Direction::TextToBraille.to_string(), "text-to-braille");
    assert_eq!(Direction::BrailleToText.to_string(), "braille-to-text");
}

#[test]
fn unknown_direction_is_rejected() {
    match "sideways".parse::<Direction>() {
        Err(BrailleError::UnknownDirection(label)) => assert_eq!(label, "sideways"),
        other => panic!("expected UnknownDirection, got {:?}", other),
    }
}

#[test]
fn translate_dispatches_on_direction() {
    assert_eq!(translate("hola", Direction::TextToBraille), "⠓⠕⠇⠁");
    assert_eq!(translate("⠓⠕⠇⠁", Direction::BrailleToText), "hola");
    assert_eq!(translate("", Direction::BrailleToText), "");
}

#[test]
fn translation_counts_chars() {
    let t = Translation::run("Hola 1", Direction::TextToBraille);
    assert_eq!(t.output, "⠨⠓⠕⠇⠁ ⠼⠁");
    assert_eq!(t.input_len(), 6);
    assert_eq!(t.output_len(), 8);
    assert_eq!(t.direction, Direction::TextToBraille);
}

#[test]
fn input_decoding() {
    assert_eq!(read_input(b"hola\r\n", None).expect("utf-8"), "hola");
    assert_eq!(read_input(&[0x61, 0xF1, 0x6F], Some("latin1")).expect("latin1"), "año");
    assert_eq!(
        read_input(b"\xEF\xBB\xBFhola", Some("windows-1252")).expect("bom"),
        "hola",
        "BOM wins over the label"
    );
    assert!(matches!(
        read_input(&[0xF1], None),
        Err(BrailleError::MalformedInput { encoding: "UTF-8" })
    ));
    assert!(matches!(
        read_input(b"hola", Some("klingon")),
        Err(BrailleError::UnknownEncoding(_))
    ));
}

#[test]
fn input_from_file() {
    let path = std::env::temp_dir().join(format!("braille-es-input-{}.txt", std::process::id()));
    fs::write(&path, [0x4E, 0x69, 0xF1, 0x6F, 0x0A]).expect("write fixture");
    let text = read_input_file(&path, Some("iso-8859-1"));
    let _ = fs::remove_file(&path);
    assert_eq!(text.expect("readable"), "Niño");

    assert!(matches!(
        read_input_file("/nonexistent/braille-es/input.txt", None),
        Err(BrailleError::Io(_))
    ));
}
