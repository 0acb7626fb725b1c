use braille_es::{read_input_file, Direction, Translation};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        let program = args.first().map_or("braille-es", String::as_str);
        eprintln!(
            "Usage: {} <text-to-braille|braille-to-text> [--file <PATH>] [--encoding <LABEL>] [TEXT...]",
            program
        );
        std::process::exit(1);
    }

    let direction: Direction = match args[1].parse() {
        Ok(direction) => direction,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    };

    let mut file: Option<&str> = None;
    let mut encoding: Option<&str> = None;
    let mut words: Vec<&str> = Vec::new();
    let mut rest = args[2..].iter();
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--file" | "--encoding" => {
                let Some(value) = rest.next() else {
                    eprintln!("ERROR: {} flag requires an argument.", arg);
                    std::process::exit(1);
                };
                if arg == "--file" {
                    file = Some(value.as_str());
                } else {
                    encoding = Some(value.as_str());
                }
            }
            word => words.push(word),
        }
    }

    let text = match file {
        Some(path) => match read_input_file(path, encoding) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("ERROR: Failed to read {}", path);
                eprintln!("  {}", e);
                std::process::exit(1);
            }
        },
        None => words.join(" "),
    };

    if text.is_empty() {
        eprintln!("ERROR: No input text given.");
        std::process::exit(1);
    }

    let translation = Translation::run(&text, direction);
    println!("{}", translation.output);
    eprintln!(
        "{}: {} chars -> {} chars",
        translation.direction,
        translation.input_len(),
        translation.output_len()
    );
}
