//! Command-line front end: decode a modulus word array, derive the
//! Montgomery constant and print it as a source literal.

use std::{env, num::ParseIntError, process::ExitCode};

use pka_r2::{Modulus, Word, montgomery_r2};

const USAGE: &str = "usage: pka-r2 WORD...

Modulus as big-endian 32-bit hex words, most significant first, e.g.

    pka-r2 0xffffffff 0x00000000 0xffffffff 0xffffffff \\
           0xbce6faad 0xa7179e84 0xf3b9cac2 0xfc632551";

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    }

    let mut words = Vec::with_capacity(args.len());
    for arg in &args {
        match parse_word(arg) {
            Ok(word) => words.push(word),
            Err(_) => {
                eprintln!("pka-r2: invalid word {arg:?}: expected a 32-bit hex value");
                return ExitCode::FAILURE;
            }
        }
    }

    let modulus = match Modulus::from_be_words(&words) {
        Ok(modulus) => modulus,
        Err(err) => {
            eprintln!("pka-r2: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", montgomery_r2(&modulus));
    ExitCode::SUCCESS
}

/// Parse one 32-bit word of the modulus, with or without a `0x` prefix.
fn parse_word(arg: &str) -> Result<Word, ParseIntError> {
    let digits = arg
        .strip_prefix("0x")
        .or_else(|| arg.strip_prefix("0X"))
        .unwrap_or(arg);
    Word::from_str_radix(digits, 16)
}
