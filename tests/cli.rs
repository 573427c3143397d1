//! End-to-end checks of the `pka-r2` binary's output contract.

use std::process::Command;

fn pka_r2(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_pka-r2"))
        .args(args)
        .output()
        .expect("binary runs")
}

#[test]
fn prints_the_constant_for_the_sample_modulus() {
    let output = pka_r2(&[
        "0xffffffff", "0x00000000", "0xffffffff", "0xffffffff", "0xbce6faad", "0xa7179e84",
        "0xf3b9cac2", "0xfc632551",
    ]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "R2: [u32; 8] = [0x1C1F0858, 0xD0B168A4, 0x619076AB, 0x51D16BDB, \
         0xDF119F1B, 0x30A9CDC7, 0x5706ACB0, 0x3AF42ABB];\n"
    );
}

#[test]
fn accepts_bare_hex_words() {
    let output = pka_r2(&["d"]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "R2: [u32; 1] = [0x30000000];\n"
    );
}

#[test]
fn no_arguments_prints_usage_and_fails() {
    let output = pka_r2(&[]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("usage:"));
}

#[test]
fn rejects_a_malformed_word() {
    let output = pka_r2(&["0xffffffff", "0xnope"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid word"));
}

#[test]
fn rejects_a_zero_modulus() {
    let output = pka_r2(&["0x00000000", "0x00000000"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("positive"));
}
