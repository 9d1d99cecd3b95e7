//! Runs the `intscale` binary.

use std::process::Command;

fn intscale() -> Command {
    Command::new(env!("CARGO_BIN_EXE_intscale"))
}

#[test]
fn test_cli_runs_selected_methods() {
    let output = intscale()
        .args([
            "3",
            "--in-size",
            "8x6",
            "--out-size",
            "20x15",
            "--method",
            "fixed-point",
            "--method",
            "division",
            "--verify",
        ])
        .env("RUST_LOG", "off")
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Iterations: 3"));
    assert!(stdout.contains("fixed-point"));
    assert!(stdout.contains("division"));
    assert!(!stdout.contains("hoisted-division"));
}

#[test]
fn test_cli_dumps_into_directory() {
    let dir = tempfile::tempdir().unwrap();
    let output = intscale()
        .args(["1", "--in-size", "4x4", "--out-size", "6x6", "-m", "tables"])
        .arg("--dump-dir")
        .arg(dir.path())
        .env("RUST_LOG", "off")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(dir.path().join("image_in.ppm").exists());
    assert!(dir.path().join("tables.ppm").exists());
}

#[test]
fn test_cli_rejects_bad_size() {
    let output = intscale()
        .args(["1", "--in-size", "640", "--out-size", "10x10"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("WIDTHxHEIGHT"));
}

#[test]
fn test_cli_rejects_zero_extent() {
    let output = intscale()
        .args(["1", "--in-size", "4x4", "--out-size", "0x10"])
        .env("RUST_LOG", "off")
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("non-zero"));
}
