use codecat::{concatenate, ConcatBuilder, ConcatReport};
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;
#[test]
fn integration_default_run_in_current_dir() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("A.java"), "x").unwrap();
    fs::write(dir.path().join("B.txt"), "y").unwrap();
    let status = Command::new(env!("CARGO_BIN_EXE_codecat"))
        .current_dir(dir.path())
        .status()
        .unwrap();
    assert!(status.success());
    let out = fs::read_to_string(dir.path().join("codice_unificato.txt")).unwrap();
    assert_eq!(
        out,
        "\n\n// ---- Inizio: ./A.java ----\nx\n// ---- Fine: ./A.java ----\n"
    );
}
#[test]
fn integration_failure_exits_non_zero() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("Bad.java"), vec![0xc3, 0x28]).unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_codecat"))
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error:"));
}
#[test]
fn integration_rerun_overwrites() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/Main.java"), "class Main {}\n").unwrap();
    fs::write(dir.path().join("Util.java"), "class Util {}\n").unwrap();
    let output = dir.path().join("out.txt");
    let options = ConcatBuilder::new(dir.path()).output(&output).build();
    let first_report = concatenate(options.clone()).unwrap();
    let first = fs::read(&output).unwrap();
    let second_report = concatenate(options).unwrap();
    let second = fs::read(&output).unwrap();
    assert_eq!(first, second);
    assert_eq!(first_report.files, second_report.files);
    assert_eq!(first.len() as u64, first_report.bytes_written);
    assert_eq!(first_report.files.len(), 2);
}
#[test]
fn integration_output_is_not_read_back() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("notes.txt"), "n").unwrap();
    let output = dir.path().join("all.txt");
    let options = ConcatBuilder::new(dir.path())
        .extension(".txt")
        .output(&output)
        .build();
    let report = concatenate(options.clone()).unwrap();
    assert_eq!(report.files.len(), 1);
    let again = concatenate(options).unwrap();
    assert_eq!(again.files, report.files);
    let text = fs::read_to_string(&output).unwrap();
    assert_eq!(text.matches("Inizio").count(), 1);
}
#[test]
fn integration_json_report() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/Main.java"), "class Main {}").unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_codecat"))
        .current_dir(dir.path())
        .args(["--json", "-o", "out.txt"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let report: ConcatReport = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report.output, PathBuf::from("out.txt"));
    assert_eq!(report.files, vec![PathBuf::from("./src/Main.java")]);
    let written = fs::metadata(dir.path().join("out.txt")).unwrap().len();
    assert_eq!(report.bytes_written, written);
}
#[test]
fn integration_os_order_flag() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("A.java"), "a").unwrap();
    fs::write(dir.path().join("B.java"), "b").unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_codecat"))
        .current_dir(dir.path())
        .args(["--order", "os", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let mut report: ConcatReport = serde_json::from_slice(&output.stdout).unwrap();
    report.files.sort();
    assert_eq!(
        report.files,
        vec![PathBuf::from("./A.java"), PathBuf::from("./B.java")]
    );
}
#[cfg(not(feature = "logging"))]
#[test]
fn integration_verbose_without_logging_warns() {
    let dir = tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_codecat"))
        .current_dir(dir.path())
        .arg("--verbose")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--verbose has no effect"));
}
