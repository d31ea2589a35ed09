//! Runs the `stackvm-asm` binary

use std::fs;
use std::process::Command;

use tempfile::tempdir;

fn asm() -> Command {
    Command::new(env!("CARGO_BIN_EXE_stackvm-asm"))
}

fn words_to_bytes(words: &[i32]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_ne_bytes()).collect()
}

#[test]
fn test_output_flag_writes_artifact() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("prog.asm");
    let output = dir.path().join("prog");
    fs::write(&source, "# push five\niconst 5 print halt\n").unwrap();

    let result = asm().arg(&source).arg("-o").arg(&output).output().unwrap();

    assert!(result.status.success());
    assert!(result.stdout.is_empty());
    assert_eq!(fs::read(&output).unwrap(), words_to_bytes(&[9, 5, 14, 18]));
}

#[test]
fn test_stdout_without_output_flag() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("prog.asm");
    fs::write(&source, "gstore 7\nhalt").unwrap();

    let result = asm().arg(&source).output().unwrap();

    assert!(result.status.success());
    assert_eq!(result.stdout, words_to_bytes(&[13, 7, 18]));
}

#[test]
fn test_unknown_instruction_fails() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("prog.asm");
    let output = dir.path().join("prog");
    fs::write(&source, "iconst 1\nbogus\n").unwrap();

    let result = asm().arg(&source).arg("-o").arg(&output).output().unwrap();

    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Invalid Instruction \"bogus\""));
    assert!(!output.exists());
}

#[test]
fn test_missing_source_fails() {
    let dir = tempdir().unwrap();
    let result = asm().arg(dir.path().join("absent.asm")).output().unwrap();

    assert!(!result.status.success());
    assert!(result.stdout.is_empty());
}
