//! Runs the `toy-analyzer` binary and checks its exit codes and output.

use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

fn analyzer() -> Command {
    Command::new(env!("CARGO_BIN_EXE_toy-analyzer"))
}

fn run_with_stdin(args: &[&str], input: &str) -> Output {
    let mut child = analyzer()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("binary should start");

    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(input.as_bytes())
        .expect("stdin should accept the program");

    child.wait_with_output().expect("binary should finish")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn diagnostic_lines(output: &Output) -> usize {
    stdout(output)
        .lines()
        .filter(|line| line.starts_with("Error at position"))
        .count()
}

#[test]
fn test_clean_program_exits_zero() {
    let output = analyzer().arg("tests/fixtures/app.toy").output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.starts_with("Tokens:\n"));
    assert!(out.contains("(ReservedWord, \"Begin\", 0)"));
    assert!(out.contains("No errors found"));
}

#[test]
fn test_diagnostics_exit_one() {
    let output = analyzer().arg("tests/fixtures/broken.toy").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Errors found:"));
    assert_eq!(diagnostic_lines(&output), 10);
}

#[test]
fn test_bind_on_sight_changes_diagnostic_count() {
    let default = analyzer().arg("tests/fixtures/broken.toy").output().unwrap();
    let on_sight = analyzer()
        .args(["--bind-on-sight", "tests/fixtures/broken.toy"])
        .output()
        .unwrap();

    assert_eq!(on_sight.status.code(), Some(1));
    assert_eq!(diagnostic_lines(&default), 10);
    assert_eq!(diagnostic_lines(&on_sight), 7);
}

#[test]
fn test_report_renders_excerpts() {
    let output = analyzer()
        .args(["--report", "tests/fixtures/broken.toy"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("Error: UndefinedIdentifier"));
    assert!(out.contains("-> broken.toy"));
    assert_eq!(diagnostic_lines(&output), 0);
}

#[test]
fn test_lexical_error_exits_two() {
    let output = run_with_stdin(&[], "Begin\nvar x = 5;\nEnd");

    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.contains("Error: UnrecognisedCharacter"));
    assert!(err.contains("-> stdin"));
    assert!(!stdout(&output).contains("Tokens:"));
}

#[test]
fn test_empty_input_exits_two() {
    let output = run_with_stdin(&[], "   \n");

    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.starts_with("Error: EmptyTokenStream\n"));
}

#[test]
fn test_missing_file_exits_three() {
    let output = analyzer().arg("tests/fixtures/does-not-exist.toy").output().unwrap();

    assert_eq!(output.status.code(), Some(3));
    assert!(stderr(&output).starts_with("Error:"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_custom_boundaries() {
    let output = run_with_stdin(&["--start", "End", "--end", "Begin"], "End Begin");

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("No errors found"));
}
