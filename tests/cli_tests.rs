//! Binary end-to-end tests: exit codes and the stdout/stderr split.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn write_program(source: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".lol")
        .tempfile()
        .expect("create temp program");
    file.write_all(source.as_bytes()).expect("write program");
    file
}

#[test]
fn passing_program_prints_to_stdout_and_exits_zero() {
    let program = write_program("HAI\nVISIBLE \"hello\"\nKTHXBYE");
    Command::cargo_bin("lolrus")
        .unwrap()
        .arg(program.path())
        .assert()
        .success()
        .stdout("hello \n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn failing_program_reports_on_stderr_and_exits_one() {
    let program = write_program("HAI\nVISIBLE \"hello\"");
    Command::cargo_bin("lolrus")
        .unwrap()
        .arg(program.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Error 02: Program has no KTHXBYE code delimiter.",
        ));
}

#[test]
fn runtime_error_splits_output_and_error_line() {
    let program = write_program("HAI\nVISIBLE \"first\"\nVISIBLE ghost\nKTHXBYE");
    Command::cargo_bin("lolrus")
        .unwrap()
        .arg(program.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("first"))
        .stderr(predicate::str::contains("Error 09"));
}

#[test]
fn lexeme_table_renders_on_request() {
    let program = write_program("HAI\nI HAS A x ITZ 5\nKTHXBYE");
    Command::cargo_bin("lolrus")
        .unwrap()
        .arg(program.path())
        .arg("--lexemes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Variable Declaration"))
        .stdout(predicate::str::contains("Code Delimiter"));
}

#[test]
fn symbol_table_renders_on_request() {
    let program = write_program("HAI\nI HAS A x ITZ 5\nKTHXBYE");
    Command::cargo_bin("lolrus")
        .unwrap()
        .arg(program.path())
        .arg("--symbols")
        .assert()
        .success()
        .stdout(predicate::str::contains("IT"))
        .stdout(predicate::str::contains("NUMBR"));
}

#[test]
fn json_report_has_all_three_artifacts() {
    let program = write_program("HAI\nVISIBLE \"hi\"\nKTHXBYE");
    let assert = Command::cargo_bin("lolrus")
        .unwrap()
        .arg(program.path())
        .arg("--json")
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let report: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(report["output"], "hi \n");
    assert_eq!(report["lexemes"][0]["text"], "HAI");
    assert_eq!(report["symbols"][0]["identifier"], "IT");
}

#[test]
fn gimmeh_reads_stdin() {
    let program = write_program("HAI\nI HAS A x\nGIMMEH x\nVISIBLE x\nKTHXBYE");
    Command::cargo_bin("lolrus")
        .unwrap()
        .arg(program.path())
        .write_stdin("42\n")
        .assert()
        .success()
        .stdout("42 \n");
}

#[test]
fn missing_file_is_a_driver_error() {
    Command::cargo_bin("lolrus")
        .unwrap()
        .arg("no-such-file.lol")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot read"));
}
