use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn day1() -> Command {
    let mut cmd = Command::cargo_bin("day1").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn answers_from_stdin() {
    day1()
        .write_stdin("1\n2\n3\n\n4\n5\n\n6")
        .assert()
        .success()
        .stdout("9\n21\n");
}

#[test]
fn answers_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(include_bytes!("../data/test_input")).unwrap();

    day1()
        .arg(file.path())
        .assert()
        .success()
        .stdout("24000\n45000\n");
}

#[test]
fn dash_reads_stdin() {
    day1()
        .arg("-")
        .write_stdin("5\n5\n5\n")
        .assert()
        .success()
        .stdout("15\n15\n");
}

#[test]
fn bad_integer_fails_without_output() {
    day1()
        .write_stdin("1\nabc\n\n2")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("line 2 is not an integer"));
}

#[test]
fn empty_input_fails() {
    day1()
        .write_stdin("")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no groups in input"));
}

#[test]
fn missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();

    day1()
        .arg(dir.path().join("nope"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unable to read input file"));
}

#[test]
fn parsed_groups_hidden_by_default() {
    day1()
        .write_stdin("1\n\n2")
        .assert()
        .success()
        .stderr(predicate::str::contains("parsed groups").not());
}

#[test]
fn verbose_traces_parsed_groups() {
    day1()
        .arg("--verbose")
        .write_stdin("1\n\n2")
        .assert()
        .success()
        .stdout("2\n3\n")
        .stderr(predicate::str::contains("parsed groups"));
}

#[test]
fn verbose_and_quiet_conflict() {
    day1().args(["-v", "-q"]).assert().failure();
}
