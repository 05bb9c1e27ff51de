use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn maths_parser() -> Command {
    Command::cargo_bin("maths-parser").expect("binary exists")
}

#[test]
fn demonstration_expression_by_default() {
    maths_parser()
        .assert()
        .success()
        .stdout("0.0625\n");
}

#[test]
fn evaluates_each_argument() {
    maths_parser()
        .args(["2+3*4", "(2+3)*4", "1.5+1.5", "1/0"])
        .assert()
        .success()
        .stdout("14\n20\n3\ninf\n");
}

#[test]
fn reports_failures_and_keeps_going() {
    maths_parser()
        .args(["2+2)", "5-3"])
        .assert()
        .failure()
        .stdout("2\n")
        .stderr(predicate::str::contains("ERROR: 2+2)"));
}

#[test]
fn unknown_character_is_reported() {
    maths_parser()
        .arg("2+@")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid character: '@'"));
}

#[test]
fn unary_minus_mode() {
    maths_parser()
        .args(["--", "-2^2"])
        .assert()
        .success()
        .stdout("-4\n");

    maths_parser()
        .args(["--unary-minus", "operand", "--", "-2^2"])
        .assert()
        .success()
        .stdout("4\n");
}

#[test]
fn power_binding_mode() {
    maths_parser()
        .arg("2*3^2")
        .assert()
        .success()
        .stdout("18\n");

    maths_parser()
        .args(["--power", "factor", "2*3^2"])
        .assert()
        .success()
        .stdout("36\n");
}

#[test]
fn invalid_options_are_rejected() {
    maths_parser()
        .args(["--max-depth", "0", "1+1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid options"));

    maths_parser()
        .args(["--unary-minus", "sideways", "1+1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown unary minus mode"));
}

#[test]
fn reads_expressions_from_file() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("input.txt");
    fs::write(&path, "1 + 1\n\n  2 ^ 10  \n(1\n").expect("write input");

    maths_parser()
        .arg("--file")
        .arg(&path)
        .arg("3 * 3")
        .assert()
        .failure()
        .stdout("2\n1024\n9\n")
        .stderr(predicate::str::contains("Parenthesis was not closed"));
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempdir().expect("create temp dir");

    maths_parser()
        .arg("--file")
        .arg(dir.path().join("missing.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}
