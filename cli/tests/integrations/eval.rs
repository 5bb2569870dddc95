use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_eval_table() {
    let mut cmd = Command::cargo_bin("webcalc").unwrap();
    cmd.args(["eval", "add(2, 3); factorial(5)"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("add(2, 3)"))
        .stdout(predicate::str::contains("5"))
        .stdout(predicate::str::contains("factorial(5)"))
        .stdout(predicate::str::contains("120"));
}

#[test]
fn test_eval_raw_multiple_expressions() {
    let mut cmd = Command::cargo_bin("webcalc").unwrap();
    cmd.args(["eval", "--raw", "factorial(0)", "factorial(1)\nadd(-7, 7)"]);

    cmd.assert().success().stdout("1\n1\n0\n");
}

#[test]
fn test_eval_unknown_function() {
    let mut cmd = Command::cargo_bin("webcalc").unwrap();
    cmd.args(["eval", "mul(2, 3)"]);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown function 'mul'"));
}

#[test]
fn test_eval_wrong_arity() {
    let mut cmd = Command::cargo_bin("webcalc").unwrap();
    cmd.args(["eval", "add(1)"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("add() takes 2 arguments, got 1"));
}

#[test]
fn test_eval_requires_expression() {
    let mut cmd = Command::cargo_bin("webcalc").unwrap();
    cmd.arg("eval");

    cmd.assert().failure();
}
