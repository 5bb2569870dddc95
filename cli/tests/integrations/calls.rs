use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_add() {
    let mut cmd = Command::cargo_bin("webcalc").unwrap();
    cmd.args(["add", "2", "3"]);

    cmd.assert().success().stdout("add(2, 3) = 5\n");
}

#[test]
fn test_add_negative_numbers() {
    let mut cmd = Command::cargo_bin("webcalc").unwrap();
    cmd.args(["add", "-7", "7", "--raw"]);

    cmd.assert().success().stdout("0\n");
}

#[test]
fn test_add_wraps() {
    let mut cmd = Command::cargo_bin("webcalc").unwrap();
    cmd.args(["add", "2147483647", "1", "-r"]);

    cmd.assert().success().stdout("-2147483648\n");
}

#[test]
fn test_factorial() {
    let mut cmd = Command::cargo_bin("webcalc").unwrap();
    cmd.args(["factorial", "10"]);

    cmd.assert()
        .success()
        .stdout("factorial(10) = 3628800\n");
}

#[test]
fn test_factorial_negative_is_zero() {
    let mut cmd = Command::cargo_bin("webcalc").unwrap();
    cmd.args(["factorial", "-5", "--raw"]);

    cmd.assert().success().stdout("0\n");
}

#[test]
fn test_add_rejects_out_of_range_argument() {
    let mut cmd = Command::cargo_bin("webcalc").unwrap();
    cmd.args(["add", "3000000000", "1"]);

    cmd.assert().failure().stderr(predicate::str::contains("3000000000"));
}

#[test]
fn test_repeated_runs_give_identical_output() {
    let run = || {
        Command::cargo_bin("webcalc")
            .unwrap()
            .args(["eval", "--raw", "add(2147483647, 1); factorial(13); factorial(-2)"])
            .output()
            .unwrap()
    };

    let first = run();
    let second = run();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(
        String::from_utf8(first.stdout).unwrap(),
        "-2147483648\n1932053504\n0\n"
    );
}

#[test]
fn test_factorial_of_largest_input_is_zero() {
    let mut cmd = Command::cargo_bin("webcalc").unwrap();
    cmd.args(["factorial", "2147483647", "--raw"])
        .timeout(std::time::Duration::from_secs(10));

    cmd.assert().success().stdout("0\n");
}

#[test]
fn test_debug_logging_stays_off_stdout() {
    let mut cmd = Command::cargo_bin("webcalc").unwrap();
    cmd.env("RUST_LOG", "webcalc=debug")
        .args(["add", "2", "3", "--raw"]);

    cmd.assert()
        .success()
        .stdout("5\n")
        .stderr(predicate::str::contains("Evaluated add(2, 3) = 5"));
}
