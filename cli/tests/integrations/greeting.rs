use assert_cmd::Command;

#[test]
fn test_no_command_prints_two_line_greeting() {
    let mut cmd = Command::cargo_bin("webcalc").unwrap();

    cmd.assert().success().code(0).stdout(
        "Hello from Rust running inside your browser!\n\
         Use the UI controls to call factorial() and add().\n",
    );
}

#[test]
fn test_greeting_is_stable_across_runs() {
    let first = Command::cargo_bin("webcalc").unwrap().output().unwrap();
    let second = Command::cargo_bin("webcalc").unwrap().output().unwrap();

    assert_eq!(first.stdout, second.stdout);
    assert_eq!(String::from_utf8(first.stdout).unwrap().lines().count(), 2);
}

#[test]
fn test_greeting_ignores_log_level() {
    let mut cmd = Command::cargo_bin("webcalc").unwrap();
    cmd.env("RUST_LOG", "trace");

    let output = cmd.output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap().lines().count(), 2);
}
