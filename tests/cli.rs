use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

const SPECIALS: &str = "~%^&*_-@!+#$";

fn passgen() -> Command {
    Command::cargo_bin("passgen").unwrap()
}

fn stdout_lines(cmd: &mut Command) -> Vec<String> {
    let output = cmd.assert().success();
    String::from_utf8_lossy(&output.get_output().stdout)
        .lines()
        .map(String::from)
        .collect()
}

#[test]
fn default_run_prints_one_password() {
    let lines = stdout_lines(&mut passgen());
    assert_eq!(lines.len(), 1);

    let pass = &lines[0];
    assert_eq!(pass.chars().count(), 18);
    assert!(pass.chars().any(|c| c.is_ascii_digit()));
    assert!(pass.chars().any(|c| c.is_ascii_alphabetic()));
    assert!(pass.chars().any(|c| SPECIALS.contains(c)));
}

#[test]
fn count_and_length_are_honoured() {
    let lines = stdout_lines(passgen().args(["-c", "5", "-L", "10"]));
    assert_eq!(lines.len(), 5);
    for pass in &lines {
        assert_eq!(pass.chars().count(), 10);
        assert!(pass.chars().any(|c| c.is_ascii_digit()), "{pass}");
        assert!(pass.chars().any(|c| c.is_ascii_alphabetic()), "{pass}");
        assert!(pass.chars().any(|c| SPECIALS.contains(c)), "{pass}");
    }
}

#[test]
fn digits_only_with_exclusions() {
    let lines = stdout_lines(passgen().args([
        "--letters=false",
        "--specials=false",
        "--exclude",
        "13",
        "-L",
        "40",
        "-c",
        "3",
    ]));
    assert_eq!(lines.len(), 3);
    for pass in &lines {
        assert!(pass.chars().all(|c| "025789".contains(c)), "{pass}");
    }
}

#[test]
fn logs_stay_off_stdout() {
    let output = passgen()
        .args(["--log-level", "trace", "-c", "2"])
        .assert()
        .success()
        .stderr(predicate::str::contains("starting password generator"));

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    assert_eq!(stdout.lines().count(), 2);
    assert!(!stdout.contains("generation finished"));
}

#[test]
fn invalid_log_level_is_fatal() {
    passgen()
        .args(["--log-level", "chatty"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid log level"));
}

#[test]
fn non_positive_length_is_fatal() {
    passgen()
        .args(["-L", "0"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
    passgen()
        .args(["--length", "-3"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn non_positive_count_is_fatal() {
    passgen()
        .args(["-c", "0"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn no_class_enabled_is_fatal() {
    passgen()
        .args(["--digits=false", "--letters=false", "--specials=false"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("at least one character type"));
}

#[test]
fn everything_excluded_is_fatal() {
    passgen()
        .args(["--letters=false", "--specials=false", "-e", "0123456789"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("empty after exclusions"));
}

#[test]
fn length_below_class_count_is_fatal() {
    passgen()
        .args(["-L", "2"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("too short"));
}

#[test]
fn single_character_password_from_one_class() {
    let lines = stdout_lines(passgen().args(["-L", "1", "--digits=false", "--specials=false"]));
    assert_eq!(lines.len(), 1);
    assert!(lines[0].chars().all(|c| c.is_ascii_alphabetic()));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    passgen()
        .arg("--frobnicate")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty());
}

#[test]
fn help_lists_flags() {
    passgen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--exclude"))
        .stdout(predicate::str::contains("--log-level"));
}
