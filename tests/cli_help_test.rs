// Command line surface of the qbr binary

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_normalize_flag() {
    let mut cmd = Command::cargo_bin("qbr").unwrap();

    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--normalize"))
        .stdout(predicate::str::contains("--state"))
        .stdout(predicate::str::contains("--locale"));
}

#[test]
fn test_state_and_state_file_are_exclusive() {
    let mut cmd = Command::cargo_bin("qbr").unwrap();

    cmd.args(["--state", "UUU", "--state-file", "cube.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
