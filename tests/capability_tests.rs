//! Builds without the test-mode feature must refuse `-T` with a status
//! that is neither success nor a command-line error.

#![cfg(not(feature = "test-mode"))]

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_flag_unavailable() {
    for flag in ["-T", "--test"] {
        Command::cargo_bin("ledctl")
            .unwrap()
            .args([flag, "-L"])
            .assert()
            .failure()
            .code(predicate::ne(35));
    }

    Command::cargo_bin("ledctl")
        .unwrap()
        .arg("-LT")
        .assert()
        .failure()
        .code(predicate::ne(35));
}
