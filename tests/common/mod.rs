//! Utility helpers shared across integration tests.

use assert_cmd::{Command, assert::Assert};

/// Build a `Vec<String>` from a list of string slices.
macro_rules! lines_vec {
    ($($line:expr),* $(,)?) => {
        vec![$($line.to_string()),*]
    };
}

/// Run the `unellipsis` binary with the given arguments.
pub fn run_cli_with_args(args: &[&str]) -> Assert {
    Command::cargo_bin("unellipsis")
        .expect("failed to create cargo command for unellipsis")
        .args(args)
        .assert()
}

/// Run the `unellipsis` binary with arguments and piped stdin.
pub fn run_cli_with_stdin(args: &[&str], stdin: &str) -> Assert {
    Command::cargo_bin("unellipsis")
        .expect("failed to create cargo command for unellipsis")
        .args(args)
        .write_stdin(stdin)
        .assert()
}
