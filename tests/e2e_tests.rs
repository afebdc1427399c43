//! End-to-end tests for the pinaudit binary
//!
//! These tests stay offline and verify:
//! - Help text lists the flags and usage examples
//! - Version output
//! - Usage errors exit with clap's status code

use assert_cmd::Command;
use predicates::prelude::*;

fn pinaudit() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pinaudit"))
}

mod help_tests {
    use super::*;

    #[test]
    fn test_help_lists_flags() {
        pinaudit()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--app"))
            .stdout(predicate::str::contains("--gen"))
            .stdout(predicate::str::contains("-a"))
            .stdout(predicate::str::contains("-g"))
            .stdout(predicate::str::contains("--verbose").not());
    }

    #[test]
    fn test_help_shows_examples() {
        pinaudit()
            .arg("-h")
            .assert()
            .success()
            .stdout(predicate::str::contains("Examples:"))
            .stdout(predicate::str::contains(
                "linode-marketplace-postgresql,linode-marketplace-wordpress",
            ));
    }

    #[test]
    fn test_version() {
        pinaudit()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("pinaudit "));
    }
}

mod usage_error_tests {
    use super::*;

    #[test]
    fn test_unknown_flag() {
        pinaudit()
            .arg("--json")
            .assert()
            .code(2)
            .stderr(predicate::str::contains("--json"));
    }

    #[test]
    fn test_app_without_value() {
        pinaudit().arg("--app").assert().code(2);
    }

    #[test]
    fn test_verbose_flag_rejected() {
        pinaudit().arg("-v").assert().code(2);
    }

    #[test]
    fn test_positional_argument_rejected() {
        pinaudit().arg("some/path").assert().code(2);
    }
}
