mod common;

use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_cli_end_to_end() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("accounts.json");

    common::session(&path, "a\nBob\nMain\n0\nd\nBob\nMain\n25\nw\nBob\nMain\n30\n25\nl\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Press the appropriate key"))
        .stdout(predicate::str::contains("✅ Created account “Main” for Bob."))
        .stdout(predicate::str::contains("New balance is: $25"))
        .stdout(predicate::str::contains("insufficient funds"))
        .stdout(predicate::str::contains("Remaining balance is: $0"))
        .stdout(predicate::str::contains(
            "Account: Main | Owner: Bob | Balance: $0",
        ))
        .stdout(predicate::str::contains("💾 Saved 1 account(s)."));

    assert!(path.exists());
}

#[test]
fn test_invalid_command_reprompts() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("accounts.json");

    common::session(&path, "?\nk\nx\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid character entered").count(2))
        .stdout(predicate::str::contains("Exiting without saving changes."));
}

#[test]
fn test_end_of_input_exits_without_saving() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("accounts.json");

    common::session(&path, "a\nAlice\nChecking\n10\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("End of input, exiting without saving."));

    assert!(!path.exists());
}
