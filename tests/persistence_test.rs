mod common;

use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_save_and_reload_across_runs() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("accounts.json");

    // 1. First run: create two accounts and save
    common::session(&path, "a\nAlice\nChecking\n100\na\nAlice\nSavings\n50\nq\n")
        .assert()
        .success();

    let text = std::fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["Name"], "Checking");
    assert_eq!(records[0]["Owner"], "Alice");
    assert_eq!(records[0]["Balance"].to_string(), "100");
    assert_eq!(records[1]["Name"], "Savings");
    assert_eq!(records[1]["Owner"], "Alice");
    assert_eq!(records[1]["Balance"].to_string(), "50");
    assert!(text.contains("\n    {\n        \"Name\""));

    // 2. Second run: the accounts are listed in the same order
    common::session(&path, "l\nx\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 2 account(s)."))
        .stdout(predicate::str::contains(
            "Account: Checking | Owner: Alice | Balance: $100\nAccount: Savings | Owner: Alice | Balance: $50",
        ));
}

#[test]
fn test_quit_without_saving_discards_changes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("accounts.json");
    common::write_snapshot(&path, &[("Bob", "Main", 10.0)]);
    let before = std::fs::read_to_string(&path).unwrap();

    common::session(&path, "d\nBob\nMain\n5\nx\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("New balance is: $15"));

    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn test_fractional_balances_survive_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("accounts.json");
    common::write_snapshot(&path, &[("Carol", "Petty", 0.25)]);

    common::session(&path, "d\nCarol\nPetty\n$0.5\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("New balance is: $0.75"));

    common::session(&path, "l\nx\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Account: Petty | Owner: Carol | Balance: $0.75",
        ));
}

#[test]
fn test_long_decimals_survive_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("accounts.json");

    common::session(&path, "a\nDana\nVault\n12345678901234567.89\nq\n")
        .assert()
        .success();

    common::session(&path, "l\nx\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Account: Vault | Owner: Dana | Balance: $12345678901234567.89",
        ));
}
