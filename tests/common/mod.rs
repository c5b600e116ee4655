#![allow(dead_code)]

use assert_cmd::Command;
use assert_cmd::cargo_bin;
use std::path::Path;

/// Builds a line-mode session against the snapshot at `path`.
pub fn session(path: &Path, input: &str) -> Command {
    let mut cmd = Command::new(cargo_bin!("pocket-ledger"));
    cmd.arg("--line-mode")
        .arg("--file")
        .arg(path)
        .write_stdin(input.to_string());
    cmd
}

pub fn write_snapshot(path: &Path, accounts: &[(&str, &str, f64)]) {
    let records: Vec<serde_json::Value> = accounts
        .iter()
        .map(|(owner, name, balance)| {
            serde_json::json!({ "Name": name, "Owner": owner, "Balance": balance })
        })
        .collect();
    std::fs::write(path, serde_json::to_string_pretty(&records).unwrap()).unwrap();
}
