use crate::domain::account::Account;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The flat, persisted shape of one account.
///
/// Field names follow the snapshot file format (`Name`, `Owner`, `Balance`).
/// The balance is written as a JSON number carrying every decimal digit, so it
/// reloads without going through `f64`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct SnapshotRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Owner")]
    pub owner: String,
    #[serde(rename = "Balance", with = "rust_decimal::serde::arbitrary_precision")]
    pub balance: Decimal,
}

impl From<&Account> for SnapshotRecord {
    fn from(account: &Account) -> Self {
        Self {
            name: account.nickname().to_string(),
            owner: account.owner().to_string(),
            balance: account.balance().value(),
        }
    }
}
