use rust_decimal::Decimal;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("an account named '{nickname}' already exists for {owner}")]
    DuplicateAccount { owner: String, nickname: String },
    #[error("no account named '{nickname}' exists for {owner}")]
    AccountNotFound { owner: String, nickname: String },
    #[error("account handle was not issued by this store")]
    ForeignAccountRef,
    #[error("invalid amount {amount}: {reason}")]
    InvalidAmount {
        amount: Decimal,
        reason: &'static str,
    },
    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },
    #[error("could not load snapshot: {0}")]
    SnapshotLoad(String),
    #[error("could not save snapshot to {}: {source}", path.display())]
    SnapshotSave {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
