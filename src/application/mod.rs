//! Application layer holding the account registry.
//!
//! `AccountStore` owns every account, enforces the uniqueness and balance
//! rules, and moves account state to and from a `SnapshotStore`.

pub mod account_store;
