//! Domain types: accounts, monetary value objects and the snapshot port.

pub mod account;
pub mod ports;
pub mod snapshot;
