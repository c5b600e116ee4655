//! The operator console: menu loop, prompts and key input.
//!
//! The console holds no account state of its own. It turns operator input into
//! `AccountStore` requests and renders their results or errors.

pub mod command;
pub mod driver;
pub mod terminal;

pub use command::Command;
pub use driver::{ConsoleDriver, Exit};
pub use terminal::{RawTerminal, ScriptedTerminal, Terminal};
