//! Interactive chat mode.
//!
//! A REPL on top of [`ChatSession`](crate::session::ChatSession): plain
//! lines are sent as messages, slash commands manage attachments and the
//! session.

/// Slash command parsing and autocomplete.
pub mod command;
mod runner;
mod ui;

pub use runner::{Repl, ReplOptions};
