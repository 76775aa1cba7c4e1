//! # parley - Terminal Chat Client
//!
//! `parley` talks to an HTTP chat API from the terminal. It keeps an ordered
//! conversation log, remembers the server-issued session id between runs, and
//! can attach files to a turn.
//!
//! ## Features
//!
//! - **Interactive mode**: REPL with slash commands (`/attach`, `/new`, ...)
//! - **One-shot turns**: `parley send "hello"` for scripting
//! - **Persistent sessions**: session id and auth token survive restarts
//! - **Profiles**: one core, many backends with differing field names
//!
//! ## Quick Start
//!
//! ```bash
//! # Create a profile
//! parley init --endpoint http://localhost:5000/chat/
//!
//! # Store the auth token the backend expects
//! parley token set eyJhbGciOi...
//!
//! # Chat interactively
//! parley
//!
//! # Single turn with an attachment
//! parley send "summarize this" --file ./report.pdf
//! ```
//!
//! ## Configuration
//!
//! Profiles are stored in `~/.config/parley/config.toml`:
//!
//! ```toml
//! [parley]
//! profile = "local"
//!
//! [profiles.local]
//! chat_endpoint = "http://localhost:5000/chat/"
//! upload_endpoint = "http://localhost:5000/upload/"
//! reply_aliases = ["reply", "response", "message"]
//!
//! [profiles.local.request_fields]
//! text = "user_message"
//! session_id = "chat_id"
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and endpoint profiles.
pub mod config;

/// File system utilities.
pub mod fs;

/// Input reading from stdin and attachment files.
pub mod input;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration and data.
pub mod paths;

/// Interactive chat mode.
pub mod repl;

/// Chat session core: message log, draft input and turn dispatch.
pub mod session;

/// Durable storage for the auth token and session id.
pub mod storage;

/// HTTP transport for the chat and upload endpoints.
pub mod transport;

/// Terminal UI components (spinner, colors).
pub mod ui;
