//! Chat session core: message log, draft input and turn dispatch.
//!
//! A [`ChatSession`] is built from an [`EndpointConfig`](crate::config::EndpointConfig),
//! a [`ChatTransport`](crate::transport::ChatTransport) and a
//! [`SessionContext`](crate::storage::SessionContext). Each accepted
//! submission appends one user message, sends one request and appends one
//! assistant message, whatever the server does.

mod chat;
mod draft;
mod message;
mod reply;

pub use chat::{ChatSession, SessionState, TurnOutcome};
pub use draft::Draft;
pub use message::{FileRef, Message, Role};
pub use reply::{Reply, parse_reply};
