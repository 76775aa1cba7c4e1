//! HTTP transport for the chat and upload endpoints.

mod client;
mod error;
mod request;

pub use client::{ChatTransport, Greeting, HttpTransport};
pub use error::TransportError;
pub use request::{OutboundRequest, TurnFields, guess_mime, text_request, upload_request};
