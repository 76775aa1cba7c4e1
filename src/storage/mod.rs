//! Durable client-side storage for the auth token and session id.
//!
//! The session core never looks these up globally; it receives a
//! [`SessionContext`] when it is constructed.

mod memory;
mod sqlite;

use anyhow::Result;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Read/write access to the values a chat session carries between turns.
///
/// The auth token is read-only from the session's point of view.
pub trait SessionContext {
    fn auth_token(&self) -> Result<Option<String>>;
    fn session_id(&self) -> Result<Option<String>>;
    fn set_session_id(&mut self, id: &str) -> Result<()>;
    fn clear_session_id(&mut self) -> Result<()>;
}

impl<C: SessionContext + ?Sized> SessionContext for Box<C> {
    fn auth_token(&self) -> Result<Option<String>> {
        (**self).auth_token()
    }

    fn session_id(&self) -> Result<Option<String>> {
        (**self).session_id()
    }

    fn set_session_id(&mut self, id: &str) -> Result<()> {
        (**self).set_session_id(id)
    }

    fn clear_session_id(&mut self) -> Result<()> {
        (**self).clear_session_id()
    }
}
