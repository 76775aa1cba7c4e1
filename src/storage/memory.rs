use anyhow::Result;

use super::SessionContext;

/// Process-local storage. Nothing survives a restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    auth_token: Option<String>,
    session_id: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    #[must_use]
    pub fn with_session_id(mut self, id: impl Into<String>) -> Self {
        self.session_id = Some(id.into());
        self
    }
}

impl SessionContext for MemoryStore {
    fn auth_token(&self) -> Result<Option<String>> {
        Ok(self.auth_token.clone())
    }

    fn session_id(&self) -> Result<Option<String>> {
        Ok(self.session_id.clone())
    }

    fn set_session_id(&mut self, id: &str) -> Result<()> {
        self.session_id = Some(id.to_string());
        Ok(())
    }

    fn clear_session_id(&mut self) -> Result<()> {
        self.session_id = None;
        Ok(())
    }
}
