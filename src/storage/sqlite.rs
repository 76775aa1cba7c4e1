use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension, params};
use std::path::PathBuf;

use super::SessionContext;
use crate::paths;

const AUTH_TOKEN_KEY: &str = "auth_token";
const SESSION_ID_KEY: &str = "session_id";

/// `SQLite`-backed storage, one namespace (scope) per profile.
pub struct SqliteStore {
    db_path: PathBuf,
    scope: String,
    token_override: Option<String>,
}

impl SqliteStore {
    /// Opens the shared store at `$XDG_DATA_HOME/parley/sessions.db`.
    pub fn open(scope: &str) -> Result<Self> {
        let data_dir = paths::data_dir();

        std::fs::create_dir_all(&data_dir).with_context(|| {
            format!("Failed to create data directory: {}", data_dir.display())
        })?;

        Self::open_at(data_dir.join("sessions.db"), scope)
    }

    /// Opens the shared store only if a previous run created it.
    ///
    /// Nothing is written to disk when the database is missing.
    pub fn open_existing(scope: &str) -> Result<Option<Self>> {
        Self::open_existing_at(paths::data_dir().join("sessions.db"), scope)
    }

    pub fn open_existing_at(db_path: PathBuf, scope: &str) -> Result<Option<Self>> {
        if !db_path.is_file() {
            return Ok(None);
        }
        Self::open_at(db_path, scope).map(Some)
    }

    pub fn open_at(db_path: PathBuf, scope: &str) -> Result<Self> {
        let store = Self {
            db_path,
            scope: scope.to_string(),
            token_override: None,
        };

        store.init_db()?;

        Ok(store)
    }

    /// A token that takes priority over the stored one (e.g. from an
    /// environment variable). Never written to disk.
    #[must_use]
    pub fn with_token_override(mut self, token: Option<String>) -> Self {
        self.token_override = token;
        self
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    fn init_db(&self) -> Result<()> {
        let conn = self.connect()?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS session_values (
                scope TEXT NOT NULL,
                key TEXT NOT NULL,
                value TEXT NOT NULL,
                updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                PRIMARY KEY (scope, key)
            )",
            [],
        )
        .context("Failed to create session_values table")?;

        Ok(())
    }

    fn connect(&self) -> Result<Connection> {
        Connection::open(&self.db_path).with_context(|| {
            format!(
                "Failed to open session database: {}",
                self.db_path.display()
            )
        })
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.connect()?;

        conn.query_row(
            "SELECT value FROM session_values WHERE scope = ?1 AND key = ?2",
            params![self.scope, key],
            |row| row.get(0),
        )
        .optional()
        .with_context(|| format!("Failed to read '{key}' from session database"))
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.connect()?;

        conn.execute(
            "INSERT OR REPLACE INTO session_values (scope, key, value, updated_at)
             VALUES (?1, ?2, ?3, CURRENT_TIMESTAMP)",
            params![self.scope, key, value],
        )
        .with_context(|| format!("Failed to write '{key}' to session database"))?;

        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        let conn = self.connect()?;

        conn.execute(
            "DELETE FROM session_values WHERE scope = ?1 AND key = ?2",
            params![self.scope, key],
        )
        .with_context(|| format!("Failed to delete '{key}' from session database"))?;

        Ok(())
    }

    /// Stores the auth token sent with every turn of this scope.
    pub fn set_auth_token(&self, token: &str) -> Result<()> {
        self.put(AUTH_TOKEN_KEY, token)
    }

    pub fn clear_auth_token(&self) -> Result<()> {
        self.delete(AUTH_TOKEN_KEY)
    }
}

impl SessionContext for SqliteStore {
    fn auth_token(&self) -> Result<Option<String>> {
        if let Some(token) = &self.token_override {
            return Ok(Some(token.clone()));
        }
        self.get(AUTH_TOKEN_KEY)
    }

    fn session_id(&self) -> Result<Option<String>> {
        self.get(SESSION_ID_KEY)
    }

    fn set_session_id(&mut self, id: &str) -> Result<()> {
        self.put(SESSION_ID_KEY, id)
    }

    fn clear_session_id(&mut self) -> Result<()> {
        self.delete(SESSION_ID_KEY)
    }
}
