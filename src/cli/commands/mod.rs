//! Subcommand implementations.

use anyhow::Result;

use crate::cli::GlobalArgs;
use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};
use crate::storage::{MemoryStore, SessionContext, SqliteStore};

/// Chat mode command handler.
pub mod chat;

/// Profile creation command handler.
pub mod init;

/// Profile listing command handler.
pub mod profiles;

/// One-shot message command handler.
pub mod send;

/// Session id commands (`new`, `session`).
pub mod session;

/// Auth token command handler.
pub mod token;

/// Loads the config file and applies the global CLI overrides.
pub(crate) fn load_resolved_config(global: &GlobalArgs) -> Result<ResolvedConfig> {
    let manager = ConfigManager::new();
    let config_file = manager.load_or_default()?;

    let options = ResolveOptions {
        profile: global.profile.clone(),
        endpoint: global.endpoint.clone(),
        upload_endpoint: global.upload_endpoint.clone(),
    };

    Ok(resolve_config(&options, &config_file)?)
}

/// Opens the session storage for a resolved profile.
pub(crate) fn open_context(
    resolved: &ResolvedConfig,
    ephemeral: bool,
) -> Result<Box<dyn SessionContext>> {
    if ephemeral {
        let token = match &resolved.token_override {
            Some(token) => Some(token.clone()),
            None => match SqliteStore::open_existing(&resolved.profile_name)? {
                Some(stored) => stored.auth_token()?,
                None => None,
            },
        };
        let store = token.map_or_else(MemoryStore::new, |t| MemoryStore::new().with_auth_token(t));
        return Ok(Box::new(store));
    }

    let store = SqliteStore::open(&resolved.profile_name)?
        .with_token_override(resolved.token_override.clone());
    Ok(Box::new(store))
}
