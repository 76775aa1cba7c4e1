//! Auth token command handler.

use anyhow::{Result, bail};

use super::load_resolved_config;
use crate::cli::{GlobalArgs, TokenCommand};
use crate::storage::{SessionContext, SqliteStore};
use crate::ui::Style;

pub fn run_token(global: &GlobalArgs, command: TokenCommand) -> Result<()> {
    let resolved = load_resolved_config(global)?;
    let store = SqliteStore::open(&resolved.profile_name)?;

    match command {
        TokenCommand::Set { token } => {
            let token = token.trim();
            if token.is_empty() {
                bail!("Token is empty");
            }
            store.set_auth_token(token)?;
            crate::status!(
                "{} Token stored for {}",
                Style::success("✓"),
                Style::value(store.scope())
            );
        }
        TokenCommand::Clear => {
            store.clear_auth_token()?;
            crate::status!(
                "{} Token removed for {}",
                Style::success("✓"),
                Style::value(store.scope())
            );
        }
        TokenCommand::Status => {
            let source = if resolved.token_override.is_some() {
                "set (from environment)"
            } else if store.auth_token()?.is_some() {
                "set (stored)"
            } else {
                "not set"
            };
            println!("{}: {source}", store.scope());
        }
    }

    Ok(())
}
