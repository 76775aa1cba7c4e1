//! Session id commands.

use anyhow::Result;

use super::{load_resolved_config, open_context};
use crate::cli::GlobalArgs;
use crate::session::ChatSession;
use crate::storage::SessionContext;
use crate::transport::HttpTransport;
use crate::ui::Style;

/// Forgets the stored session id so the next message starts a new conversation.
pub fn run_new(global: &GlobalArgs) -> Result<()> {
    let resolved = load_resolved_config(global)?;
    let context = open_context(&resolved, false)?;

    let mut session = ChatSession::new(resolved.endpoint, HttpTransport::new(), context);
    session.start_new()?;

    crate::status!(
        "{} Started a new session for {}",
        Style::success("✓"),
        Style::value(&resolved.profile_name)
    );
    Ok(())
}

/// Prints the stored session id, or nothing if there is none.
pub fn print_session(global: &GlobalArgs) -> Result<()> {
    let resolved = load_resolved_config(global)?;
    let context = open_context(&resolved, false)?;

    match context.session_id()? {
        Some(id) => println!("{id}"),
        None => crate::status!("{}", Style::secondary("No session yet.")),
    }
    Ok(())
}
