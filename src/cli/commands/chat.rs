use anyhow::Result;

use super::{load_resolved_config, open_context};
use crate::cli::GlobalArgs;
use crate::repl::{Repl, ReplOptions};
use crate::session::ChatSession;
use crate::transport::HttpTransport;

pub async fn run_chat(global: &GlobalArgs) -> Result<()> {
    let resolved = load_resolved_config(global)?;
    let context = open_context(&resolved, global.ephemeral)?;

    let session = ChatSession::new(resolved.endpoint, HttpTransport::new(), context);
    let options = ReplOptions {
        profile_name: resolved.profile_name,
        greet_endpoint: resolved.greet_endpoint,
    };

    Repl::new(session, options).run().await
}
