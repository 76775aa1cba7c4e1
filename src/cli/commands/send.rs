use anyhow::Result;
use std::path::PathBuf;

use super::{load_resolved_config, open_context};
use crate::cli::GlobalArgs;
use crate::input::InputReader;
use crate::session::{ChatSession, TurnOutcome};
use crate::status;
use crate::transport::HttpTransport;
use crate::ui::Spinner;

pub struct SendOptions {
    pub text: Option<String>,
    pub files: Vec<PathBuf>,
}

/// Runs a single turn and prints the assistant reply to stdout.
///
/// Returns the turn outcome so the caller can pick an exit status; a failed
/// turn still prints its error message.
pub async fn run_send(global: &GlobalArgs, options: SendOptions) -> Result<TurnOutcome> {
    let resolved = load_resolved_config(global)?;

    let files = options
        .files
        .iter()
        .map(|path| InputReader::read_attachment(path))
        .collect::<Result<Vec<_>>>()?;

    let text = match options.text {
        Some(text) => text,
        None if files.is_empty() => InputReader::read_stdin()?,
        None => String::new(),
    };

    let context = open_context(&resolved, global.ephemeral)?;
    let mut session = ChatSession::new(resolved.endpoint, HttpTransport::new(), context);

    let spinner = Spinner::new("Waiting for reply...");
    let outcome = session.submit(&text, files).await;
    spinner.stop();

    match &outcome {
        TurnOutcome::Ignored => {
            status!("Nothing to send: message is empty and no file is attached");
        }
        TurnOutcome::Failed { .. } => {
            if let Some(message) = session.messages().last() {
                eprintln!("{}", message.content());
            }
        }
        TurnOutcome::Replied | TurnOutcome::EmptyReply => {
            if let Some(message) = session.messages().last() {
                println!("{}", message.content());
            }
        }
    }

    Ok(outcome)
}
