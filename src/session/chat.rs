use anyhow::Result;
use serde_json::Value;

use super::draft::Draft;
use super::message::{FileRef, Message};
use super::reply::parse_reply;
use crate::config::EndpointConfig;
use crate::storage::SessionContext;
use crate::transport::{ChatTransport, TransportError, TurnFields, text_request, upload_request};

/// Whether a turn is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Pending,
}

/// What became of a call to [`ChatSession::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Nothing to send: blank text and no files. The log is unchanged.
    Ignored,
    /// The server answered with reply text.
    Replied,
    /// The server answered but no reply alias matched; the placeholder was
    /// appended instead.
    EmptyReply,
    /// The request failed; an error message was appended.
    Failed { error: String },
}

impl TurnOutcome {
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

enum TurnError {
    Transport(TransportError),
    EmptyReply,
}

/// A conversation with one backend.
///
/// Holds the append-only message log and the draft input, and turns each
/// submission into exactly one request. `submit` borrows the session
/// mutably, so a second turn cannot start while one is awaiting its reply.
pub struct ChatSession<T, C> {
    config: EndpointConfig,
    transport: T,
    context: C,
    messages: Vec<Message>,
    draft: Draft,
    state: SessionState,
}

impl<T: ChatTransport, C: SessionContext> ChatSession<T, C> {
    pub fn new(config: EndpointConfig, transport: T, context: C) -> Self {
        Self {
            config,
            transport,
            context,
            messages: Vec::new(),
            draft: Draft::default(),
            state: SessionState::Idle,
        }
    }

    pub const fn config(&self) -> &EndpointConfig {
        &self.config
    }

    pub const fn transport(&self) -> &T {
        &self.transport
    }

    pub const fn context(&self) -> &C {
        &self.context
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub const fn draft(&self) -> &Draft {
        &self.draft
    }

    pub const fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// The persisted session id. Storage errors read as "no session".
    pub fn session_id(&self) -> Option<String> {
        read_or_warn("session id", self.context.session_id())
    }

    /// The auth token sent with each turn. Storage errors read as "no token".
    pub fn auth_token(&self) -> Option<String> {
        read_or_warn("auth token", self.context.auth_token())
    }

    /// Sends whatever the draft holds, leaving the draft empty.
    ///
    /// A draft with blank text and no files is left untouched.
    pub async fn submit_draft(&mut self) -> TurnOutcome {
        if !self.draft.is_submittable() {
            return TurnOutcome::Ignored;
        }
        let (text, files) = self.draft.take();
        self.submit(&text, files).await
    }

    /// Runs one turn: optimistic user message, one request, one assistant
    /// message.
    ///
    /// Failures never escape as errors; they become the assistant message.
    pub async fn submit(&mut self, text: &str, files: Vec<FileRef>) -> TurnOutcome {
        let text = text.trim();
        if text.is_empty() && files.is_empty() {
            return TurnOutcome::Ignored;
        }

        self.messages.push(Message::user(text, files.clone()));
        self.state = SessionState::Pending;

        let token = self.auth_token();
        // An unreadable id may still exist in storage, so only a confirmed
        // absence lets this turn adopt the server's id.
        let stored = self.context.session_id();
        let may_adopt = matches!(stored, Ok(None));
        let session_id = read_or_warn("session id", stored);
        let fields = TurnFields {
            text,
            token: token.as_deref(),
            session_id: session_id.as_deref(),
        };

        let request = if files.is_empty() {
            text_request(&self.config, &fields)
        } else {
            if files.len() > 1 && !self.config.multi_file_upload {
                crate::info!(
                    "Only the first of {} attached files is uploaded ({})",
                    files.len(),
                    files[0].name()
                );
            }
            upload_request(&self.config, &fields, &files)
        };

        let response = self.transport.send(request).await;
        let result = match response {
            Ok(body) => self.accept_response(&body, may_adopt),
            Err(err) => Err(TurnError::Transport(err)),
        };

        let (content, outcome) = match result {
            Ok(reply) => (reply, TurnOutcome::Replied),
            Err(TurnError::EmptyReply) => (self.config.placeholder.clone(), TurnOutcome::EmptyReply),
            Err(TurnError::Transport(err)) => {
                let error = err.to_string();
                (format!("Error: {error}"), TurnOutcome::Failed { error })
            }
        };

        self.messages.push(Message::assistant(content));
        self.draft.clear_files();
        self.state = SessionState::Idle;

        outcome
    }

    /// Forgets the conversation: clears the log, the draft, and the
    /// persisted session id. Safe to call repeatedly.
    pub fn start_new(&mut self) -> Result<()> {
        self.messages.clear();
        self.draft = Draft::default();
        self.context.clear_session_id()
    }

    fn accept_response(&mut self, body: &Value, may_adopt: bool) -> Result<String, TurnError> {
        let reply = parse_reply(body, &self.config.reply_aliases, &self.config.session_aliases);

        // First assignment wins; later ids are ignored until start_new.
        if may_adopt && let Some(id) = &reply.session_id {
            if let Err(e) = self.context.set_session_id(id) {
                crate::warn!("Warning: could not persist session id: {e:#}");
            }
        }

        reply.text.ok_or(TurnError::EmptyReply)
    }
}

fn read_or_warn(what: &str, value: Result<Option<String>>) -> Option<String> {
    value.unwrap_or_else(|e| {
        crate::warn!("Warning: could not read {what}: {e:#}");
        None
    })
}
