//! Backend contract: where to send turns and what the fields are called.

use serde::{Deserialize, Serialize};

/// Default ordered aliases for the reply text.
pub const DEFAULT_REPLY_ALIASES: &[&str] = &["reply", "response", "message"];

/// Default ordered aliases for the server-issued session id.
pub const DEFAULT_SESSION_ALIASES: &[&str] = &["chat_id", "session_id"];

/// Shown when a well-formed response carries no reply text.
pub const DEFAULT_PLACEHOLDER: &str = "No reply received.";

/// Outbound field names, for both the JSON and the multipart request shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestFields {
    /// Field carrying the user's text.
    pub text: String,
    /// Field carrying the stored auth token.
    pub token: String,
    /// Field carrying the current session id.
    pub session_id: String,
    /// Multipart field carrying the attached file.
    pub file: String,
}

impl Default for RequestFields {
    fn default() -> Self {
        Self {
            text: "user_message".to_string(),
            token: "token".to_string(),
            session_id: "chat_id".to_string(),
            file: "file".to_string(),
        }
    }
}

/// Everything the session core needs to know about a backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    /// URL receiving JSON turns.
    pub chat_endpoint: String,
    /// URL receiving multipart turns with attachments.
    pub upload_endpoint: String,
    pub request_fields: RequestFields,
    /// Response fields tried in order for the reply text.
    pub reply_aliases: Vec<String>,
    /// Response fields tried in order for the session id.
    pub session_aliases: Vec<String>,
    /// Assistant content used when no reply alias matched.
    pub placeholder: String,
    /// Send every staged file instead of only the first.
    pub multi_file_upload: bool,
}

impl EndpointConfig {
    /// Creates a configuration with default field names, using the chat
    /// endpoint for uploads as well.
    pub fn new(chat_endpoint: impl Into<String>) -> Self {
        let chat_endpoint = chat_endpoint.into();
        Self {
            upload_endpoint: chat_endpoint.clone(),
            chat_endpoint,
            request_fields: RequestFields::default(),
            reply_aliases: to_owned_list(DEFAULT_REPLY_ALIASES),
            session_aliases: to_owned_list(DEFAULT_SESSION_ALIASES),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            multi_file_upload: false,
        }
    }

    #[must_use]
    pub fn with_upload_endpoint(mut self, upload_endpoint: impl Into<String>) -> Self {
        self.upload_endpoint = upload_endpoint.into();
        self
    }
}

pub(crate) fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}
