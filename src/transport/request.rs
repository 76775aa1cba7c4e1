//! The two request shapes a turn can take.

use serde_json::{Map, Value};

use crate::config::EndpointConfig;
use crate::session::FileRef;

/// One outbound POST, fully described before it is sent.
#[derive(Debug, Clone)]
pub enum OutboundRequest {
    /// JSON body sent to the chat endpoint.
    Text { url: String, body: Map<String, Value> },
    /// Multipart body sent to the upload endpoint.
    Upload {
        url: String,
        fields: Vec<(String, String)>,
        files: Vec<(String, FileRef)>,
    },
}

impl OutboundRequest {
    pub fn url(&self) -> &str {
        match self {
            Self::Text { url, .. } | Self::Upload { url, .. } => url,
        }
    }

    pub const fn is_upload(&self) -> bool {
        matches!(self, Self::Upload { .. })
    }
}

/// Values shared by both shapes.
#[derive(Debug, Clone, Copy)]
pub struct TurnFields<'a> {
    pub text: &'a str,
    pub token: Option<&'a str>,
    pub session_id: Option<&'a str>,
}

impl TurnFields<'_> {
    fn entries(&self, config: &EndpointConfig) -> Vec<(String, String)> {
        let names = &config.request_fields;
        let mut entries = vec![(names.text.clone(), self.text.to_string())];
        if let Some(token) = self.token {
            entries.push((names.token.clone(), token.to_string()));
        }
        if let Some(session_id) = self.session_id {
            entries.push((names.session_id.clone(), session_id.to_string()));
        }
        entries
    }
}

/// Builds the JSON request for a text-only turn.
pub fn text_request(config: &EndpointConfig, fields: &TurnFields<'_>) -> OutboundRequest {
    let body = fields
        .entries(config)
        .into_iter()
        .map(|(name, value)| (name, Value::String(value)))
        .collect();

    OutboundRequest::Text {
        url: config.chat_endpoint.clone(),
        body,
    }
}

/// Builds the multipart request for a turn with attachments.
///
/// Only the first file is transmitted unless the profile enables
/// `multi_file_upload`; extra files then share the same field name.
pub fn upload_request(
    config: &EndpointConfig,
    fields: &TurnFields<'_>,
    files: &[FileRef],
) -> OutboundRequest {
    let sent = if config.multi_file_upload {
        files
    } else {
        &files[..files.len().min(1)]
    };

    OutboundRequest::Upload {
        url: config.upload_endpoint.clone(),
        fields: fields.entries(config),
        files: sent
            .iter()
            .map(|file| (config.request_fields.file.clone(), file.clone()))
            .collect(),
    }
}

/// MIME type for a multipart file part, from the file extension.
pub fn guess_mime(file_name: &str) -> String {
    mime_guess::from_path(file_name)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> EndpointConfig {
        EndpointConfig::new("http://localhost:5000/chat/")
            .with_upload_endpoint("http://localhost:5000/upload/")
    }

    #[test]
    fn test_text_request_includes_optional_fields() {
        let request = text_request(
            &config(),
            &TurnFields {
                text: "hello",
                token: Some("jwt"),
                session_id: Some("7"),
            },
        );

        let OutboundRequest::Text { url, body } = request else {
            panic!("expected a text request");
        };
        assert_eq!(url, "http://localhost:5000/chat/");
        assert_eq!(body["user_message"], "hello");
        assert_eq!(body["token"], "jwt");
        assert_eq!(body["chat_id"], "7");
    }

    #[test]
    fn test_text_request_omits_absent_fields() {
        let request = text_request(
            &config(),
            &TurnFields {
                text: "hello",
                token: None,
                session_id: None,
            },
        );

        let OutboundRequest::Text { body, .. } = request else {
            panic!("expected a text request");
        };
        assert_eq!(body.len(), 1);
        assert!(!body.contains_key("chat_id"));
    }

    #[test]
    fn test_text_request_custom_field_names() {
        let mut config = config();
        config.request_fields.text = "query".to_string();
        config.request_fields.session_id = "session_id".to_string();

        let request = text_request(
            &config,
            &TurnFields {
                text: "hello",
                token: None,
                session_id: Some("abc"),
            },
        );

        let OutboundRequest::Text { body, .. } = request else {
            panic!("expected a text request");
        };
        assert_eq!(body["query"], "hello");
        assert_eq!(body["session_id"], "abc");
    }

    #[test]
    fn test_upload_request_sends_first_file_only() {
        let files = [FileRef::new("a.pdf", "a"), FileRef::new("b.pdf", "b")];
        let request = upload_request(
            &config(),
            &TurnFields {
                text: "",
                token: Some("jwt"),
                session_id: None,
            },
            &files,
        );

        assert!(request.is_upload());
        assert_eq!(request.url(), "http://localhost:5000/upload/");
        let OutboundRequest::Upload { fields, files, .. } = request else {
            panic!("expected an upload request");
        };
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].0, "file");
        assert_eq!(files[0].1.name(), "a.pdf");
        assert!(fields.contains(&("user_message".to_string(), String::new())));
        assert!(fields.contains(&("token".to_string(), "jwt".to_string())));
    }

    #[test]
    fn test_upload_request_multi_file() {
        let mut config = config();
        config.multi_file_upload = true;
        let files = [FileRef::new("a.pdf", "a"), FileRef::new("b.pdf", "b")];

        let request = upload_request(
            &config,
            &TurnFields {
                text: "both",
                token: None,
                session_id: None,
            },
            &files,
        );

        let OutboundRequest::Upload { files, .. } = request else {
            panic!("expected an upload request");
        };
        let names: Vec<&str> = files.iter().map(|(_, f)| f.name()).collect();
        assert_eq!(names, ["a.pdf", "b.pdf"]);
    }

    #[test]
    fn test_guess_mime() {
        assert_eq!(guess_mime("report.PDF"), "application/pdf");
        assert_eq!(guess_mime("diagram.svg"), "image/svg+xml");
        assert_eq!(guess_mime("Makefile"), "application/octet-stream");
    }
}
