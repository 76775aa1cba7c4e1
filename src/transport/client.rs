use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::TransportError;
use super::request::{OutboundRequest, guess_mime};
use crate::session::FileRef;

/// Sends a turn to the backend and hands back the parsed JSON body.
///
/// The session core depends only on this trait, so the HTTP client can be
/// swapped out in tests.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send(&self, request: OutboundRequest) -> Result<Value, TransportError>;
}

/// Response of the optional greeting endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Greeting {
    /// Whether the user was already greeted recently.
    #[serde(default)]
    pub greeted: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// `reqwest`-backed transport. No timeout: a request runs until it
/// completes or fails.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Asks the greeting endpoint whether to show a welcome message.
    ///
    /// The token and session id travel as query parameters.
    pub async fn greet(
        &self,
        url: &str,
        token: Option<&str>,
        session_id: Option<&str>,
    ) -> Result<Greeting, TransportError> {
        let params: Vec<(&str, &str)> = [("token", token), ("chat_id", session_id)]
            .into_iter()
            .filter_map(|(name, value)| value.map(|v| (name, v)))
            .collect();

        let full_url =
            Url::parse_with_params(url, &params).map_err(|e| TransportError::InvalidUrl {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        read_json(self.client.get(full_url), url).await
    }
}

#[async_trait]
impl ChatTransport for HttpTransport {
    async fn send(&self, request: OutboundRequest) -> Result<Value, TransportError> {
        let url = request.url().to_string();

        let builder = match request {
            OutboundRequest::Text { url, body } => self.client.post(&url).json(&body),
            OutboundRequest::Upload { url, fields, files } => {
                let mut form = Form::new();
                for (name, value) in fields {
                    form = form.text(name, value);
                }
                for (name, file) in files {
                    form = form.part(name, file_part(&file, &url)?);
                }
                self.client.post(&url).multipart(form)
            }
        };

        read_json(builder, &url).await
    }
}

fn file_part(file: &FileRef, url: &str) -> Result<Part, TransportError> {
    Part::bytes(file.content().to_vec())
        .file_name(file.name().to_string())
        .mime_str(&guess_mime(file.name()))
        .map_err(|source| TransportError::Request {
            url: url.to_string(),
            source,
        })
}

async fn read_json<T: DeserializeOwned>(
    builder: RequestBuilder,
    url: &str,
) -> Result<T, TransportError> {
    let request_error = |source: reqwest::Error| TransportError::Request {
        url: url.to_string(),
        source,
    };

    let response = builder.send().await.map_err(request_error)?;

    let status = response.status();
    let body = response.text().await.map_err(request_error)?;

    if !status.is_success() {
        return Err(TransportError::status(status.as_u16(), &body));
    }

    serde_json::from_str(&body).map_err(|source| TransportError::Decode { source })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_file_part_builds_for_unknown_extension() {
        let file = FileRef::new("blob", vec![1u8, 2, 3]);
        assert!(file_part(&file, "http://localhost/upload").is_ok());
    }

    #[test]
    fn test_greeting_defaults() {
        let greeting: Greeting = serde_json::from_str("{}").unwrap_or_default();
        assert!(!greeting.greeted);
        assert!(greeting.message.is_none());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_request_error() {
        let transport = HttpTransport::new();
        let request = OutboundRequest::Text {
            url: "http://127.0.0.1:9/chat/".to_string(),
            body: serde_json::Map::new(),
        };

        let err = transport.send(request).await.unwrap_err();

        assert!(matches!(err, TransportError::Request { .. }));
        assert!(err.to_string().contains("127.0.0.1:9"));
    }

    #[tokio::test]
    async fn test_greet_rejects_invalid_url() {
        let err = HttpTransport::new()
            .greet("not a url", Some("t"), None)
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::InvalidUrl { .. }));
    }
}
