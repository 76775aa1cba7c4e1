use thiserror::Error;

/// Longest slice of an error response body kept in the error message.
const MAX_BODY_EXCERPT: usize = 200;

/// Why a request did not produce a usable JSON body.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to reach {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("server returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("response is not valid JSON: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },
}

impl TransportError {
    pub(crate) fn status(status: u16, body: &str) -> Self {
        let body = body.trim();
        let body = match body.char_indices().nth(MAX_BODY_EXCERPT) {
            Some((cut, _)) => format!("{}...", &body[..cut]),
            None => body.to_string(),
        };
        Self::Status { status, body }
    }
}
