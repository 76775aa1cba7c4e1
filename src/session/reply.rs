//! Interpretation of chat endpoint responses.
//!
//! Backends disagree on what they call the reply field, so the reply text
//! is the first usable value among an ordered alias list.

use serde_json::Value;

/// What a response body contributed to the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    /// Reply text, if any alias matched.
    pub text: Option<String>,
    /// Session id issued by the server, if any alias matched.
    pub session_id: Option<String>,
}

/// Extracts the reply text and session id from a parsed response body.
pub fn parse_reply(body: &Value, reply_aliases: &[String], session_aliases: &[String]) -> Reply {
    Reply {
        text: first_match(body, reply_aliases, reply_text),
        session_id: first_match(body, session_aliases, session_id),
    }
}

fn first_match(
    body: &Value,
    aliases: &[String],
    accept: fn(&Value) -> Option<String>,
) -> Option<String> {
    aliases
        .iter()
        .find_map(|alias| body.get(alias).and_then(accept))
}

// Null and empty strings count as absent; other JSON values are rendered as-is.
fn reply_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

// Database-backed servers often return numeric ids.
fn session_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
