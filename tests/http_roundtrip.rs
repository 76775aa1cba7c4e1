#![allow(clippy::unwrap_used)]
//! End-to-end turns through the real HTTP transport.
//!
//! A raw `TcpListener` plays the backend: it answers each connection with
//! one canned response and records the request it received.

use std::sync::{Arc, Mutex};

use parley_cli::config::EndpointConfig;
use parley_cli::session::{ChatSession, FileRef, Role, TurnOutcome};
use parley_cli::storage::{MemoryStore, SessionContext};
use parley_cli::transport::HttpTransport;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

struct CannedServer {
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl CannedServer {
    /// Serves `responses` in order, one per connection.
    async fn start(responses: Vec<(u16, &'static str)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = Arc::clone(&requests);
        tokio::spawn(async move {
            for (status, body) in responses {
                let (mut stream, _) = listener.accept().await.unwrap();
                let raw = read_request(&mut stream).await;
                recorded.lock().unwrap().push(raw);

                let reason = if status == 200 { "OK" } else { "Error" };
                let response = format!(
                    "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                stream.write_all(response.as_bytes()).await.unwrap();
                stream.shutdown().await.ok();
            }
        });

        Self { base_url, requests }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

async fn read_request(stream: &mut TcpStream) -> String {
    let mut raw = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        raw.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&raw);
        let Some(header_end) = text.find("\r\n\r\n") else {
            continue;
        };
        let headers = text[..header_end].to_ascii_lowercase();
        let body_len = raw.len() - header_end - 4;

        let content_length = headers
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|value| value.trim().parse::<usize>().ok());

        let complete = match content_length {
            Some(expected) => body_len >= expected,
            None if headers.contains("transfer-encoding: chunked") => text.ends_with("0\r\n\r\n"),
            None => true,
        };
        if complete {
            break;
        }
    }

    String::from_utf8_lossy(&raw).into_owned()
}

fn session_for(
    server: &CannedServer,
    store: MemoryStore,
) -> ChatSession<HttpTransport, MemoryStore> {
    let config = EndpointConfig::new(server.url("/chat/")).with_upload_endpoint(server.url("/upload/"));
    ChatSession::new(config, HttpTransport::new(), store)
}

#[tokio::test]
async fn test_text_turn_round_trip() {
    let server = CannedServer::start(vec![(200, r#"{"reply":"hello back","chat_id":"abc123"}"#)]).await;
    let mut session = session_for(&server, MemoryStore::new().with_auth_token("tok-1"));

    let outcome = session.submit("hello", Vec::new()).await;

    assert_eq!(outcome, TurnOutcome::Replied);
    assert_eq!(session.messages().len(), 2);
    assert_eq!(session.messages()[1].role(), Role::Assistant);
    assert_eq!(session.messages()[1].content(), "hello back");
    assert_eq!(session.context().session_id().unwrap().as_deref(), Some("abc123"));

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].starts_with("POST /chat/ "));
    assert!(requests[0].contains(r#""user_message":"hello""#));
    assert!(requests[0].contains(r#""token":"tok-1""#));
    assert!(!requests[0].contains("chat_id"));
}

#[tokio::test]
async fn test_second_turn_carries_session_id() {
    let server = CannedServer::start(vec![
        (200, r#"{"reply":"first","chat_id":"abc123"}"#),
        (200, r#"{"reply":"second","chat_id":"other"}"#),
    ])
    .await;
    let mut session = session_for(&server, MemoryStore::new());

    session.submit("one", Vec::new()).await;
    session.submit("two", Vec::new()).await;

    let requests = server.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests[1].contains(r#""chat_id":"abc123""#));
    // First assignment wins
    assert_eq!(session.session_id().as_deref(), Some("abc123"));
    assert_eq!(session.messages().len(), 4);
}

#[tokio::test]
async fn test_upload_turn_uses_multipart() {
    let server = CannedServer::start(vec![(200, r#"{"response":"got your file"}"#)]).await;
    let mut session = session_for(&server, MemoryStore::new().with_session_id("s-9"));

    let file = FileRef::new("notes.txt", b"remember the milk".to_vec());
    let outcome = session.submit("see attached", vec![file]).await;

    assert_eq!(outcome, TurnOutcome::Replied);
    assert_eq!(session.messages()[1].content(), "got your file");

    let request = &server.requests()[0];
    assert!(request.starts_with("POST /upload/ "));
    assert!(request.to_ascii_lowercase().contains("multipart/form-data"));
    assert!(request.contains(r#"name="user_message""#));
    assert!(request.contains("see attached"));
    assert!(request.contains(r#"name="chat_id""#));
    assert!(request.contains("s-9"));
    assert!(request.contains(r#"filename="notes.txt""#));
    assert!(request.to_ascii_lowercase().contains("content-type: text/plain"));
    assert!(request.contains("remember the milk"));
}

#[tokio::test]
async fn test_server_error_becomes_error_message() {
    let server = CannedServer::start(vec![(500, r#"{"detail":"boom"}"#)]).await;
    let mut session = session_for(&server, MemoryStore::new());

    let outcome = session.submit("hello", Vec::new()).await;

    assert!(outcome.is_failure());
    let last = session.messages().last().unwrap();
    assert_eq!(last.role(), Role::Assistant);
    assert!(last.content().starts_with("Error: "));
    assert!(last.content().contains("500"));
    assert!(session.context().session_id().unwrap().is_none());
}

#[tokio::test]
async fn test_non_json_body_becomes_error_message() {
    let server = CannedServer::start(vec![(200, "<html>oops</html>")]).await;
    let mut session = session_for(&server, MemoryStore::new());

    let outcome = session.submit("hello", Vec::new()).await;

    assert!(outcome.is_failure());
    assert!(session.messages()[1].content().starts_with("Error: "));
}

#[tokio::test]
async fn test_reply_without_text_uses_placeholder() {
    let server = CannedServer::start(vec![(200, r#"{"status":"ok","chat_id":"abc"}"#)]).await;
    let mut session = session_for(&server, MemoryStore::new());

    let outcome = session.submit("hello", Vec::new()).await;

    assert_eq!(outcome, TurnOutcome::EmptyReply);
    assert_eq!(
        session.messages()[1].content(),
        session.config().placeholder.as_str()
    );
    assert_eq!(session.session_id().as_deref(), Some("abc"));
}

#[tokio::test]
async fn test_greeting_endpoint() {
    let server = CannedServer::start(vec![(200, r#"{"greeted":false,"message":"Welcome!"}"#)]).await;

    let greeting = HttpTransport::new()
        .greet(&server.url("/chat/greet"), Some("tok"), Some("abc"))
        .await
        .unwrap();

    assert!(!greeting.greeted);
    assert_eq!(greeting.message.as_deref(), Some("Welcome!"));
    let request = &server.requests()[0];
    assert!(request.starts_with("GET /chat/greet?token=tok&chat_id=abc "));
}
