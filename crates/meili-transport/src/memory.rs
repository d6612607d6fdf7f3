//! In-memory transport for testing
//!
//! Responses are scripted per `(method, path)`. Each request pops the next
//! scripted response for its route; the last one stays in place and is
//! replayed for every later request, which makes "never finishes" tasks a
//! one-liner to script.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{TransportError, TransportResult};
use crate::traits::{Method, Request, Transport};

/// A scripted response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl MockResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self::new(200, body)
    }

    pub fn accepted(body: impl Into<Vec<u8>>) -> Self {
        Self::new(202, body)
    }

    pub fn json(status: u16, value: &serde_json::Value) -> Self {
        Self::new(status, value.to_string())
    }

    pub fn not_found() -> Self {
        Self::new(404, Vec::new())
    }
}

#[derive(Debug, Clone)]
enum Scripted {
    Respond(MockResponse),
    Fail(String),
}

/// Scripted transport that records every request it receives
#[derive(Debug, Default)]
pub struct MemoryTransport {
    routes: Mutex<HashMap<(Method, String), VecDeque<Scripted>>>,
    requests: Mutex<Vec<Request>>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for `method path`
    pub fn push(&self, method: Method, path: impl Into<String>, response: MockResponse) {
        self.script(method, path.into(), Scripted::Respond(response));
    }

    /// Queue a connection failure for `method path`
    pub fn push_failure(&self, method: Method, path: impl Into<String>, message: impl Into<String>) {
        self.script(method, path.into(), Scripted::Fail(message.into()));
    }

    fn script(&self, method: Method, path: String, scripted: Scripted) {
        self.routes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .entry((method, path))
            .or_default()
            .push_back(scripted);
    }

    /// All requests received so far, in order
    pub fn requests(&self) -> Vec<Request> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Number of requests received for `method path`
    pub fn request_count(&self, method: Method, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }
}

#[async_trait]
impl Transport for MemoryTransport {
    async fn execute(&self, request: Request) -> TransportResult<Vec<u8>> {
        let key = (request.method, request.path.clone());
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(request);

        let scripted = {
            let mut routes = self
                .routes
                .lock()
                .unwrap_or_else(|e| e.into_inner());
            match routes.get_mut(&key) {
                Some(queue) if queue.len() > 1 => queue.pop_front(),
                Some(queue) => queue.front().cloned(),
                None => None,
            }
        };

        match scripted {
            Some(Scripted::Respond(resp)) if (200..300).contains(&resp.status) => Ok(resp.body),
            Some(Scripted::Respond(resp)) => Err(TransportError::Status {
                status: resp.status,
                body: resp.body,
            }),
            Some(Scripted::Fail(message)) => Err(TransportError::Connection(message)),
            None => Err(TransportError::Connection(format!(
                "no response scripted for {} {}",
                key.0, key.1
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripts_survive_a_poisoned_lock() {
        let transport = MemoryTransport::new();
        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _routes = transport.routes.lock().unwrap();
            panic!("scripting thread died");
        }));
        assert!(transport.routes.is_poisoned());

        transport.push(Method::Get, "/health", MockResponse::ok("up"));
        let body = transport.execute(Request::get("/health")).await.unwrap();

        assert_eq!(body, b"up".to_vec());
        assert_eq!(transport.request_count(Method::Get, "/health"), 1);
    }

    #[tokio::test]
    async fn test_scripted_responses_in_order() {
        let transport = MemoryTransport::new();
        transport.push(Method::Get, "/tasks/1", MockResponse::ok("first"));
        transport.push(Method::Get, "/tasks/1", MockResponse::ok("second"));

        let first = transport.execute(Request::get("/tasks/1")).await.unwrap();
        let second = transport.execute(Request::get("/tasks/1")).await.unwrap();
        let third = transport.execute(Request::get("/tasks/1")).await.unwrap();

        assert_eq!(first, b"first".to_vec());
        assert_eq!(second, b"second".to_vec());
        // Last response is sticky
        assert_eq!(third, b"second".to_vec());
        assert_eq!(transport.request_count(Method::Get, "/tasks/1"), 3);
    }

    #[tokio::test]
    async fn test_routes_are_keyed_by_method() {
        let transport = MemoryTransport::new();
        transport.push(Method::Delete, "/indexes/movies", MockResponse::accepted("{}"));

        assert!(transport.execute(Request::delete("/indexes/movies")).await.is_ok());
        let err = transport
            .execute(Request::get("/indexes/movies"))
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Connection(_)));
    }

    #[tokio::test]
    async fn test_error_status_and_failure() {
        let transport = MemoryTransport::new();
        transport.push(Method::Get, "/indexes/x", MockResponse::not_found());
        transport.push_failure(Method::Get, "/health", "connection refused");

        match transport.execute(Request::get("/indexes/x")).await {
            Err(TransportError::Status { status, .. }) => assert_eq!(status, 404),
            other => panic!("expected 404, got {:?}", other),
        }
        match transport.execute(Request::get("/health")).await {
            Err(TransportError::Connection(msg)) => assert_eq!(msg, "connection refused"),
            other => panic!("expected connection error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_records_bodies() {
        let transport = MemoryTransport::new();
        transport.push(Method::Post, "/indexes", MockResponse::accepted("{}"));

        transport
            .execute(Request::post("/indexes", br#"{"uid":"movies"}"#.to_vec()))
            .await
            .unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].body.as_deref(), Some(&br#"{"uid":"movies"}"#[..]));
    }
}
