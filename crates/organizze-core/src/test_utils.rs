//! Test utilities for organizze-core
//!
//! This module provides a mock Organizze API server for integration tests.
//! Canned JSON bodies are registered per path; every request is recorded with
//! its query string and Authorization header so tests can assert exactly what
//! reached the wire.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::{Json, Router};
use serde_json::Value;
use tokio::sync::oneshot;

/// One request as seen by the mock upstream
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Path plus query string, exactly as received
    pub path_and_query: String,
    /// Value of the Authorization header, when present
    pub authorization: Option<String>,
}

#[derive(Clone, Default)]
struct MockState {
    responses: Arc<Mutex<HashMap<String, (u16, Value)>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Mock Organizze API server for testing
pub struct MockOrganizzeServer {
    addr: SocketAddr,
    state: MockState,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockOrganizzeServer {
    /// Start the mock server on an available port
    pub async fn start() -> Self {
        let state = MockState::default();
        let app = Router::new().fallback(handle).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .unwrap();
        });

        Self {
            addr,
            state,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    /// Get the base URL for this mock server
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Serve `body` with status 200 for requests to `path` (query ignored)
    pub fn respond(&self, path: &str, body: Value) {
        self.respond_with_status(path, 200, body);
    }

    /// Serve `body` with the given status for requests to `path`
    pub fn respond_with_status(&self, path: &str, status: u16, body: Value) {
        self.state
            .responses
            .lock()
            .unwrap()
            .insert(path.to_string(), (status, body));
    }

    /// Every request received so far, in arrival order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    /// Stop the mock server
    pub fn stop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockOrganizzeServer {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Unregistered paths answer 404, matching upstream behavior for unknown ids
async fn handle(State(state): State<MockState>, uri: Uri, headers: HeaderMap) -> impl IntoResponse {
    let path_and_query = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    state.requests.lock().unwrap().push(RecordedRequest {
        path_and_query,
        authorization,
    });

    let canned = state.responses.lock().unwrap().get(uri.path()).cloned();
    match canned {
        Some((status, body)) => {
            let status =
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, Json(body))
        }
        None => (StatusCode::NOT_FOUND, Json(Value::Null)),
    }
}
