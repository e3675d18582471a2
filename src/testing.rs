//! In-process stand-in for a Vikunja server.
//!
//! Binds an axum router to `127.0.0.1:0`, records every request it receives,
//! and answers with canned responses registered per method and path.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use serde_json::Value;
use tokio::net::TcpListener;

use crate::client::VikunjaClient;
use crate::config::Config;
use crate::mcp::VikunjaServer;

pub(crate) const TEST_TOKEN: &str = "tk_test_token";

#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl RecordedRequest {
    /// Request body parsed as JSON, `Value::Null` when empty.
    pub fn json(&self) -> Value {
        if self.body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&self.body).expect("request body should be JSON")
        }
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[derive(Default)]
struct MockState {
    routes: Mutex<HashMap<(Method, String), (u16, String)>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

pub(crate) struct MockVikunja {
    pub url: String,
    state: Arc<MockState>,
    _handle: tokio::task::JoinHandle<()>,
}

impl MockVikunja {
    pub async fn start() -> Self {
        let state = Arc::new(MockState::default());
        let app = Router::new()
            .fallback(respond)
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{}", addr),
            state,
            _handle: handle,
        }
    }

    /// Answer `method path` (path relative to `/api/v1`) with a JSON body.
    pub fn on(&self, method: Method, path: &str, status: u16, body: Value) -> &Self {
        self.on_raw(method, path, status, &body.to_string())
    }

    /// Answer `method path` with a literal body.
    pub fn on_raw(&self, method: Method, path: &str, status: u16, body: &str) -> &Self {
        self.state.routes.lock().unwrap().insert(
            (method, format!("/api/v1{}", path)),
            (status, body.to_string()),
        );
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.state.requests.lock().unwrap().len()
    }

    /// The only recorded request; panics unless exactly one was made.
    pub fn single_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }

    pub fn client(&self) -> VikunjaClient {
        let config = Config::new(Some(self.url.clone()), Some(TEST_TOKEN.to_string())).unwrap();
        VikunjaClient::new(config).unwrap()
    }

    pub fn server(&self) -> VikunjaServer {
        VikunjaServer::new(self.client())
    }
}

async fn respond(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();
    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        query: uri.query().map(str::to_string),
        headers,
        body,
    });

    let route = state.routes.lock().unwrap().get(&(method, path)).cloned();
    match route {
        Some((status, body)) => {
            let status = StatusCode::from_u16(status).unwrap();
            if status == StatusCode::NO_CONTENT {
                status.into_response()
            } else {
                (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
            }
        }
        None => (StatusCode::NOT_IMPLEMENTED, "no mock registered").into_response(),
    }
}

/// Text of the first content item of a tool result.
pub(crate) fn result_text(result: &rmcp::model::CallToolResult) -> &str {
    match &result.content[0].raw {
        rmcp::model::RawContent::Text(text) => text.text.as_str(),
        _ => panic!("Expected text content"),
    }
}

/// Run `tools/call` through a full MCP session over an in-memory pipe.
///
/// Returns the raw JSON-RPC response, so argument decoding and routing
/// happen exactly as they would for a real client.
pub(crate) async fn call_tool(server: VikunjaServer, name: &str, arguments: Value) -> Value {
    use rmcp::ServiceExt;
    use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

    let (client_io, server_io) = tokio::io::duplex(64 * 1024);
    let session = tokio::spawn(async move {
        let running = server
            .serve(tokio::io::split(server_io))
            .await
            .expect("mcp handshake");
        let _ = running.waiting().await;
    });

    let (read, mut write) = tokio::io::split(client_io);
    let mut lines = BufReader::new(read).lines();

    let messages = [
        serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "initialize",
            "params": {
                "protocolVersion": "2025-03-26",
                "capabilities": {},
                "clientInfo": {"name": "test", "version": "0.0.0"}
            }
        }),
        serde_json::json!({"jsonrpc": "2.0", "method": "notifications/initialized"}),
        serde_json::json!({
            "jsonrpc": "2.0",
            "id": 2,
            "method": "tools/call",
            "params": {"name": name, "arguments": arguments}
        }),
    ];

    let mut response = Value::Null;
    for message in messages {
        let expects_reply = message.get("id").cloned();
        write
            .write_all(format!("{}\n", message).as_bytes())
            .await
            .unwrap();
        write.flush().await.unwrap();

        if let Some(id) = expects_reply {
            loop {
                let line = lines
                    .next_line()
                    .await
                    .unwrap()
                    .expect("server closed the session");
                let reply: Value = serde_json::from_str(&line).unwrap();
                if reply.get("id") == Some(&id) {
                    response = reply;
                    break;
                }
            }
        }
    }

    drop(write);
    session.abort();
    response
}
