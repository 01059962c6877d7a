//! In-process HTTP server standing in for Dropbox and Slack in tests.

use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::Arc,
};

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde_json::Value;
use tokio::{net::TcpListener, sync::Mutex};

/// A request received by the mock server.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub path: String,
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Clone, Default)]
struct MockState {
    routes: Arc<HashMap<String, (StatusCode, Value)>>,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

#[derive(Default)]
pub struct MockServerBuilder {
    routes: HashMap<String, (StatusCode, Value)>,
}

impl MockServerBuilder {
    /// Answer every request to `path` with `status` and a JSON `body`.
    pub fn respond(mut self, path: &str, status: StatusCode, body: Value) -> Self {
        self.routes.insert(path.to_string(), (status, body));
        self
    }

    pub async fn start(self) -> MockServer {
        let state = MockState {
            routes: Arc::new(self.routes),
            requests: Arc::default(),
        };

        let app = Router::new().fallback(record).with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        MockServer { addr, state }
    }
}

pub struct MockServer {
    addr: SocketAddr,
    state: MockState,
}

impl MockServer {
    pub fn builder() -> MockServerBuilder {
        MockServerBuilder::default()
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().await.clone()
    }
}

async fn record(
    State(state): State<MockState>,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();

    state.requests.lock().await.push(Recorded {
        path: path.clone(),
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    });

    match state.routes.get(&path) {
        Some((status, body)) => (*status, Json(body.clone())).into_response(),
        None => (StatusCode::NOT_FOUND, format!("no mock for {path}")).into_response(),
    }
}
