use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// One request as seen by the mock upstream.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: HashMap<String, String>,
    pub body: Option<Value>,
}

impl RecordedRequest {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}

#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: Vec<u8>,
    pub content_type: &'static str,
    pub delay: Option<Duration>,
}

impl MockResponse {
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            body: body.to_string().into_bytes(),
            content_type: "application/json",
            delay: None,
        }
    }

    pub fn bytes(status: u16, body: &[u8], content_type: &'static str) -> Self {
        Self {
            status,
            body: body.to_vec(),
            content_type,
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[derive(Default)]
struct Shared {
    routes: Mutex<HashMap<String, VecDeque<MockResponse>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Scripted HTTP upstream bound to an ephemeral localhost port.
///
/// Responses are queued per path; the last queued response for a path is
/// repeated once the queue drains. Unrouted paths answer 404.
pub struct MockUpstream {
    addr: SocketAddr,
    shared: Arc<Shared>,
    handle: JoinHandle<()>,
}

impl MockUpstream {
    pub async fn start() -> Self {
        let shared = Arc::new(Shared::default());
        let app = Router::new().fallback(handle).with_state(shared.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            addr,
            shared,
            handle,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn respond(&self, path: &str, response: MockResponse) {
        self.shared
            .routes
            .lock()
            .unwrap()
            .entry(path.to_string())
            .or_default()
            .push_back(response);
    }

    pub fn respond_json(&self, path: &str, status: u16, body: Value) {
        self.respond(path, MockResponse::json(status, body));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.shared.requests.lock().unwrap().clone()
    }

    pub fn hits(&self, path: &str) -> usize {
        self.requests().iter().filter(|r| r.path == path).count()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests().last().cloned().expect("no request recorded")
    }
}

impl Drop for MockUpstream {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn handle(
    State(shared): State<Arc<Shared>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let query = Query::<Vec<(String, String)>>::try_from_uri(&uri)
        .map(|q| q.0)
        .unwrap_or_default();
    let headers = headers
        .iter()
        .filter_map(|(k, v)| Some((k.as_str().to_string(), v.to_str().ok()?.to_string())))
        .collect();
    let body = serde_json::from_slice(&body).ok();

    shared.requests.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        query,
        headers,
        body,
    });

    let scripted = {
        let mut routes = shared.routes.lock().unwrap();
        routes.get_mut(uri.path()).and_then(|queue| {
            if queue.len() > 1 {
                queue.pop_front()
            } else {
                queue.front().cloned()
            }
        })
    };

    let response = scripted.unwrap_or_else(|| {
        MockResponse::json(404, serde_json::json!({ "detail": "Not Found" }))
    });

    if let Some(delay) = response.delay {
        tokio::time::sleep(delay).await;
    }

    (
        StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        [(header::CONTENT_TYPE, response.content_type)],
        response.body,
    )
        .into_response()
}
