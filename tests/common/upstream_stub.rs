use axum::{extract::State, routing::post, Json, Router};
use http::{HeaderMap, StatusCode};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Stub OpenAI-compatible upstream that records completion calls.
#[derive(Clone)]
pub struct UpstreamStub {
    base_url: String,
    calls: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<serde_json::Value>>>,
    auth_headers: Arc<Mutex<Vec<String>>>,
    shutdown: Arc<Mutex<Option<oneshot::Sender<()>>>>,
}

#[derive(Clone)]
pub enum UpstreamResponseConfig {
    /// Respond 200 with a well-formed chat completion carrying this reply.
    Reply(String),
    /// Respond with an arbitrary status and JSON body.
    Raw {
        status: StatusCode,
        body: serde_json::Value,
    },
}

#[derive(Clone)]
struct StubState {
    response: UpstreamResponseConfig,
    calls: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<serde_json::Value>>>,
    auth_headers: Arc<Mutex<Vec<String>>>,
}

impl UpstreamStub {
    pub async fn start(response: UpstreamResponseConfig) -> Self {
        let calls = Arc::new(AtomicUsize::new(0));
        let requests = Arc::new(Mutex::new(Vec::new()));
        let auth_headers = Arc::new(Mutex::new(Vec::new()));
        let state = Arc::new(StubState {
            response,
            calls: calls.clone(),
            requests: requests.clone(),
            auth_headers: auth_headers.clone(),
        });

        let router = Router::new()
            .route("/v1/chat/completions", post(completions_handler))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub upstream");
        let addr = listener.local_addr().expect("stub upstream local addr");
        let (tx, rx) = oneshot::channel::<()>();

        let server = axum::serve(listener, router.into_make_service());
        tokio::spawn(async move {
            tokio::select! {
                res = server => {
                    if let Err(err) = res {
                        eprintln!("Stub upstream server error: {err:?}");
                    }
                }
                _ = rx => {}
            }
        });

        UpstreamStub {
            base_url: format!("http://{}", addr),
            calls,
            requests,
            auth_headers,
            shutdown: Arc::new(Mutex::new(Some(tx))),
        }
    }

    /// Base URL the relay should be configured with (includes the `/v1` prefix).
    pub fn url(&self) -> String {
        format!("{}/v1", self.base_url)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn take_requests(&self) -> Vec<serde_json::Value> {
        let mut guard = self.requests.lock().expect("lock stub requests");
        guard.drain(..).collect()
    }

    pub fn take_auth_headers(&self) -> Vec<String> {
        let mut guard = self.auth_headers.lock().expect("lock stub auth headers");
        guard.drain(..).collect()
    }
}

impl Drop for UpstreamStub {
    fn drop(&mut self) {
        if let Ok(mut guard) = self.shutdown.lock() {
            if let Some(tx) = guard.take() {
                let _ = tx.send(());
            }
        }
    }
}

async fn completions_handler(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> (StatusCode, Json<serde_json::Value>) {
    state.calls.fetch_add(1, Ordering::SeqCst);
    if let Ok(mut guard) = state.requests.lock() {
        guard.push(body);
    }
    if let Ok(mut guard) = state.auth_headers.lock() {
        let auth = headers
            .get(http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        guard.push(auth);
    }

    match &state.response {
        UpstreamResponseConfig::Reply(text) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "choices": [{"message": {"content": text}}]
            })),
        ),
        UpstreamResponseConfig::Raw { status, body } => (*status, Json(body.clone())),
    }
}
