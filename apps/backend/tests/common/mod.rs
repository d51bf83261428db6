//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext holding a temporary Q&A directory and the API router
//! - WordApiStub, a local stand-in for the remote word API

#![allow(dead_code)]

pub mod fixtures;

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use axum_test::TestServer;
use serde_json::{json, Value};
use tempfile::TempDir;

use word_check_backend::services::word_api::WordApiClient;
use word_check_backend::{router, AppState};

/// Words the stub knows about. Anything else is a 404.
pub const KNOWN_WORD: &str = "yyds";
pub const KNOWN_CHINESE_WORD: &str = "内卷";
/// Lookups for this word make the stub fail with 500.
pub const FAILING_WORD: &str = "boom";
/// Lookups for this word return a body that is not JSON.
pub const GARBLED_WORD: &str = "garbled";
/// Lookups for this word return nulls, a number and a field the UI never reads.
pub const SPARSE_WORD: &str = "sparse";
/// Add requests containing this word are rejected with 500.
pub const REJECTED_WORD: &str = "reject-me";

/// A port nothing listens on.
pub const UNREACHABLE_API: &str = "http://127.0.0.1:1";

/// Local word API bound to an ephemeral port.
pub struct WordApiStub {
    pub base_url: String,
    requests: Arc<Mutex<StubRequests>>,
}

#[derive(Default)]
struct StubRequests {
    bodies: Vec<Value>,
    added: Vec<Value>,
}

impl WordApiStub {
    /// Start the stub on the current runtime.
    pub async fn spawn() -> Self {
        let requests = Arc::new(Mutex::new(StubRequests::default()));

        let app = Router::new()
            .route("/", get(stub_lookup))
            .route("/add", post(stub_add))
            .with_state(requests.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind word API stub");
        let addr = listener.local_addr().expect("stub address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Self {
            base_url: format!("http://{}", addr),
            requests,
        }
    }

    /// Words accepted by the stub so far.
    pub fn added_words(&self) -> Vec<Value> {
        self.requests.lock().expect("stub lock").added.clone()
    }

    /// Every add request body exactly as the stub received it, rejected ones included.
    pub fn received_bodies(&self) -> Vec<Value> {
        self.requests.lock().expect("stub lock").bodies.clone()
    }
}

async fn stub_lookup(Query(params): Query<HashMap<String, String>>) -> Response {
    let word = params.get("word").cloned().unwrap_or_default();
    match word.as_str() {
        KNOWN_WORD => Json(json!({
            "word": KNOWN_WORD,
            "literal_translation": "forever god",
            "chinese": "永远的神",
            "usage": "This player is yyds."
        }))
        .into_response(),
        KNOWN_CHINESE_WORD => Json(json!({
            "word": KNOWN_CHINESE_WORD,
            "literal_translation": "inward curl",
            "english_translation": "involution",
            "usage": "Everyone at work is so 内卷."
        }))
        .into_response(),
        FAILING_WORD => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        GARBLED_WORD => (StatusCode::OK, "<html>not json</html>").into_response(),
        SPARSE_WORD => Json(json!({
            "word": SPARSE_WORD,
            "literal_translation": null,
            "chinese": null,
            "usage": 7,
            "pinyin": "xi shu"
        }))
        .into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn stub_add(
    State(requests): State<Arc<Mutex<StubRequests>>>,
    Json(body): Json<Value>,
) -> StatusCode {
    let mut requests = requests.lock().expect("stub lock");
    requests.bodies.push(body.clone());

    let Value::Array(words) = body else {
        return StatusCode::BAD_REQUEST;
    };
    if words.iter().any(|w| w["word"] == REJECTED_WORD) {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }
    requests.added.extend(words);
    StatusCode::OK
}

/// Test context containing the Q&A directory, the word API stub and the router.
pub struct TestContext {
    _qa_root: TempDir,
    qa_dir: PathBuf,
    pub word_api: WordApiStub,
    app: Router,
}

impl TestContext {
    /// Create a context with an empty, existing Q&A directory.
    pub async fn new() -> Self {
        let ctx = Self::with_missing_qa_dir().await;
        fs::create_dir(&ctx.qa_dir).expect("Failed to create qa dir");
        ctx
    }

    /// Create a context whose Q&A directory does not exist.
    pub async fn with_missing_qa_dir() -> Self {
        let word_api = WordApiStub::spawn().await;
        Self::build(WordApiClient::new(word_api.base_url.clone()), word_api)
    }

    /// Create a context whose word API cannot be reached.
    pub async fn with_unreachable_word_api() -> Self {
        let word_api = WordApiStub::spawn().await;
        let ctx = Self::build(WordApiClient::new(UNREACHABLE_API), word_api);
        fs::create_dir(&ctx.qa_dir).expect("Failed to create qa dir");
        ctx
    }

    fn build(client: WordApiClient, word_api: WordApiStub) -> Self {
        let qa_root = TempDir::new().expect("Failed to create temp dir");
        let qa_dir = qa_root.path().join("qa");
        let app = router(AppState::new(qa_dir.clone(), client));

        Self {
            _qa_root: qa_root,
            qa_dir,
            word_api,
            app,
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Test server over the router.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).expect("Failed to start test server")
    }

    /// Write a file into the Q&A directory.
    pub fn write_qa(&self, name: &str, content: impl AsRef<[u8]>) {
        fs::write(self.qa_dir.join(name), content).expect("Failed to write qa file");
    }
}
