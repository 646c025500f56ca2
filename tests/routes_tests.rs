use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

use texttools_backend::config::Config;
use texttools_backend::error::InferenceError;
use texttools_backend::inference::{InferenceBackend, InferenceRequest, UpstreamReply};
use texttools_backend::routes;
use texttools_backend::state::AppState;

/// Backend that answers every call with the same reply and remembers the requests
struct StubBackend {
    status: u16,
    body: &'static str,
    requests: Mutex<Vec<InferenceRequest>>,
}

impl StubBackend {
    fn new(status: u16, body: &'static str) -> Arc<Self> {
        Arc::new(Self {
            status,
            body,
            requests: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl InferenceBackend for StubBackend {
    async fn infer(&self, request: InferenceRequest) -> Result<UpstreamReply, InferenceError> {
        self.requests.lock().unwrap().push(request);
        Ok(UpstreamReply::from_text(self.status, self.body))
    }
}

/// Backend whose outbound call always times out
struct TimeoutBackend;

#[async_trait]
impl InferenceBackend for TimeoutBackend {
    async fn infer(&self, _request: InferenceRequest) -> Result<UpstreamReply, InferenceError> {
        Err(InferenceError::Timeout)
    }
}

/// Backend that panics inside the handler's outbound call
struct PanickingBackend;

#[async_trait]
impl InferenceBackend for PanickingBackend {
    async fn infer(&self, _request: InferenceRequest) -> Result<UpstreamReply, InferenceError> {
        panic!("inference backend exploded")
    }
}

fn app_with(backend: Arc<dyn InferenceBackend>) -> Router {
    let state = AppState::with_backend(Config::default(), backend).unwrap();
    routes::app(state)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

const ARTICLE: &str =
    "Rust is a systems programming language focused on safety, speed, and concurrency.";

#[tokio::test]
async fn test_home() {
    let (status, body) = send(app_with(StubBackend::new(200, "{}")), get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "online");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_translate_success() {
    let backend = StubBackend::new(200, r#"[{"translation_text":"नमस्ते दुनिया"}]"#);
    let app = app_with(backend.clone());

    let (status, body) = send(
        app,
        post_json(
            "/translate",
            json!({"text": "  Hello world  ", "source": "en", "target": "hi", "model": "nllb"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["translated_text"], "नमस्ते दुनिया");
    assert_eq!(body["source_language"], "en");
    assert_eq!(body["target_language"], "hi");
    assert_eq!(body["model_used"], "nllb");
    assert!(body["processing_time"].is_number());

    let requests = backend.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].payload.inputs, "Hello world");
}

#[tokio::test]
async fn test_translate_applies_defaults() {
    let backend = StubBackend::new(200, r#"{"generated_text":"Hello"}"#);
    let (status, body) = send(
        app_with(backend.clone()),
        post_json("/translate", json!({"text": "Hola"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source_language"], "auto");
    assert_eq!(body["target_language"], "en");
    assert_eq!(body["model_used"], "nllb");
    assert_eq!(
        backend.requests.lock().unwrap()[0].model_path,
        "facebook/nllb-200-distilled-600M"
    );
}

#[tokio::test]
async fn test_translate_rejects_blank_text() {
    let backend = StubBackend::new(200, "{}");
    let (status, body) = send(
        app_with(backend.clone()),
        post_json("/translate", json!({"text": "   ", "target": "hi"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"success": false, "error": "Text cannot be empty"}));
    assert!(backend.requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_translate_rejects_missing_body() {
    let app = app_with(StubBackend::new(200, "{}"));
    let (status, body) = send(app, Request::post("/translate").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No data provided");

    let app = app_with(StubBackend::new(200, "{}"));
    let (status, body) = send(app, post_json("/translate", json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No data provided");
}

#[tokio::test]
async fn test_translate_rejects_wrong_field_types() {
    let (status, body) = send(
        app_with(StubBackend::new(200, "{}")),
        post_json("/translate", json!({"text": 42})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));
}

#[tokio::test]
async fn test_upstream_failure_is_embedded_in_success_response() {
    let (status, body) = send(
        app_with(StubBackend::new(503, r#"{"error":"loading"}"#)),
        post_json("/translate", json!({"text": "Hello", "target": "hi"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["translated_text"].as_str().unwrap().contains("Model is loading"));
}

#[tokio::test]
async fn test_translate_timeout_is_embedded() {
    let (status, body) = send(
        app_with(Arc::new(TimeoutBackend)),
        post_json("/translate", json!({"text": "Hello"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["translated_text"]
        .as_str()
        .unwrap()
        .starts_with("Error: Request timed out"));
}

#[tokio::test]
async fn test_summarize_bullets() {
    let backend = StubBackend::new(200, r#"[{"summary_text":"Rust is safe. Rust is fast."}]"#);
    let (status, body) = send(
        app_with(backend.clone()),
        post_json(
            "/summarize",
            json!({"text": ARTICLE, "model": "t5", "length": "long", "format": "bullets"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"], "• Rust is safe\n• Rust is fast");
    assert_eq!(body["model_used"], "t5");
    assert_eq!(body["length"], "long");
    assert_eq!(body["format"], "bullets");
    assert_eq!(body["stats"]["original_words"], 12);

    let requests = backend.requests.lock().unwrap();
    assert_eq!(requests[0].model_path, "t5-base");
    let payload = serde_json::to_value(&requests[0].payload).unwrap();
    assert_eq!(payload["parameters"]["max_length"], 400);
    assert_eq!(payload["parameters"]["min_length"], 200);
}

#[tokio::test]
async fn test_summarize_unknown_length_uses_short_profile() {
    let backend = StubBackend::new(200, r#"{"summary_text":"Short."}"#);
    let (status, body) = send(
        app_with(backend.clone()),
        post_json("/summarize", json!({"text": ARTICLE, "length": "tiny"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"], "Short.");
    assert_eq!(body["length"], "tiny");
    assert_eq!(body["format"], "paragraph");

    let payload = serde_json::to_value(&backend.requests.lock().unwrap()[0].payload).unwrap();
    assert_eq!(payload["parameters"]["max_length"], 130);
}

#[tokio::test]
async fn test_summarize_requires_minimum_length() {
    let (status, body) = send(
        app_with(StubBackend::new(200, "{}")),
        post_json("/summarize", json!({"text": "Too short to summarize."})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Text must be at least 50 characters long");
}

#[tokio::test]
async fn test_text_over_limit_is_rejected() {
    let text = "a".repeat(10_001);
    let (status, body) = send(
        app_with(StubBackend::new(200, "{}")),
        post_json("/translate", json!({ "text": text })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Text cannot exceed 10000 characters");
}

#[tokio::test]
async fn test_languages() {
    let (status, body) = send(app_with(StubBackend::new(200, "{}")), get("/languages")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let languages = body["languages"].as_array().unwrap();
    assert_eq!(languages.len(), 30);
    assert_eq!(languages[1], json!({"code": "en", "name": "English", "native": "English"}));
}

#[tokio::test]
async fn test_model_lists() {
    let app = app_with(StubBackend::new(200, "{}"));
    let (_, body) = send(app, get("/models/translation")).await;
    let models = body["models"].as_array().unwrap();
    assert_eq!(models.len(), 3);
    assert_eq!(models[0]["id"], "nllb");
    assert_eq!(models[0]["recommended"], true);

    let app = app_with(StubBackend::new(200, "{}"));
    let (_, body) = send(app, get("/models/summarization")).await;
    let ids: Vec<&str> = body["models"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["bart", "distilbart", "t5", "mbart"]);
}

#[tokio::test]
async fn test_unknown_route() {
    let (status, body) = send(app_with(StubBackend::new(200, "{}")), get("/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"success": false, "error": "Endpoint not found"}));
}

#[tokio::test]
async fn test_handler_panic_returns_internal_error() {
    let (status, body) = send(
        app_with(Arc::new(PanickingBackend)),
        post_json("/translate", json!({"text": "Hello"})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"success": false, "error": "Internal server error"}));
}

#[tokio::test]
async fn test_falsy_bodies_count_as_no_data() {
    for payload in [json!([]), json!(""), json!(0), json!(false), json!(null)] {
        let (status, body) = send(
            app_with(StubBackend::new(200, "{}")),
            post_json("/summarize", payload),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "No data provided");
    }

    let (status, body) = send(
        app_with(StubBackend::new(200, "{}")),
        post_json("/translate", json!(["Hello"])),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));
}

#[tokio::test]
async fn test_unknown_model_reports_resolved_default() {
    let backend = StubBackend::new(200, r#"[{"translation_text":"Bonjour"}]"#);
    let (status, body) = send(
        app_with(backend.clone()),
        post_json("/translate", json!({"text": "Hello", "target": "fr", "model": "gpt"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["model_used"], "nllb");
    assert_eq!(
        backend.requests.lock().unwrap()[0].model_path,
        "facebook/nllb-200-distilled-600M"
    );
}
