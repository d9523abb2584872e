// tests/support/helpers.rs
use super::builders::seeded_store;
use super::mocks::{FailingStore, FixedClock, InMemoryStore};
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use newsroom::application::services::ApplicationServices;
use newsroom::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub fn build_test_state(store: Arc<InMemoryStore>) -> HttpState {
    let services = Arc::new(ApplicationServices::new(
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        store,
        Arc::new(FixedClock::default()),
    ));
    HttpState { services }
}

/// シード済みストアを使うルーターと、検証用のストア参照を返す
pub fn make_test_router() -> (Router, Arc<InMemoryStore>) {
    let store = Arc::new(seeded_store());
    let router = build_router(build_test_state(Arc::clone(&store)));
    (router, store)
}

/// すべての永続化操作が失敗するルーター
pub fn make_failing_router() -> Router {
    let store = Arc::new(FailingStore);
    let services = Arc::new(ApplicationServices::new(
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        store,
        Arc::new(FixedClock::default()),
    ));
    build_router(HttpState { services })
}

/// Send one request and return the status with the parsed JSON body
/// (`Value::Null` for an empty body).
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("expected a JSON body")
    };
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

/// Send a raw, possibly malformed, JSON body.
pub async fn send_raw(app: &Router, method: Method, uri: &str, raw: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(raw.to_string()))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.expect("read body");
    (status, serde_json::from_slice(&bytes).expect("expected a JSON body"))
}

/// Assert an error response: expected status and `{ "msg": expected_msg }`.
pub fn assert_error(result: (StatusCode, Value), expected_status: StatusCode, expected_msg: &str) {
    let (status, json) = result;
    assert_eq!(status, expected_status, "unexpected status, body: {json}");
    assert_eq!(
        json.get("msg").and_then(Value::as_str),
        Some(expected_msg),
        "unexpected error body: {json}"
    );
    assert_eq!(json.as_object().map(|o| o.len()), Some(1), "error body has extra fields: {json}");
}
