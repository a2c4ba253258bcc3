// tests/support/helpers.rs
use super::mocks::FixedClock;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
use axum::response::Response;
use newsroom_core::application::{hooks::HookRegistry, services::ApplicationServices};
use newsroom_core::domain::{
    collection::CollectionCatalog, jobs::JobAccessPolicy, media::MediaUrlBuilder,
};
use newsroom_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;

pub const MEDIA_BASE: &str = "https://media.example.test";
pub const CRON_SECRET: &str = "cron-test-secret";
pub const ADMIN_ORIGIN: &str = "http://localhost:3000";

pub fn build_test_state() -> HttpState {
    let catalog = Arc::new(CollectionCatalog::editorial().expect("editorial catalog"));
    let registry = Arc::new(HookRegistry::for_catalog(
        &catalog,
        MediaUrlBuilder::new(MEDIA_BASE),
        Arc::new(FixedClock),
    ));
    let services = Arc::new(ApplicationServices::new(
        catalog,
        registry,
        JobAccessPolicy::new(Some(CRON_SECRET.to_string())),
    ));
    HttpState { services }
}

pub fn make_test_router() -> axum::Router {
    build_router(build_test_state(), &[ADMIN_ORIGIN.to_string()])
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn read_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected valid json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
