// tests/e2e_http.rs
use axum::body::Body;
use axum::http::{
    Method, Request, StatusCode,
    header::{ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_REQUEST_METHOD, ORIGIN},
};
use serde_json::json;
use tower::util::ServiceExt as _;

mod support;

/// 簡易E2E: /health が200を返すことを確認する
#[tokio::test]
async fn health_returns_ok() {
    let app = support::make_test_router();
    let req = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(support::read_json(resp).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn collections_endpoint_lists_catalog() {
    let app = support::make_test_router();
    let req = Request::builder()
        .method("GET")
        .uri("/api/v1/collections")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = support::read_json(resp).await;
    let slugs: Vec<&str> = body["collections"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, ["pages", "posts", "media", "categories", "users", "tags"]);

    let media = &body["collections"][2];
    assert_eq!(media["upload"]["admin_thumbnail"], "thumbnail");
    assert_eq!(media["upload"]["image_sizes"][6]["crop"], "center");
    assert_eq!(body["collections"][1]["slug_field"]["lock_field"], "slugLock");
    assert_eq!(body["blocks"][0]["slug"], "embed");
    assert_eq!(body["blocks"][1]["slug"], "video");
    assert_eq!(body["blocks"][1]["fields"][0]["label"], "Video URL");
}

#[tokio::test]
async fn embed_block_requires_url() {
    let app = support::make_test_router();

    let ok = app
        .clone()
        .oneshot(support::json_request(
            "POST",
            "/api/v1/blocks/embed/validate",
            &json!({ "url": "https://www.instagram.com/p/abc/" }),
        ))
        .await
        .unwrap();
    assert_eq!(ok.status(), StatusCode::OK);

    let missing = app
        .clone()
        .oneshot(support::json_request(
            "POST",
            "/api/v1/blocks/embed/validate",
            &json!({ "url": "" }),
        ))
        .await
        .unwrap();
    support::assert_error_response(missing, StatusCode::BAD_REQUEST, "Bad Request").await;

    let not_object = app
        .oneshot(support::json_request(
            "POST",
            "/api/v1/blocks/embed/validate",
            &json!(["https://example.test"]),
        ))
        .await
        .unwrap();
    support::assert_error_response(not_object, StatusCode::BAD_REQUEST, "Bad Request").await;
}

#[tokio::test]
async fn video_block_requires_url() {
    let app = support::make_test_router();

    let ok = app
        .clone()
        .oneshot(support::json_request(
            "POST",
            "/api/v1/blocks/video/validate",
            &json!({ "url": "https://cdn.example.test/clip.mp4" }),
        ))
        .await
        .unwrap();
    assert_eq!(ok.status(), StatusCode::OK);

    let missing = app
        .oneshot(support::json_request(
            "POST",
            "/api/v1/blocks/video/validate",
            &json!({ "caption": "no url" }),
        ))
        .await
        .unwrap();
    support::assert_error_response(missing, StatusCode::BAD_REQUEST, "Bad Request").await;
}

#[tokio::test]
async fn cors_allows_only_configured_origins() {
    let app = support::make_test_router();

    let preflight = |origin: &str| {
        Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/v1/collections")
            .header(ORIGIN, origin)
            .header(ACCESS_CONTROL_REQUEST_METHOD, "GET")
            .body(Body::empty())
            .unwrap()
    };

    let allowed = app
        .clone()
        .oneshot(preflight(support::ADMIN_ORIGIN))
        .await
        .unwrap();
    assert_eq!(
        allowed.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        support::ADMIN_ORIGIN
    );

    let denied = app.oneshot(preflight("https://evil.test")).await.unwrap();
    assert!(denied.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = support::make_test_router();
    let req = Request::builder()
        .method("GET")
        .uri("/openapi.json")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = support::read_json(resp).await;
    assert!(body["paths"]["/api/v1/jobs/access"].is_object());
}
