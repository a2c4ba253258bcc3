// tests/e2e_jobs.rs
use axum::body::Body;
use axum::http::{Request, header::{AUTHORIZATION, CONTENT_TYPE}};
use serde_json::json;
use tower::util::ServiceExt as _;

mod support;

fn bearer(token: &str) -> Option<String> {
    Some(format!("Bearer {token}"))
}

fn access_request(authorization: Option<String>, has_user: bool) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/api/v1/jobs/access")
        .header(CONTENT_TYPE, "application/json");
    if let Some(value) = authorization {
        builder = builder.header(AUTHORIZATION, value);
    }
    builder
        .body(Body::from(json!({ "hasUser": has_user }).to_string()))
        .unwrap()
}

/// cron シークレットが一致する場合のみ匿名リクエストを許可する
#[tokio::test]
async fn cron_secret_grants_access() {
    let app = support::make_test_router();

    let ok = app
        .clone()
        .oneshot(access_request(bearer(support::CRON_SECRET), false))
        .await
        .unwrap();
    assert_eq!(support::read_json(ok).await["allowed"], true);

    let wrong = app
        .clone()
        .oneshot(access_request(bearer("guess"), false))
        .await
        .unwrap();
    assert_eq!(support::read_json(wrong).await["allowed"], false);

    let missing = app.oneshot(access_request(None, false)).await.unwrap();
    assert_eq!(support::read_json(missing).await["allowed"], false);
}

#[tokio::test]
async fn signed_in_users_can_run_jobs() {
    let app = support::make_test_router();
    let resp = app.oneshot(access_request(None, true)).await.unwrap();
    assert_eq!(support::read_json(resp).await["allowed"], true);
}

/// スキーム名は大文字小文字を区別して "Bearer" と一致する必要がある
#[tokio::test]
async fn scheme_must_be_spelled_bearer() {
    let app = support::make_test_router();

    for header in [
        format!("bearer {}", support::CRON_SECRET),
        format!("BEARER {}", support::CRON_SECRET),
        format!("Bearer  {}", support::CRON_SECRET),
        support::CRON_SECRET.to_string(),
    ] {
        let resp = app
            .clone()
            .oneshot(access_request(Some(header.clone()), false))
            .await
            .unwrap();
        assert_eq!(
            support::read_json(resp).await["allowed"],
            false,
            "accepted {header:?}"
        );
    }
}

#[tokio::test]
async fn snake_case_user_flag_is_ignored() {
    let app = support::make_test_router();
    let req = Request::builder()
        .method("POST")
        .uri("/api/v1/jobs/access")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "has_user": true }).to_string()))
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(support::read_json(resp).await["allowed"], false);
}
