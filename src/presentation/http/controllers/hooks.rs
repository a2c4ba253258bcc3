// src/presentation/http/controllers/hooks.rs
use crate::application::dto::{BeforeChangeRequest, BeforeChangeResponse};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::ApiJson;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde_json::Value;

#[utoipa::path(
    post,
    path = "/api/v1/hooks/{collection}/fields/{field}/before-change",
    params(
        ("collection" = String, Path, description = "Collection slug"),
        ("field" = String, Path, description = "Hooked field name")
    ),
    request_body = BeforeChangeRequest,
    responses(
        (status = 200, description = "Value to persist for the field.", body = BeforeChangeResponse),
        (status = 404, description = "No hook registered for this field.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Hooks"
)]
pub async fn before_change(
    Extension(state): Extension<HttpState>,
    Path((collection, field)): Path<(String, String)>,
    ApiJson(payload): ApiJson<BeforeChangeRequest>,
) -> HttpResult<Json<BeforeChangeResponse>> {
    state
        .services
        .hooks
        .before_change(&collection, &field, &payload)
        .into_http()
        .map(|value| Json(BeforeChangeResponse { value }))
}

#[utoipa::path(
    post,
    path = "/api/v1/hooks/{collection}/after-read",
    params(("collection" = String, Path, description = "Collection slug")),
    responses(
        (status = 200, description = "Document after the collection's afterRead hooks ran."),
        (status = 400, description = "Document could not be read.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown collection.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Hooks"
)]
pub async fn after_read(
    Extension(state): Extension<HttpState>,
    Path(collection): Path<String>,
    ApiJson(doc): ApiJson<Value>,
) -> HttpResult<Json<Value>> {
    state
        .services
        .hooks
        .after_read(&collection, doc)
        .into_http()
        .map(Json)
}
