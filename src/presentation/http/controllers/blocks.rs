// src/presentation/http/controllers/blocks.rs
use crate::application::error::ApplicationError;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::ApiJson;
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde_json::Value;

#[utoipa::path(
    post,
    path = "/api/v1/blocks/{block}/validate",
    params(("block" = String, Path, description = "Block slug, e.g. `embed`")),
    responses(
        (status = 200, description = "Block data is valid.", body = StatusResponse),
        (status = 400, description = "A required field is missing.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown block.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Collections"
)]
pub async fn validate_block(
    Extension(state): Extension<HttpState>,
    Path(block): Path<String>,
    ApiJson(data): ApiJson<Value>,
) -> HttpResult<Json<StatusResponse>> {
    let Value::Object(fields) = data else {
        return Err(HttpError::from_error(ApplicationError::validation(
            "block data must be a JSON object",
        )));
    };

    state
        .services
        .hooks
        .validate_block(&block, &fields)
        .into_http()?;

    Ok(Json(StatusResponse {
        status: "ok".into(),
    }))
}
