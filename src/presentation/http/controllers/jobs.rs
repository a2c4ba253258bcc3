// src/presentation/http/controllers/jobs.rs
use crate::application::dto::{JobAccessDto, JobAccessRequest};
use crate::presentation::http::extractors::{ApiJson, MaybeBearer};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    post,
    path = "/api/v1/jobs/access",
    request_body = JobAccessRequest,
    responses(
        (status = 200, description = "Whether the forwarded request may run jobs.", body = JobAccessDto)
    ),
    security((), ("bearerAuth" = [])),
    tag = "Jobs"
)]
pub async fn job_access(
    Extension(state): Extension<HttpState>,
    MaybeBearer(token): MaybeBearer,
    ApiJson(payload): ApiJson<JobAccessRequest>,
) -> Json<JobAccessDto> {
    Json(state.services.job_access(&payload, token.as_deref()))
}
