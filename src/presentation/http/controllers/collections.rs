// src/presentation/http/controllers/collections.rs
use crate::domain::collection::CollectionCatalog;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/v1/collections",
    responses(
        (status = 200, description = "Configured collections and rich-text blocks.", body = CollectionCatalog)
    ),
    tag = "Collections"
)]
pub async fn list_collections(Extension(state): Extension<HttpState>) -> Json<CollectionCatalog> {
    Json(state.services.catalog().clone())
}
