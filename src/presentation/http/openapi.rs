// src/presentation/http/openapi.rs
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};

pub const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::hooks::before_change,
        crate::presentation::http::controllers::hooks::after_read,
        crate::presentation::http::controllers::collections::list_collections,
        crate::presentation::http::controllers::blocks::validate_block,
        crate::presentation::http::controllers::jobs::job_access,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::application::dto::BeforeChangeRequest,
            crate::application::dto::BeforeChangeResponse,
            crate::application::dto::JobAccessRequest,
            crate::application::dto::JobAccessDto,
            crate::domain::slug::WriteOperation,
            crate::domain::slug::SlugField,
            crate::domain::collection::CollectionCatalog,
            crate::domain::collection::CollectionConfig,
            crate::domain::collection::FieldConfig,
            crate::domain::collection::FieldKind,
            crate::domain::collection::Block,
            crate::domain::media::UploadConfig,
            crate::domain::media::ImageSize,
            crate::domain::media::CropPosition
        )
    ),
    tags(
        (name = "Hooks", description = "Field and collection hooks invoked by the CMS host"),
        (name = "Collections", description = "Collection catalog and block validation"),
        (name = "Jobs", description = "Scheduled job access"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Newsroom hooks API",
        description = "Slug derivation, media URL rewriting and collection catalog for the newsroom CMS",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme(
            "bearerAuth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    Router::new().route("/openapi.json", get(serve_openapi))
}

/// Write the OpenAPI document to `OPENAPI_SNAPSHOT_PATH` (or the default
/// path) and return where it went.
pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(output_path)
}
