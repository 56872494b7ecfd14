//! Generated API documentation.

use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::state::AppState;

/// Where the OpenAPI document is served.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// ```text
/// GET /                        -> 301 to /docs/
/// GET /docs/                   -> Swagger UI
/// GET /api-docs/openapi.json   -> OpenAPI document
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(redirect_to_docs))
        .merge(SwaggerUi::new("/docs").url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
}

async fn redirect_to_docs() -> impl IntoResponse {
    (StatusCode::MOVED_PERMANENTLY, [(LOCATION, "/docs/")])
}
