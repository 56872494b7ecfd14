pub mod docs;
pub mod health;
pub mod students;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::ErrorBody;

/// Fallback for paths no route matches.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody::new("NOT_FOUND", "Route not found")),
    )
}

/// Fallback for a known path requested with an unsupported method.
pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorBody::new(
            "METHOD_NOT_ALLOWED",
            "Method not allowed for this route",
        )),
    )
}
