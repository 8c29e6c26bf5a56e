//! Server error type and HTTP response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hostel_site::{RenderError, SiteError};
use hostel_store::StoreError;
use serde_json::json;

/// Errors surfaced by request handlers.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    #[error(transparent)]
    Site(#[from] SiteError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// A stored static resource carries a content type that is not a
    /// valid header value.
    #[error("invalid stored content type: {0}")]
    InvalidResource(#[from] axum::http::header::InvalidHeaderValue),

    /// The database rejected an admin mutation (constraint violation,
    /// unknown id).
    #[error("{0}")]
    Rejected(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            Self::Rejected(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": message })),
            )
                .into_response(),
            other => {
                tracing::error!(error = %other, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
