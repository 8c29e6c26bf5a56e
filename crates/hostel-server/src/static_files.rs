//! Per-host static resource serving.
//!
//! Static assets (stylesheets, images) live in the database, keyed by
//! host and path. The content type is stored alongside the bytes.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::error::ServerError;
use crate::handlers::request_host;
use crate::state::AppState;

/// Handle GET /static/{*path}.
pub(crate) async fn serve(
    State(state): State<Arc<AppState>>,
    Path(path): Path<String>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    let host = request_host(&headers);
    match state.store.static_resource(host, &path).await? {
        Some(resource) => {
            let mut response = Response::new(Body::from(resource.value));
            let content_type = header::HeaderValue::from_str(&resource.content_type)?;
            response.headers_mut().insert(header::CONTENT_TYPE, content_type);
            Ok(response)
        }
        None => {
            tracing::debug!(host, path, "Static resource not found");
            Ok(StatusCode::NOT_FOUND.into_response())
        }
    }
}
