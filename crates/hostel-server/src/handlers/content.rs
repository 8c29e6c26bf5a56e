//! Content page handler.
//!
//! Fallback for every path not claimed by the API or static routes.
//! Resolves the host, page, and language, then renders the host's
//! theme around the result.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri, header};
use axum::response::Response;

use crate::error::ServerError;
use crate::handlers::{request_host, request_language};
use crate::state::AppState;

/// Render a content page.
pub(crate) async fn serve_page(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    uri: Uri,
) -> Result<Response, ServerError> {
    let host = request_host(&headers);
    let language = request_language(&headers, &state.default_language);

    let ctx = state.resolver.resolve(host, uri.path(), &language).await?;
    let page = hostel_site::render(&ctx)?;
    tracing::debug!(host, path = uri.path(), status = page.status, "Rendered page");

    let status = if page.status == 404 {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };
    let mut response = Response::new(Body::from(page.body));
    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static(page.content_type),
    );
    Ok(response)
}
