//! Page content admin endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use hostel_store::{NewPageContent, PageContent, PageContentPatch};

use crate::error::ServerError;
use crate::state::AppState;

/// Handle GET /api/page-contents.
pub(crate) async fn list(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PageContent>>, ServerError> {
    Ok(Json(state.store.page_contents().await?))
}

/// Handle POST /api/page-contents.
pub(crate) async fn create(
    State(state): State<Arc<AppState>>,
    Json(new): Json<NewPageContent>,
) -> Result<Json<PageContent>, ServerError> {
    let created = state
        .store
        .create_page_content(&new)
        .await
        .map_err(|e| ServerError::Rejected(e.to_string()))?;
    tracing::info!(id = created.id, language = %created.language, "Created page content");
    Ok(Json(created))
}

/// Handle PATCH /api/page-contents/{id}.
///
/// Updates only the fields present in the body.
pub(crate) async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(patch): Json<PageContentPatch>,
) -> Result<StatusCode, ServerError> {
    state
        .store
        .update_page_content(id, &patch)
        .await
        .map_err(|e| ServerError::Rejected(e.to_string()))?;
    tracing::info!(id, "Updated page content");
    Ok(StatusCode::NO_CONTENT)
}
