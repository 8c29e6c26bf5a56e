//! Page admin endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use hostel_store::{NewPage, Page};

use crate::error::ServerError;
use crate::state::AppState;

/// Handle GET /api/pages.
pub(crate) async fn list(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Page>>, ServerError> {
    Ok(Json(state.store.pages().await?))
}

/// Handle POST /api/pages.
pub(crate) async fn create(
    State(state): State<Arc<AppState>>,
    Json(new): Json<NewPage>,
) -> Result<Json<Page>, ServerError> {
    let created = state
        .store
        .create_page(&new)
        .await
        .map_err(|e| ServerError::Rejected(e.to_string()))?;
    tracing::info!(id = created.id, path = %created.relative_path, "Created page");
    Ok(Json(created))
}
