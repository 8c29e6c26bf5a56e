//! Virtual host admin endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use hostel_store::{NewServer, Server};

use crate::error::ServerError;
use crate::state::AppState;

/// Handle GET /api/servers.
pub(crate) async fn list(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Server>>, ServerError> {
    Ok(Json(state.store.servers().await?))
}

/// Handle POST /api/servers.
///
/// Created hosts are never the default; the default host is
/// provisioned with the schema.
pub(crate) async fn create(
    State(state): State<Arc<AppState>>,
    Json(new): Json<NewServer>,
) -> Result<Json<Server>, ServerError> {
    let created = state
        .store
        .create_server(&new)
        .await
        .map_err(|e| ServerError::Rejected(e.to_string()))?;
    tracing::info!(id = created.id, hostname = ?created.hostname, "Created server");
    Ok(Json(created))
}
