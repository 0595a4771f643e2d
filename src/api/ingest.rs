use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::indexing::indexer;
use crate::models::{IngestEvent, IngestResponse};
use crate::state::AppState;

/// POST /api/ingest - Index a batch of uploaded photos.
///
/// Accepts the storage-event notification envelope and processes each
/// reference sequentially, fail-fast: the first indexing failure aborts the
/// rest of the batch and is returned as a 500 so the upstream trigger can
/// decide on redelivery. Documents written before the failure stay written.
pub async fn ingest(
    State(state): State<AppState>,
    Json(event): Json<IngestEvent>,
) -> Result<Json<IngestResponse>, (StatusCode, Json<serde_json::Value>)> {
    let photos = event.photo_refs();
    tracing::info!("Ingesting batch of {} photo(s)", photos.len());

    match indexer::index_batch(&state, &photos).await {
        Ok(indexed) => Ok(Json(IngestResponse { indexed })),
        Err(e) => {
            tracing::error!("Ingestion failed: {e}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": e.to_string() })),
            ))
        }
    }
}
