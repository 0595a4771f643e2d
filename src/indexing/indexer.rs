//! Per-photo document construction and the sequential ingestion batch.

use chrono::Utc;

use crate::clients::{metadata, search_index, vision};
use crate::error::IndexError;
use crate::models::{PhotoDocument, PhotoRef};
use crate::state::AppState;

/// Index a single photo: detect labels, merge in any custom labels, write
/// the document to the search index.
///
/// Metadata retrieval failures degrade to "no custom labels". Detection
/// failures and unacknowledged index writes are fatal for this photo.
pub async fn index_photo(state: &AppState, photo: &PhotoRef) -> Result<PhotoDocument, IndexError> {
    tracing::info!(
        "Indexing photo {} from bucket {}",
        photo.object_key,
        photo.bucket
    );

    let vision_labels = vision::detect_labels(
        &state.http_client,
        &state.config.vision,
        &photo.bucket,
        &photo.object_key,
    )
    .await
    .map_err(|e| IndexError::DetectionFailed {
        object_key: photo.object_key.clone(),
        detail: format!("{e:#}"),
    })?;

    let custom_labels = match metadata::custom_labels(
        &state.http_client,
        &state.config.vision,
        &photo.bucket,
        &photo.object_key,
    )
    .await
    {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(
                "Failed to retrieve metadata for {}, continuing without custom labels: {e}",
                photo.object_key
            );
            None
        }
    };

    let labels = super::labels::merge_labels(&vision_labels, custom_labels.as_deref());
    tracing::info!("Labels to index for {}: {:?}", photo.object_key, labels);

    let document = PhotoDocument {
        object_key: photo.object_key.clone(),
        bucket: photo.bucket.clone(),
        created_timestamp: Utc::now(),
        labels,
    };

    search_index::write_document(&state.http_client, &state.config, &document)
        .await
        .map_err(|e| IndexError::IndexingFailed {
            object_key: photo.object_key.clone(),
            response: format!("{e:#}"),
        })?;

    tracing::info!("Successfully indexed document: {}", photo.object_key);
    Ok(document)
}

/// Process an ingestion batch strictly in order, fail-fast: the first
/// failure aborts the remaining references and is returned to the caller.
/// Documents already written stay written; redelivery is the upstream
/// trigger's concern.
pub async fn index_batch(state: &AppState, photos: &[PhotoRef]) -> Result<usize, IndexError> {
    for photo in photos {
        index_photo(state, photo).await?;
    }
    Ok(photos.len())
}
