use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::clients::search_index;
use crate::models::PhotoDocument;
use crate::query::keywords::extract_keywords;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// GET /api/search?q=... - Free-text photo search:
///   1. Keyword extraction (intent service, tokenizer fallback)
///   2. OR query against the search index (exact + prefix wildcard per keyword)
///   3. Hits mapped back to photo documents, backend relevance order kept
///
/// Always answers 200 with a JSON array: a missing/empty `q`, zero extracted
/// keywords, and a failing search backend all degrade to `[]`.
pub async fn search(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Response {
    let query = params.q.unwrap_or_default();
    let query = query.trim();
    if query.is_empty() {
        tracing::warn!("No query parameter provided");
        return with_cors(StatusCode::OK, Json(Vec::<PhotoDocument>::new()));
    }

    tracing::info!("Search query: {query}");

    let keywords = extract_keywords(&state.http_client, &state.config.intent, query).await;
    tracing::info!("Extracted keywords: {:?}", keywords);

    if keywords.is_empty() {
        return with_cors(StatusCode::OK, Json(Vec::<PhotoDocument>::new()));
    }

    let photos =
        match search_index::search_photos(&state.http_client, &state.config, &keywords).await {
            Ok(photos) => photos,
            Err(e) => {
                tracing::error!("Search backend failed, returning empty results: {e:#}");
                Vec::new()
            }
        };

    tracing::info!("Found {} matching photos", photos.len());
    with_cors(StatusCode::OK, Json(photos))
}

/// OPTIONS /api/search - CORS preflight, fixed permissive headers.
pub async fn preflight() -> impl IntoResponse {
    (
        StatusCode::OK,
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                "Content-Type,Authorization,X-Api-Key,x-custom-labels",
            ),
            (
                header::ACCESS_CONTROL_ALLOW_METHODS,
                "GET,POST,PUT,DELETE,OPTIONS",
            ),
        ],
    )
}

fn with_cors<R: IntoResponse>(status: StatusCode, body: R) -> Response {
    (status, [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")], body).into_response()
}
