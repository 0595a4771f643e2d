//! # photo-search
//!
//! A Rust web service for a natural-language photo album: uploaded photos
//! are labeled by a vision service and indexed; free-text queries are turned
//! into normalized keywords and matched against those labels.
//!
//! ## Architecture
//!
//! Two independent request paths share the label/keyword pipeline:
//!
//! ```text
//!   Ingestion                              Search
//!   ─────────                              ──────
//!   upload event batch                     GET /api/search?q=...
//!        │                                      │
//!        ▼                                      ▼
//!   vision label detection             keyword extraction
//!   (max 10, confidence ≥ 50)          (intent service, tokenizer fallback)
//!        │                                      │
//!        ▼                                      ▼
//!   custom-label metadata              suffix-stripping normalization
//!   (comma-separated, optional)              │
//!        │                                      ▼
//!        ▼                             bool/should OR query
//!   merge: lowercase, trim, dedup      (exact match + "<kw>*" wildcard
//!        │                              per keyword, min_should_match 1)
//!        ▼                                      │
//!   document write to search index             ▼
//!                                       hits → PhotoDocument JSON array
//! ```
//!
//! Labels are indexed unstemmed; only query keywords are normalized. The
//! per-keyword wildcard clause bridges that asymmetry (`cat*` matches the
//! indexed label `cats`).
//!
//! ## Module Overview
//!
//! - [`config`] - Environment-based configuration for the server and the
//!   collaborator endpoints
//! - [`models`] - Shared data types: `PhotoDocument`, the ingestion envelope,
//!   request/response types
//! - [`query`] - Keyword normalization and extraction (intent service with
//!   stopword-tokenizer fallback)
//! - [`indexing`] - Label merging and per-photo document indexing with
//!   fail-fast batch semantics
//! - [`clients`] - Typed HTTP clients for the vision, metadata, intent, and
//!   search-index collaborators
//! - [`api`] - Axum HTTP handlers for ingestion and search
//! - [`state`] - Shared application state: config plus a pooled HTTP client
//! - [`error`] - The fatal `IndexError` kinds; everything else degrades

pub mod api;
pub mod clients;
pub mod config;
pub mod error;
pub mod indexing;
pub mod models;
pub mod query;
pub mod state;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the service router; shared by `main` and the integration tests.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/search",
            get(api::search::search).options(api::search::preflight),
        )
        .route("/api/ingest", post(api::ingest::ingest))
        .with_state(state)
}
