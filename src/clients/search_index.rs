//! Search-index collaborator: document writes and the OR keyword query.
//!
//! Indexed labels are stored unstemmed while query keywords arrive
//! normalized, so each keyword contributes two clauses: an exact match and a
//! prefix wildcard (`cat` → `cat*`, which still matches the indexed label
//! `cats`). All clauses across all keywords are OR'd with
//! `minimum_should_match: 1`; a multi-keyword query is a union search, not
//! an intersection.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::models::PhotoDocument;

#[derive(Debug, Serialize)]
struct SearchBody {
    query: QueryNode,
}

#[derive(Debug, Serialize)]
struct QueryNode {
    #[serde(rename = "bool")]
    boolean: BoolQuery,
}

#[derive(Debug, Serialize)]
struct BoolQuery {
    should: Vec<ShouldClause>,
    minimum_should_match: u32,
}

/// Externally tagged so each variant serializes to the backend's clause
/// shape: `{"match": {"labels": ...}}` / `{"wildcard": {"labels": ...}}`.
#[derive(Debug, Serialize)]
enum ShouldClause {
    #[serde(rename = "match")]
    Match(LabelsField),
    #[serde(rename = "wildcard")]
    Wildcard(LabelsField),
}

#[derive(Debug, Serialize)]
struct LabelsField {
    labels: String,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    hits: HitsEnvelope,
}

#[derive(Deserialize, Default)]
struct HitsEnvelope {
    #[serde(default)]
    hits: Vec<Hit>,
}

#[derive(Deserialize)]
struct Hit {
    #[serde(rename = "_source")]
    source: Option<PhotoDocument>,
}

fn build_search_body(keywords: &[String]) -> SearchBody {
    let mut should = Vec::with_capacity(keywords.len() * 2);
    for keyword in keywords {
        should.push(ShouldClause::Match(LabelsField {
            labels: keyword.clone(),
        }));
        should.push(ShouldClause::Wildcard(LabelsField {
            labels: format!("{keyword}*"),
        }));
    }
    SearchBody {
        query: QueryNode {
            boolean: BoolQuery {
                should,
                minimum_should_match: 1,
            },
        },
    }
}

fn apply_auth(req: reqwest::RequestBuilder, config: &Config) -> reqwest::RequestBuilder {
    req.basic_auth(
        &config.search_index.username,
        config.search_index.password.as_deref(),
    )
}

/// Write one photo document to the index. Only a 2xx acknowledgment counts
/// as success; anything else surfaces the backend's response body so the
/// caller can report it.
pub async fn write_document(
    client: &reqwest::Client,
    config: &Config,
    document: &PhotoDocument,
) -> Result<()> {
    let resp = apply_auth(client.post(config.doc_url()), config)
        .json(document)
        .send()
        .await
        .context("Failed to call search-index write API")?;

    let status = resp.status();
    if status.is_success() {
        return Ok(());
    }
    let body = resp.text().await.unwrap_or_default();
    anyhow::bail!("Search-index write returned {status}: {body}");
}

/// Run the OR keyword query and map hits back to photo documents.
///
/// An empty keyword list short-circuits to an empty result without touching
/// the backend. Result order is the backend's relevance order, untouched.
pub async fn search_photos(
    client: &reqwest::Client,
    config: &Config,
    keywords: &[String],
) -> Result<Vec<PhotoDocument>> {
    if keywords.is_empty() {
        return Ok(Vec::new());
    }

    let body = build_search_body(keywords);

    let resp = apply_auth(client.post(config.search_url()), config)
        .json(&body)
        .send()
        .await
        .context("Failed to call search-index query API")?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        anyhow::bail!("Search-index query returned {status}: {body}");
    }

    let body: SearchResponse = resp
        .json()
        .await
        .context("Failed to parse search-index response")?;

    Ok(body
        .hits
        .hits
        .into_iter()
        .filter_map(|h| h.source)
        .collect())
}
