//! Object-metadata collaborator: custom labels attached at upload time.
//!
//! Uploads may carry a user-supplied `customlabels` metadata entry, a
//! comma-separated string. Failures here are the caller's to degrade; a
//! photo with unreachable metadata still gets its vision labels indexed.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::config::VisionConfig;

#[derive(Deserialize)]
struct HeadObjectResponse {
    #[serde(rename = "Metadata", default)]
    metadata: serde_json::Map<String, serde_json::Value>,
}

/// Fetch the raw custom-label string for a stored object, if any.
pub async fn custom_labels(
    client: &reqwest::Client,
    config: &VisionConfig,
    bucket: &str,
    object_key: &str,
) -> Result<Option<String>> {
    let url = format!("{}/objects/{bucket}/{object_key}/head", config.metadata_endpoint);

    let resp = client
        .get(&url)
        .send()
        .await
        .context("Failed to call object-metadata API")?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        anyhow::bail!("Object-metadata API returned {status}: {body}");
    }

    let body: HeadObjectResponse = resp
        .json()
        .await
        .context("Failed to parse object-metadata response")?;

    Ok(body
        .metadata
        .get("customlabels")
        .and_then(|v| v.as_str())
        .map(|s| s.to_string()))
}
