//! Vision label-detection collaborator.
//!
//! The detection limits (`maxLabels`, `minConfidence`) are part of the
//! request: the service is asked for at most N labels above the confidence
//! floor, rather than filtering its answer afterwards.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::VisionConfig;

/// One machine-detected label, arbitrary case, confidence on a 0-100 scale.
#[derive(Debug, Clone, Deserialize)]
pub struct DetectedLabel {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Confidence")]
    pub confidence: f32,
}

#[derive(Serialize)]
struct DetectLabelsRequest<'a> {
    #[serde(rename = "Bucket")]
    bucket: &'a str,
    #[serde(rename = "ObjectKey")]
    object_key: &'a str,
    #[serde(rename = "MaxLabels")]
    max_labels: u32,
    #[serde(rename = "MinConfidence")]
    min_confidence: f32,
}

#[derive(Deserialize)]
struct DetectLabelsResponse {
    #[serde(rename = "Labels", default)]
    labels: Vec<DetectedLabel>,
}

/// Ask the vision service for labels on a stored image.
pub async fn detect_labels(
    client: &reqwest::Client,
    config: &VisionConfig,
    bucket: &str,
    object_key: &str,
) -> Result<Vec<DetectedLabel>> {
    let url = format!("{}/detect-labels", config.endpoint);

    let req = DetectLabelsRequest {
        bucket,
        object_key,
        max_labels: config.max_labels,
        min_confidence: config.min_confidence,
    };

    let resp = client
        .post(&url)
        .json(&req)
        .send()
        .await
        .context("Failed to call vision detection API")?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        anyhow::bail!("Vision detection API returned {status}: {body}");
    }

    let body: DetectLabelsResponse = resp
        .json()
        .await
        .context("Failed to parse vision detection response")?;

    Ok(body.labels)
}
