//! Intent-extraction collaborator (Lex-style `RecognizeText` API).
//!
//! The service answers with zero or more interpretations; only the first
//! interpretation's intent slots are consulted. Every nested field is
//! optional on the wire, so the whole response is decoded into typed structs
//! here and the rest of the crate never sees raw JSON.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::IntentConfig;

#[derive(Serialize)]
struct RecognizeTextRequest<'a> {
    #[serde(rename = "sessionId")]
    session_id: String,
    #[serde(rename = "localeId")]
    locale_id: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct RecognizeTextResponse {
    #[serde(default)]
    interpretations: Vec<Interpretation>,
}

#[derive(Deserialize)]
struct Interpretation {
    intent: Option<Intent>,
}

#[derive(Deserialize)]
struct Intent {
    #[serde(default)]
    slots: serde_json::Map<String, serde_json::Value>,
}

#[derive(Deserialize)]
struct Slot {
    value: Option<SlotValue>,
}

#[derive(Deserialize)]
struct SlotValue {
    #[serde(rename = "originalValue")]
    original_value: String,
}

/// Send the raw query text to the intent service and return the slot values
/// of the first interpretation, in slot-iteration order. An empty vec means
/// the service answered but filled no slots.
pub async fn recognize_text(
    client: &reqwest::Client,
    config: &IntentConfig,
    bot_id: &str,
    bot_alias_id: &str,
    text: &str,
) -> Result<Vec<String>> {
    let url = format!(
        "{}/bots/{bot_id}/botAliases/{bot_alias_id}/text",
        config.endpoint
    );

    let req = RecognizeTextRequest {
        session_id: format!("search-{}", Uuid::new_v4()),
        locale_id: &config.locale_id,
        text,
    };

    let resp = client
        .post(&url)
        .json(&req)
        .send()
        .await
        .context("Failed to call intent-extraction API")?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        anyhow::bail!("Intent-extraction API returned {status}: {body}");
    }

    let body: RecognizeTextResponse = resp
        .json()
        .await
        .context("Failed to parse intent-extraction response")?;

    Ok(slot_values(&body))
}

fn slot_values(response: &RecognizeTextResponse) -> Vec<String> {
    let Some(interpretation) = response.interpretations.first() else {
        return Vec::new();
    };
    let Some(intent) = &interpretation.intent else {
        return Vec::new();
    };

    let mut values = Vec::new();
    for slot_json in intent.slots.values() {
        // Unfilled slots arrive as JSON null; filled ones carry the value
        let Ok(slot) = serde_json::from_value::<Option<Slot>>(slot_json.clone()) else {
            continue;
        };
        if let Some(value) = slot.and_then(|s| s.value) {
            if !value.original_value.is_empty() {
                values.push(value.original_value);
            }
        }
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Vec<String> {
        let response: RecognizeTextResponse = serde_json::from_str(json).unwrap();
        slot_values(&response)
    }

    #[test]
    fn test_filled_slots_yield_original_values() {
        let values = parse(
            r#"{
            "interpretations": [{
                "intent": {
                    "name": "SearchIntent",
                    "slots": {
                        "Keyword": {"value": {"originalValue": "Cats", "interpretedValue": "cat"}}
                    }
                }
            }]
        }"#,
        );
        assert_eq!(values, vec!["Cats"]);
    }

    #[test]
    fn test_null_slots_are_skipped() {
        let values = parse(
            r#"{
            "interpretations": [{
                "intent": {
                    "slots": {
                        "KeywordOne": {"value": {"originalValue": "dogs"}},
                        "KeywordTwo": null
                    }
                }
            }]
        }"#,
        );
        assert_eq!(values, vec!["dogs"]);
    }

    #[test]
    fn test_no_interpretations_is_empty() {
        assert!(parse(r#"{"interpretations": []}"#).is_empty());
        assert!(parse(r#"{}"#).is_empty());
    }

    #[test]
    fn test_interpretation_without_intent_is_empty() {
        assert!(parse(r#"{"interpretations": [{"intent": null}]}"#).is_empty());
    }

    #[test]
    fn test_slot_without_value_is_skipped() {
        let values = parse(
            r#"{
            "interpretations": [{
                "intent": {"slots": {"Keyword": {"value": null}}}
            }]
        }"#,
        );
        assert!(values.is_empty());
    }

    #[test]
    fn test_empty_original_value_is_skipped() {
        let values = parse(
            r#"{
            "interpretations": [{
                "intent": {"slots": {"Keyword": {"value": {"originalValue": ""}}}}
            }]
        }"#,
        );
        assert!(values.is_empty());
    }

    #[test]
    fn test_only_first_interpretation_is_used() {
        let values = parse(
            r#"{
            "interpretations": [
                {"intent": {"slots": {}}},
                {"intent": {"slots": {"Keyword": {"value": {"originalValue": "birds"}}}}}
            ]
        }"#,
        );
        assert!(values.is_empty());
    }
}
