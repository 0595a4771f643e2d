//! Keyword extraction from free-text search queries.
//!
//! The intent-extraction service is tried first; when it is unconfigured,
//! unreachable, or returns no slot values, a stopword-based tokenizer takes
//! over. The service is never allowed to fail a search.

use crate::clients::intent;
use crate::config::IntentConfig;
use crate::query::normalize::normalize_keyword;

/// Words dropped by the fallback tokenizer. Query filler, not photo content.
const STOPWORDS: &[&str] = &[
    "show", "me", "find", "photos", "with", "of", "the", "a", "an", "and", "or", "in", "on", "at",
    "to", "for",
];

/// What the intent-extraction round trip produced. `Unavailable` (not
/// configured, or the call failed) and `Empty` (call succeeded, no slot
/// values) both route to the fallback tokenizer.
enum SlotOutcome {
    Unavailable,
    Empty,
    Values(Vec<String>),
}

/// Extract normalized keywords from a free-text query.
///
/// Keywords preserve the order they were produced in and are not
/// deduplicated; duplicate keywords only add redundant OR clauses.
/// The result is empty only when `query` is empty.
pub async fn extract_keywords(
    client: &reqwest::Client,
    config: &IntentConfig,
    query: &str,
) -> Vec<String> {
    let outcome = match (&config.bot_id, &config.bot_alias_id) {
        (Some(bot_id), Some(bot_alias_id)) => {
            match intent::recognize_text(client, config, bot_id, bot_alias_id, query).await {
                Ok(values) if values.is_empty() => SlotOutcome::Empty,
                Ok(values) => SlotOutcome::Values(values),
                Err(e) => {
                    tracing::warn!("Intent extraction failed, falling back to tokenization: {e}");
                    SlotOutcome::Unavailable
                }
            }
        }
        _ => {
            tracing::debug!("Intent extraction not configured, using fallback tokenization");
            SlotOutcome::Unavailable
        }
    };

    let candidates = match outcome {
        SlotOutcome::Values(values) => values.into_iter().map(|v| v.to_lowercase()).collect(),
        SlotOutcome::Unavailable | SlotOutcome::Empty => fallback_tokenize(query),
    };

    candidates
        .iter()
        .map(|c| normalize_keyword(c))
        .collect()
}

/// Stopword-based tokenization used when slot extraction yields nothing.
///
/// Tokens shorter than three characters and stopwords are dropped. If that
/// leaves nothing, the whole trimmed query becomes the single candidate so a
/// query like "it" still produces a clause instead of matching everything.
fn fallback_tokenize(query: &str) -> Vec<String> {
    let lowered = query.to_lowercase();
    let tokens: Vec<String> = lowered
        .split_whitespace()
        .filter(|t| t.len() > 2 && !STOPWORDS.contains(t))
        .map(|t| t.to_string())
        .collect();

    if !tokens.is_empty() {
        return tokens;
    }

    let trimmed = lowered.trim();
    if trimmed.is_empty() {
        Vec::new()
    } else {
        vec![trimmed.to_string()]
    }
}
