use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server bind address
    pub bind_addr: String,
    /// Search-index backend configuration
    pub search_index: SearchIndexConfig,
    /// Vision label-detection service configuration
    pub vision: VisionConfig,
    /// Intent-extraction service configuration
    pub intent: IntentConfig,
    /// Connect timeout for collaborator calls in seconds
    pub connect_timeout_secs: u64,
    /// Total request timeout for collaborator calls in seconds
    pub request_timeout_secs: u64,
}

/// Configuration for the document search-index backend (OpenSearch-compatible).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchIndexConfig {
    /// Base URL of the search endpoint (e.g. "https://search.example.com")
    pub endpoint: String,
    /// Index name documents are written to and queried from
    pub index: String,
    /// Basic-auth username
    pub username: String,
    /// Basic-auth password
    pub password: Option<String>,
}

/// Configuration for the vision label-detection service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisionConfig {
    /// Base URL of the detection API
    pub endpoint: String,
    /// Base URL of the object-metadata API (custom labels)
    pub metadata_endpoint: String,
    /// Maximum labels requested per image
    pub max_labels: u32,
    /// Minimum confidence (percentage) requested per label
    pub min_confidence: f32,
}

/// Configuration for the natural-language intent-extraction service.
/// If `bot_id` or `bot_alias_id` is None the service is treated as
/// unavailable and keyword extraction falls back to tokenization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentConfig {
    /// Base URL of the intent-extraction API
    pub endpoint: String,
    pub bot_id: Option<String>,
    pub bot_alias_id: Option<String>,
    /// Locale sent with every extraction request
    pub locale_id: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:9400".to_string(),
            search_index: SearchIndexConfig::default(),
            vision: VisionConfig::default(),
            intent: IntentConfig::default(),
            connect_timeout_secs: 3,
            request_timeout_secs: 5,
        }
    }
}

impl Default for SearchIndexConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:9200".to_string(),
            index: "photos".to_string(),
            username: "admin".to_string(),
            password: None,
        }
    }
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:9500".to_string(),
            metadata_endpoint: "http://localhost:9501".to_string(),
            max_labels: 10,
            min_confidence: 50.0,
        }
    }
}

impl Default for IntentConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:9600".to_string(),
            bot_id: None,
            bot_alias_id: None,
            locale_id: "en_US".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("PHOTO_SEARCH_BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Ok(endpoint) = std::env::var("SEARCH_INDEX_ENDPOINT") {
            config.search_index.endpoint = endpoint;
        }
        if let Ok(index) = std::env::var("SEARCH_INDEX_NAME") {
            config.search_index.index = index;
        }
        if let Ok(user) = std::env::var("SEARCH_INDEX_USERNAME") {
            config.search_index.username = user;
        }
        if let Ok(pass) = std::env::var("SEARCH_INDEX_PASSWORD") {
            config.search_index.password = Some(pass);
        }
        if let Ok(endpoint) = std::env::var("VISION_ENDPOINT") {
            config.vision.endpoint = endpoint;
        }
        if let Ok(endpoint) = std::env::var("VISION_METADATA_ENDPOINT") {
            config.vision.metadata_endpoint = endpoint;
        }
        if let Ok(val) = std::env::var("VISION_MAX_LABELS") {
            if let Ok(v) = val.parse() {
                config.vision.max_labels = v;
            }
        }
        if let Ok(val) = std::env::var("VISION_MIN_CONFIDENCE") {
            if let Ok(v) = val.parse() {
                config.vision.min_confidence = v;
            }
        }
        if let Ok(endpoint) = std::env::var("INTENT_ENDPOINT") {
            config.intent.endpoint = endpoint;
        }
        if let Ok(id) = std::env::var("INTENT_BOT_ID") {
            config.intent.bot_id = Some(id);
        }
        if let Ok(id) = std::env::var("INTENT_BOT_ALIAS_ID") {
            config.intent.bot_alias_id = Some(id);
        }
        if let Ok(locale) = std::env::var("INTENT_LOCALE_ID") {
            config.intent.locale_id = locale;
        }
        if let Ok(val) = std::env::var("PHOTO_SEARCH_CONNECT_TIMEOUT_SECS") {
            if let Ok(v) = val.parse::<u64>() {
                config.connect_timeout_secs = v.min(10);
            }
        }
        if let Ok(val) = std::env::var("PHOTO_SEARCH_REQUEST_TIMEOUT_SECS") {
            if let Ok(v) = val.parse::<u64>() {
                config.request_timeout_secs = v.min(10); // Cap at 10s
            }
        }

        config
    }

    /// URL for the search-index document-write endpoint.
    pub fn doc_url(&self) -> String {
        format!(
            "{}/{}/_doc",
            self.search_index.endpoint, self.search_index.index
        )
    }

    /// URL for the search-index query endpoint.
    pub fn search_url(&self) -> String {
        format!(
            "{}/{}/_search",
            self.search_index.endpoint, self.search_index.index
        )
    }
}
