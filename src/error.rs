use thiserror::Error;

/// Fatal ingestion errors. Everything else in the pipeline degrades in place
/// (metadata lookup failures become empty custom labels, intent-extraction
/// failures fall back to tokenization, search-backend failures become empty
/// results) and is logged rather than surfaced as a typed error.
#[derive(Debug, Error)]
pub enum IndexError {
    /// The vision service could not produce labels for the object.
    #[error("label detection failed for {object_key}: {detail}")]
    DetectionFailed { object_key: String, detail: String },

    /// The search index did not acknowledge the document write.
    #[error("indexing failed for {object_key}: {response}")]
    IndexingFailed {
        object_key: String,
        response: String,
    },
}
