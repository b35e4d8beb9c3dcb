use crate::engine::types::EngineError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A document as submitted by the client for indexing.
///
/// Every field is optional: a bare upload of a binary blob with a title is
/// the common case. `data` carries the base64-encoded binary (e.g. a PDF);
/// the engine's attachment pipeline turns it into indexable text, the client
/// never parses binaries itself. Absent fields are omitted from the engine
/// write entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexableDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<String>,
}

/// Response returned to the client after a successful ingest.
///
/// Carries the definitive document id, whether it was caller-supplied or
/// assigned by the gateway.
#[derive(Debug, Serialize, Deserialize)]
pub struct IndexedResponse {
    pub indexed: String,
}

/// Failure ingesting a document. Propagated to the caller unmodified; the
/// gateway never retries a rejected write.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("storage engine rejected the write: {0}")]
    Engine(#[from] EngineError),
}
