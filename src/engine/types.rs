use serde::Deserialize;
use thiserror::Error;

/// Connection settings for the storage engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Base URL of the engine node, e.g. `https://localhost:9200`.
    pub base_url: String,
    /// Name of the document index all operations target.
    pub index: String,
    /// Optional basic-auth credentials.
    pub username: Option<String>,
    pub password: Option<String>,
    /// Accept self-signed certificates. Local engine setups ship with one.
    pub insecure_tls: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_url: "https://localhost:9200".to_string(),
            index: "documents".to_string(),
            username: None,
            password: None,
            insecure_tls: false,
        }
    }
}

/// Failure talking to the storage engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The request never produced a usable response (connectivity, TLS,
    /// malformed body).
    #[error("engine transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The engine answered with a non-success status.
    #[error("engine rejected request ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Raw `_search` response envelope. Only the parts the gateway reads.
#[derive(Debug, Deserialize)]
pub struct SearchEnvelope {
    pub hits: HitsEnvelope,
}

#[derive(Debug, Deserialize)]
pub struct HitsEnvelope {
    pub hits: Vec<EngineHit>,
}

/// A hit exactly as the engine serializes it.
#[derive(Debug, Deserialize)]
pub struct EngineHit {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_score", default)]
    pub score: Option<f64>,
    #[serde(rename = "_source", default)]
    pub source: serde_json::Value,
}

/// Response of the root info endpoint, used by the bootstrap ping.
#[derive(Debug, Deserialize)]
pub struct EngineInfo {
    pub version: EngineVersion,
}

#[derive(Debug, Deserialize)]
pub struct EngineVersion {
    pub number: String,
}
