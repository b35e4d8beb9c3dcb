use super::types::{EngineConfig, EngineError, EngineInfo, SearchEnvelope};
use crate::ingest::types::IndexableDocument;
use crate::search::types::{Hit, SearchBody};

/// Name of the engine-side ingest pipeline that extracts text from binary
/// attachments (PDFs and friends) before indexing.
const ATTACHMENT_PIPELINE: &str = "attachments";

/// HTTP client for one storage engine node and one document index.
///
/// The underlying reqwest client is cheap to clone and safe for concurrent
/// use, so a single `EngineClient` is shared process-wide behind an `Arc`.
pub struct EngineClient {
    http: reqwest::Client,
    config: EngineConfig,
}

impl EngineClient {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(config.insecure_tls)
            .build()?;

        Ok(Self { http, config })
    }

    /// Executes a structured search request and unwraps the hit envelope.
    pub async fn search(&self, body: &SearchBody) -> Result<Vec<Hit>, EngineError> {
        let url = format!(
            "{}/{}/_search",
            self.base_url(),
            self.config.index
        );

        let response = self.with_auth(self.http.post(url)).json(body).send().await?;
        let envelope: SearchEnvelope = Self::read_json(response).await?;

        let hits = envelope
            .hits
            .hits
            .into_iter()
            .map(|hit| Hit {
                id: hit.id,
                score: hit.score,
                source: hit.source,
            })
            .collect();

        Ok(hits)
    }

    /// Writes a document under the given id.
    ///
    /// Always routes through the attachment-extraction pipeline so binary
    /// payloads become indexable text engine-side, and requests a synchronous
    /// refresh so the document is searchable as soon as this call returns.
    pub async fn index_document(
        &self,
        id: &str,
        doc: &IndexableDocument,
    ) -> Result<(), EngineError> {
        let url = format!(
            "{}/{}/_doc/{}",
            self.base_url(),
            self.config.index,
            id
        );

        let response = self
            .with_auth(self.http.put(url))
            .query(&[("pipeline", ATTACHMENT_PIPELINE), ("refresh", "true")])
            .json(doc)
            .send()
            .await?;

        Self::check_status(response).await?;
        Ok(())
    }

    /// Deletes the entire document index. Returns the engine's raw
    /// acknowledgement body.
    pub async fn delete_index(&self) -> Result<serde_json::Value, EngineError> {
        let url = format!("{}/{}", self.base_url(), self.config.index);

        let response = self.with_auth(self.http.delete(url)).send().await?;
        Self::read_json(response).await
    }

    /// Root info endpoint, used to verify connectivity at startup.
    pub async fn info(&self) -> Result<EngineInfo, EngineError> {
        let response = self
            .with_auth(self.http.get(self.base_url().to_string()))
            .send()
            .await?;
        Self::read_json(response).await
    }

    fn base_url(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    fn with_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.username {
            Some(username) => request.basic_auth(username, self.config.password.as_deref()),
            None => request,
        }
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, EngineError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(EngineError::Rejected {
            status: status.as_u16(),
            body,
        })
    }

    async fn read_json<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, EngineError> {
        let response = Self::check_status(response).await?;
        Ok(response.json::<T>().await?)
    }
}
