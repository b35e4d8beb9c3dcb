use super::identity::assign_id;
use super::types::{IndexableDocument, IndexedResponse, IngestError};
use crate::engine::client::EngineClient;

/// Ingests one document into the storage engine.
///
/// The definitive id is resolved before the engine call and returned to the
/// caller either way. The write goes through the engine's attachment
/// pipeline and requests synchronous visibility, so the document is
/// searchable the moment this returns. A rejected write propagates as
/// `IngestError` with no retry.
pub async fn ingest(
    engine: &EngineClient,
    doc: IndexableDocument,
) -> Result<IndexedResponse, IngestError> {
    let id = assign_id(doc.id.as_deref());

    engine.index_document(&id, &doc).await?;

    Ok(IndexedResponse { indexed: id })
}
