//! Ingestion Module Tests
//!
//! Validates identity assignment, the ingest gateway contract, and the DTO
//! wire shapes.
//!
//! ## Test Scopes
//! - **Identity**: Caller-supplied ids pass through; generated ids are
//!   unique and time-ordered.
//! - **Gateway**: Drives a real `EngineClient` against a stub engine server
//!   to verify the pipeline/refresh parameters and error propagation.
//! - **Serialization**: Optional DTO fields are omitted, not nulled.

#[cfg(test)]
mod tests {
    use crate::engine::client::EngineClient;
    use crate::engine::types::EngineConfig;
    use crate::ingest::gateway;
    use crate::ingest::identity::assign_id;
    use crate::ingest::types::{IndexableDocument, IndexedResponse, IngestError};
    use axum::extract::{Path, Query, State};
    use axum::http::StatusCode;
    use axum::routing::put;
    use axum::{Json, Router};
    use std::collections::HashMap;
    use std::collections::HashSet;
    use std::sync::{Arc, Mutex};

    fn empty_doc() -> IndexableDocument {
        IndexableDocument {
            id: None,
            title: None,
            body: None,
            tags: None,
            data: None,
            published: None,
        }
    }

    // ============================================================
    // IDENTITY TESTS - assign_id
    // ============================================================

    #[test]
    fn test_assign_id_keeps_supplied_id() {
        assert_eq!(assign_id(Some("doc-7")), "doc-7");
    }

    #[test]
    fn test_assign_id_generates_when_absent() {
        let id = assign_id(None);

        assert!(!id.is_empty());
        assert!(id.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_assign_id_treats_empty_string_as_absent() {
        let id = assign_id(Some(""));

        assert!(!id.is_empty());
    }

    #[test]
    fn test_assign_id_burst_yields_distinct_ids() {
        // Far more calls than milliseconds will elapse; the monotonic bump
        // must keep them all distinct.
        let ids: HashSet<String> = (0..10_000).map(|_| assign_id(None)).collect();

        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn test_assign_id_generated_ids_are_increasing() {
        let a: u64 = assign_id(None).parse().unwrap();
        let b: u64 = assign_id(None).parse().unwrap();

        assert!(b > a);
    }

    // ============================================================
    // SERIALIZATION TESTS - DTO wire shapes
    // ============================================================

    #[test]
    fn test_document_omits_absent_fields() {
        let doc = IndexableDocument {
            title: Some("report.pdf".to_string()),
            data: Some("aGVsbG8=".to_string()),
            ..empty_doc()
        };

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["title"], "report.pdf");
        assert_eq!(json["data"], "aGVsbG8=");
        assert!(json.get("id").is_none());
        assert!(json.get("body").is_none());
        assert!(json.get("tags").is_none());
        assert!(json.get("published").is_none());
    }

    #[test]
    fn test_document_deserializes_full_payload() {
        let doc: IndexableDocument = serde_json::from_str(
            r#"{
                "id": "12",
                "title": "Notes",
                "body": "plain text",
                "tags": ["a", "b"],
                "data": "aGVsbG8=",
                "published": "2024-01-01"
            }"#,
        )
        .unwrap();

        assert_eq!(doc.id.as_deref(), Some("12"));
        assert_eq!(doc.tags.as_deref(), Some(&["a".to_string(), "b".to_string()][..]));
    }

    #[test]
    fn test_indexed_response_wire_shape() {
        let response = IndexedResponse {
            indexed: "1700000000000".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({"indexed": "1700000000000"}));
    }

    // ============================================================
    // GATEWAY TESTS - ingest against a stub engine
    // ============================================================

    #[derive(Debug, Clone)]
    struct CapturedWrite {
        id: String,
        params: HashMap<String, String>,
        body: serde_json::Value,
    }

    type WriteLog = Arc<Mutex<Vec<CapturedWrite>>>;

    /// Spawns a stub engine accepting `PUT /documents/_doc/{id}` and
    /// recording every write. Returns its base URL and the write log.
    async fn spawn_stub_engine(reject_writes: bool) -> (String, WriteLog) {
        let log: WriteLog = Arc::new(Mutex::new(Vec::new()));

        async fn handle_write(
            State((log, reject)): State<(WriteLog, bool)>,
            Path(id): Path<String>,
            Query(params): Query<HashMap<String, String>>,
            Json(body): Json<serde_json::Value>,
        ) -> (StatusCode, Json<serde_json::Value>) {
            if reject {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(serde_json::json!({"error": "mapper_parsing_exception"})),
                );
            }
            log.lock().unwrap().push(CapturedWrite { id, params, body });
            (StatusCode::CREATED, Json(serde_json::json!({"result": "created"})))
        }

        let app = Router::new()
            .route("/documents/_doc/{id}", put(handle_write))
            .with_state((log.clone(), reject_writes));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}", addr), log)
    }

    fn stub_client(base_url: &str) -> EngineClient {
        EngineClient::new(EngineConfig {
            base_url: base_url.to_string(),
            index: "documents".to_string(),
            username: None,
            password: None,
            insecure_tls: false,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_ingest_assigns_id_and_routes_through_pipeline() {
        // ARRANGE
        let (base_url, log) = spawn_stub_engine(false).await;
        let engine = stub_client(&base_url);

        let doc = IndexableDocument {
            title: Some("report.pdf".to_string()),
            data: Some("aGVsbG8=".to_string()),
            ..empty_doc()
        };

        // ACT
        let response = gateway::ingest(&engine, doc).await.unwrap();

        // ASSERT: a non-empty id was assigned and returned
        assert!(!response.indexed.is_empty());

        let writes = log.lock().unwrap();
        assert_eq!(writes.len(), 1);
        let write = &writes[0];

        // The engine write used the assigned id and the extraction pipeline
        // with synchronous visibility.
        assert_eq!(write.id, response.indexed);
        assert_eq!(write.params.get("pipeline").map(String::as_str), Some("attachments"));
        assert_eq!(write.params.get("refresh").map(String::as_str), Some("true"));
        assert_eq!(write.body["title"], "report.pdf");
        assert_eq!(write.body["data"], "aGVsbG8=");
    }

    #[tokio::test]
    async fn test_ingest_keeps_caller_supplied_id() {
        // ARRANGE
        let (base_url, log) = spawn_stub_engine(false).await;
        let engine = stub_client(&base_url);

        let doc = IndexableDocument {
            id: Some("my-doc".to_string()),
            title: Some("Notes".to_string()),
            ..empty_doc()
        };

        // ACT
        let response = gateway::ingest(&engine, doc).await.unwrap();

        // ASSERT
        assert_eq!(response.indexed, "my-doc");
        assert_eq!(log.lock().unwrap()[0].id, "my-doc");
    }

    #[tokio::test]
    async fn test_ingest_propagates_engine_rejection() {
        // ARRANGE: stub rejects every write
        let (base_url, log) = spawn_stub_engine(true).await;
        let engine = stub_client(&base_url);

        // ACT
        let result = gateway::ingest(&engine, empty_doc()).await;

        // ASSERT: the rejection surfaces unmodified, nothing was retried
        match result {
            Err(IngestError::Engine(err)) => {
                assert!(err.to_string().contains("400"));
            }
            other => panic!("expected engine rejection, got {:?}", other.map(|r| r.indexed)),
        }
        assert!(log.lock().unwrap().is_empty());
    }
}
