//! Storage Engine Collaborator
//!
//! HTTP client for the external OpenSearch-compatible document store. The
//! engine owns all persistence, relevance scoring, and attachment extraction;
//! this module only speaks its REST API and maps its wire envelopes into the
//! gateway's own DTOs.
//!
//! ## Submodules
//! - **`client`**: The reqwest-based `EngineClient` (search, index document,
//!   delete index, info ping).
//! - **`types`**: Configuration, error taxonomy, and the engine's raw
//!   response envelopes.

pub mod client;
pub mod types;
