//! Document Search Gateway Library
//!
//! This library crate defines the core modules of the search gateway. It serves
//! as the foundation for the server binary (`main.rs`) and the demo client.
//!
//! ## Architecture Modules
//! The system is composed of four loosely coupled subsystems:
//!
//! - **`engine`**: The storage engine collaborator. A thin HTTP client that
//!   executes structured queries and document writes against an
//!   OpenSearch-compatible engine. The engine itself is external; this module
//!   only speaks its REST API.
//! - **`search`**: The query pipeline. Translates free-text input into the
//!   engine's structured query container, clamps pagination, and exposes the
//!   read-side HTTP handler.
//! - **`ingest`**: The write pipeline. Assigns document identity, routes binary
//!   payloads through the engine's attachment-extraction pipeline, and exposes
//!   the index/delete HTTP handlers.
//! - **`orchestrator`**: The client-side search loop. Debounces rapidly
//!   changing query text and guarantees that a stale response never overwrites
//!   the result of a newer query.

pub mod engine;
pub mod ingest;
pub mod orchestrator;
pub mod search;
