//! Ingestion Module
//!
//! The write side of the gateway: accepting document payloads (metadata plus
//! an optional base64-encoded binary), assigning each one a definitive id,
//! and handing it to the storage engine's ingest pipeline.
//!
//! ## Responsibilities
//! - **Identity**: Returning the caller-supplied id unchanged, or minting a
//!   time-based one when none was given.
//! - **Gateway**: The single ingest call: assign id, write through the
//!   attachment-extraction pipeline, request synchronous visibility.
//! - **API**: Exposing `POST /search/index` and `DELETE /search/index` via
//!   the Axum web server.
//!
//! ## Submodules
//! - **`identity`**: Document id assignment.
//! - **`gateway`**: Ingestion orchestration against the engine client.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Data Transfer Objects (DTOs) for API communication.

pub mod gateway;
pub mod handlers;
pub mod identity;
pub mod types;

#[cfg(test)]
mod tests;
