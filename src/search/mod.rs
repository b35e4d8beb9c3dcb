//! Search Module
//!
//! The read side of the gateway: turning whatever the user typed into a
//! structured query the storage engine can execute.
//!
//! ## Overview
//! This module implements the query pipeline. It bridges the HTTP API layer
//! with the storage engine collaborator: raw query string and pagination
//! parameters come in, a structured search request body goes out, and the
//! engine's hits come back as plain DTOs.
//!
//! ## Responsibilities
//! - **Translation**: Mapping free text to the engine's query container
//!   (match-all for blank input, simple-query-string across all fields
//!   otherwise).
//! - **Pagination**: Clamping caller-supplied offset/size to sane bounds.
//! - **API**: Exposing the `GET /search` endpoint via the Axum web server.
//!
//! ## Submodules
//! - **`translator`**: Free text to structured query body.
//! - **`pagination`**: Offset/size parsing and clamping.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Data Transfer Objects (DTOs) for API communication.

pub mod handlers;
pub mod pagination;
pub mod translator;
pub mod types;
