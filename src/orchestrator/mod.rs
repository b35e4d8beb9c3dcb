//! Search Orchestrator Module
//!
//! The client-side search loop. Converts a rapidly changing query string into
//! at most one in-flight request at a time, and guarantees that the visible
//! state only ever reflects the most recent query.
//!
//! ## Overview
//! Every input change restarts a debounce timer; when the timer fires, the
//! query is fetched through an injected async fetcher. A newer input
//! supersedes whatever is still pending: the old timer or request is aborted
//! outright, and a generation counter is re-checked before any state
//! mutation, so a stale response can never overwrite a newer one regardless
//! of arrival order.
//!
//! ## Submodules
//! - **`orchestrator`**: The `SearchOrchestrator` itself.
//! - **`types`**: Fetcher signature, visible state, and fetch errors.

pub mod orchestrator;
pub mod types;
