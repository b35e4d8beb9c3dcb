use crate::search::types::Hit;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use thiserror::Error;

/// The query handed to the fetcher once the input has settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    pub from: usize,
    pub size: usize,
}

/// Boxed future produced by a fetcher invocation.
pub type FetchFuture = Pin<Box<dyn Future<Output = Result<Vec<Hit>, FetchError>> + Send>>;

/// Type alias for the injected, thread-safe asynchronous fetch function.
/// It takes a settled `SearchQuery` and returns a Future resolving to the
/// hits (or a fetch failure).
pub type FetcherFn = Arc<dyn Fn(SearchQuery) -> FetchFuture + Send + Sync>;

/// Failure of a single fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The operation was cancelled. Never surfaced as a user-visible error.
    #[error("search request was cancelled")]
    Cancelled,
    /// Anything else: connectivity, non-success status, undecodable body.
    #[error("{0}")]
    Transport(String),
}

/// The user-visible state owned by one orchestrator instance.
///
/// On a non-cancellation failure `error` is set but `results` keeps the
/// previously displayed list; surfacing the error does not blank the UI.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub results: Vec<Hit>,
    pub error: Option<String>,
    pub loading: bool,
}
