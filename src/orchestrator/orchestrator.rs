use super::types::{FetchError, FetchFuture, FetcherFn, SearchQuery, SearchState};
use crate::search::pagination::DEFAULT_PAGE_SIZE;
use crate::search::types::Hit;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Debounce delay applied when none is configured.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Drives the query input -> fetch -> state cycle for one search box.
///
/// At most one operation is current at any time. A new input aborts the
/// pending debounce timer or request, and every callback re-checks the
/// generation counter before touching state, so results are applied in
/// input order, never in network-completion order.
pub struct SearchOrchestrator {
    inner: Arc<Inner>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

struct Inner {
    fetcher: FetcherFn,
    delay: Duration,
    // Bumped on every input; a spawned operation only applies its outcome
    // while its own generation is still the latest.
    generation: AtomicU64,
    state: Mutex<SearchState>,
}

impl SearchOrchestrator {
    /// Creates an orchestrator with the default 300 ms debounce.
    pub fn new<F, Fut>(fetcher: F) -> Self
    where
        F: Fn(SearchQuery) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Vec<Hit>, FetchError>> + Send + 'static,
    {
        Self::new_with_delay(fetcher, DEFAULT_DEBOUNCE)
    }

    pub fn new_with_delay<F, Fut>(fetcher: F, delay: Duration) -> Self
    where
        F: Fn(SearchQuery) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Vec<Hit>, FetchError>> + Send + 'static,
    {
        // Box::pin type-erases the concrete Future so any async closure fits.
        let fetcher: FetcherFn =
            Arc::new(move |query: SearchQuery| Box::pin(fetcher(query)) as FetchFuture);

        Self {
            inner: Arc::new(Inner {
                fetcher,
                delay,
                generation: AtomicU64::new(0),
                state: Mutex::new(SearchState::default()),
            }),
            pending: Mutex::new(None),
        }
    }

    /// Feeds the current query text into the loop.
    ///
    /// Supersedes whatever is pending: the previous timer never fires and a
    /// previous in-flight request is aborted, releasing its transport
    /// resources. Empty text short-circuits to the empty state with no
    /// network call. Must be called from within a Tokio runtime.
    pub fn on_input(&self, text: &str) {
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;

        if let Some(handle) = self.pending.lock().unwrap().take() {
            handle.abort();
        }
        // Supersession settles the previous operation.
        self.inner.state.lock().unwrap().loading = false;

        if text.is_empty() {
            let mut state = self.inner.state.lock().unwrap();
            state.results.clear();
            state.error = None;
            return;
        }

        let inner = self.inner.clone();
        let text = text.to_string();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(inner.delay).await;

            {
                // Checked and stored under one lock: a supersession that
                // already reset the flag cannot be overwritten by a task it
                // has just cancelled.
                let mut state = inner.state.lock().unwrap();
                if inner.generation.load(Ordering::SeqCst) != generation {
                    return;
                }
                state.loading = true;
            }

            let query = SearchQuery {
                text,
                from: 0,
                size: DEFAULT_PAGE_SIZE,
            };
            let outcome = (inner.fetcher)(query).await;

            let mut state = inner.state.lock().unwrap();
            // Re-checked under the lock: a superseded outcome, success or
            // failure, is discarded entirely.
            if inner.generation.load(Ordering::SeqCst) != generation {
                return;
            }

            state.loading = false;
            match outcome {
                Ok(hits) => {
                    state.results = hits;
                    state.error = None;
                }
                Err(FetchError::Cancelled) => {}
                Err(err) => {
                    state.error = Some(err.to_string());
                }
            }
        });

        *self.pending.lock().unwrap() = Some(handle);
    }

    /// Snapshot of the current user-visible state.
    pub fn state(&self) -> SearchState {
        self.inner.state.lock().unwrap().clone()
    }

    /// True while an operation is outstanding.
    pub fn is_loading(&self) -> bool {
        self.inner.state.lock().unwrap().loading
    }

    /// Waits until the most recent input has settled, i.e. its debounce
    /// timer and fetch (if any) have finished and the state reflects it.
    ///
    /// Polling the loading flag alone misses operations that settle between
    /// two polls; the spawned task's own completion does not. Returns false
    /// if the deadline passes first.
    pub async fn wait_settled(&self, timeout: Duration) -> bool {
        let deadline = tokio::time::Instant::now() + timeout;

        loop {
            let task_done = match &*self.pending.lock().unwrap() {
                Some(handle) => handle.is_finished(),
                None => true,
            };
            if task_done && !self.is_loading() {
                return true;
            }
            if tokio::time::Instant::now() >= deadline {
                return false;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }
}

impl Drop for SearchOrchestrator {
    // Teardown cancels any pending timer and in-flight request; the loading
    // flag cannot be left dangling.
    fn drop(&mut self) {
        if let Some(handle) = self.pending.lock().unwrap().take() {
            handle.abort();
        }
    }
}
