//! Paginator implementation
//!
//! State lives behind a plain mutex that is never held across an await;
//! the fan-out for multi-page batches happens on the calling task via
//! `join_all`, so dropping the `load_next_page` future cancels any
//! in-flight page fetches with it.

use crate::error::Result;
use crate::types::Page;
use async_trait::async_trait;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Load state exposed to callers for rendering decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// Ready to accept a `load_next_page` call
    Idle,
    /// A load is in flight; further calls are no-ops
    Loading,
    /// No more pages exist; further calls are no-ops
    Done,
}

/// Source of pages for a [`Paginator`].
///
/// Implementations must tolerate concurrent calls for distinct page
/// numbers; the paginator never requests page 0 and never requests the
/// same page twice concurrently.
#[async_trait]
pub trait PageLoader: Send + Sync {
    /// Item type carried by the pages
    type Item: Send;

    /// Fetch one page by its 1-based number
    async fn load_page(&self, page: u32) -> Result<Page<Self::Item>>;
}

/// Adapter implementing [`PageLoader`] over an async closure
pub struct FnLoader<F> {
    f: F,
}

#[async_trait]
impl<T, F, Fut> PageLoader for FnLoader<F>
where
    T: Send + 'static,
    F: Fn(u32) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Page<T>>> + Send,
{
    type Item = T;

    async fn load_page(&self, page: u32) -> Result<Page<T>> {
        (self.f)(page).await
    }
}

/// Wrap an async closure as a [`PageLoader`]
pub fn loader_fn<T, F, Fut>(f: F) -> FnLoader<F>
where
    T: Send + 'static,
    F: Fn(u32) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Page<T>>> + Send,
{
    FnLoader { f }
}

struct Inner<T> {
    state: LoadState,
    items: Vec<T>,
    current_page: u32,
    total_pages: u32,
    // Bumped by reset(); loads stamped with an older generation discard
    // their results instead of merging into the new session.
    generation: u64,
}

impl<T> Inner<T> {
    fn has_more(&self) -> bool {
        self.current_page < self.total_pages
    }

    fn merge(&mut self, mut responses: Vec<Page<T>>) {
        responses.sort_by_key(|r| r.page);
        if let Some(last) = responses.last() {
            self.current_page = last.page;
            self.total_pages = last.total_pages;
        }
        for response in responses {
            self.items.extend(response.items);
        }
        self.state = if self.has_more() {
            LoadState::Idle
        } else {
            LoadState::Done
        };
    }
}

/// Generic paginator accumulating pages of `T` in page order.
///
/// Construction fixes the batch size: the number of pages fetched
/// concurrently per [`load_next_page`](Self::load_next_page) call.
pub struct Paginator<T> {
    loader: Arc<dyn PageLoader<Item = T>>,
    pages_per_batch: u32,
    inner: Mutex<Inner<T>>,
}

impl<T: Send + 'static> Paginator<T> {
    /// Create a paginator over a [`PageLoader`]. `pages_per_batch` is
    /// clamped to at least 1.
    pub fn new(pages_per_batch: u32, loader: Arc<dyn PageLoader<Item = T>>) -> Self {
        Self {
            loader,
            pages_per_batch: pages_per_batch.max(1),
            inner: Mutex::new(Inner {
                state: LoadState::Idle,
                items: Vec::new(),
                current_page: 0,
                total_pages: 1,
                generation: 0,
            }),
        }
    }

    /// Create a paginator over an async closure
    pub fn from_fn<F, Fut>(pages_per_batch: u32, f: F) -> Self
    where
        F: Fn(u32) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Page<T>>> + Send,
    {
        Self::new(pages_per_batch, Arc::new(loader_fn(f)))
    }

    fn lock(&self) -> MutexGuard<'_, Inner<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current load state
    pub fn state(&self) -> LoadState {
        self.lock().state
    }

    /// Last page number successfully merged (0 before any load)
    pub fn current_page(&self) -> u32 {
        self.lock().current_page
    }

    /// Most recently observed total page count
    pub fn total_pages(&self) -> u32 {
        self.lock().total_pages
    }

    /// Whether pages beyond `current_page` are believed to exist
    pub fn has_more_pages(&self) -> bool {
        self.lock().has_more()
    }

    /// Number of accumulated items
    pub fn item_count(&self) -> usize {
        self.lock().items.len()
    }

    /// Advance by one batch of pages.
    ///
    /// Returns immediately with `Ok(())` when a load is already running
    /// or no pages remain. With a batch size of 1 a failure is
    /// propagated unchanged; with a larger batch, individual page
    /// failures are dropped as long as at least one page succeeded, and
    /// only a fully failed batch surfaces its first error. Dropping the
    /// returned future leaves the observable state as if the call never
    /// happened.
    pub async fn load_next_page(&self) -> Result<()> {
        let (pages, generation) = {
            let mut inner = self.lock();
            if inner.state != LoadState::Idle || !inner.has_more() {
                return Ok(());
            }
            inner.state = LoadState::Loading;
            let start = inner.current_page + 1;
            let end = start + (self.pages_per_batch - 1);
            // The first batch runs unclamped: the real page count is
            // unknown until a response reports it.
            let pages: Vec<u32> = if inner.current_page > 0 {
                (start..=end).filter(|p| *p <= inner.total_pages).collect()
            } else {
                (start..=end).collect()
            };
            (pages, inner.generation)
        };

        let guard = RevertGuard {
            paginator: self,
            generation,
        };
        let result = if self.pages_per_batch == 1 {
            self.advance_single(pages[0], generation).await
        } else {
            self.advance_batch(&pages, generation).await
        };
        guard.disarm();
        result
    }

    async fn advance_single(&self, page: u32, generation: u64) -> Result<()> {
        match self.loader.load_page(page).await {
            Ok(response) => {
                let mut inner = self.lock();
                if inner.generation != generation {
                    debug!(page, "discarding page fetched before reset");
                    return Ok(());
                }
                inner.merge(vec![response]);
                Ok(())
            }
            Err(err) => {
                let mut inner = self.lock();
                if inner.generation == generation {
                    inner.state = LoadState::Idle;
                }
                Err(err)
            }
        }
    }

    async fn advance_batch(&self, pages: &[u32], generation: u64) -> Result<()> {
        let fetches = pages.iter().map(|&page| {
            let loader = Arc::clone(&self.loader);
            async move { loader.load_page(page).await }
        });
        let results = futures::future::join_all(fetches).await;

        let mut responses = Vec::new();
        let mut errors = Vec::new();
        for result in results {
            match result {
                Ok(response) => responses.push(response),
                Err(err) => errors.push(err),
            }
        }

        let mut inner = self.lock();
        if inner.generation != generation {
            debug!(
                count = responses.len(),
                "discarding pages fetched before reset"
            );
            return Ok(());
        }

        if responses.is_empty() {
            inner.state = LoadState::Idle;
            return match errors.into_iter().next() {
                Some(err) => Err(err),
                None => Ok(()),
            };
        }

        if !errors.is_empty() {
            debug!(
                dropped = errors.len(),
                merged = responses.len(),
                "batch partially failed; keeping successful pages"
            );
        }
        inner.merge(responses);
        Ok(())
    }

    /// Discard all accumulated items and return to the initial state.
    ///
    /// Never suspends and never cancels an in-flight load; a load
    /// started before the reset discards its results when it completes.
    pub fn reset(&self) {
        let mut inner = self.lock();
        inner.items.clear();
        inner.current_page = 0;
        inner.total_pages = 1;
        inner.state = LoadState::Idle;
        inner.generation += 1;
    }
}

impl<T: Clone + Send + 'static> Paginator<T> {
    /// Snapshot of the accumulated items, in page order
    pub fn items(&self) -> Vec<T> {
        self.lock().items.clone()
    }
}

impl<T> std::fmt::Debug for Paginator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("Paginator")
            .field("state", &inner.state)
            .field("items", &inner.items.len())
            .field("current_page", &inner.current_page)
            .field("total_pages", &inner.total_pages)
            .field("pages_per_batch", &self.pages_per_batch)
            .finish()
    }
}

// Reverts Loading back to Idle when a load future is dropped mid-flight,
// so cancellation leaves the paginator exactly as it was found.
struct RevertGuard<'a, T> {
    paginator: &'a Paginator<T>,
    generation: u64,
}

impl<T> RevertGuard<'_, T> {
    fn disarm(self) {
        std::mem::forget(self);
    }
}

impl<T> Drop for RevertGuard<'_, T> {
    fn drop(&mut self) {
        let mut inner = self
            .paginator
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if inner.generation == self.generation && inner.state == LoadState::Loading {
            inner.state = LoadState::Idle;
        }
    }
}
