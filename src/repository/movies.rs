//! Movie repository with network-first/cache-fallback semantics

use crate::catalog::{mapper, CatalogApi};
use crate::error::{Error, Result};
use crate::network::NetworkMonitor;
use crate::retry::RetryPolicy;
use crate::store::MovieStore;
use crate::types::{Genre, Movie, MovieDetails, Page, Video};
use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;
use tracing::warn;

/// Domain-level movie operations
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Top-rated movies, one page at a time
    async fn top_rated(&self, page: u32) -> Result<Page<Movie>>;

    /// Search movies by title
    async fn search(&self, query: &str, page: u32) -> Result<Page<Movie>>;

    /// Details for one movie
    async fn movie_details(&self, id: u64) -> Result<MovieDetails>;

    /// Videos for one movie
    async fn movie_videos(&self, id: u64) -> Result<Vec<Video>>;

    /// The full genre list
    async fn genres(&self) -> Result<Vec<Genre>>;
}

/// Network-first repository backed by the local movie cache.
///
/// Listing fetches run under the retry policy; when the network attempt
/// ultimately fails for **page 1**, the cached movie set is served as a
/// single terminal page instead. Failures on deeper pages propagate, so
/// an already-populated list never silently restarts from the cache.
pub struct CachingMovieRepository {
    api: Arc<dyn CatalogApi>,
    store: Arc<dyn MovieStore>,
    retry: RetryPolicy,
    network: Option<NetworkMonitor>,
}

impl CachingMovieRepository {
    /// Create a repository with the default retry policy
    pub fn new(api: Arc<dyn CatalogApi>, store: Arc<dyn MovieStore>) -> Self {
        Self {
            api,
            store,
            retry: RetryPolicy::default(),
            network: None,
        }
    }

    /// Replace the retry policy
    #[must_use]
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Attach a connectivity signal. When it reports offline, listing
    /// fetches skip the network attempt entirely and go straight to
    /// the fallback path.
    #[must_use]
    pub fn with_network_monitor(mut self, network: NetworkMonitor) -> Self {
        self.network = Some(network);
        self
    }

    async fn fetch_with_retry<T, F, Fut>(&self, operation: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        if let Some(network) = &self.network {
            if !network.is_online() {
                return Err(Error::Offline);
            }
        }
        self.retry.execute(operation).await
    }

    async fn cache_fetched(&self, movies: &[Movie]) {
        if let Err(err) = self.store.save(movies).await {
            warn!(error = %err, "failed to cache fetched movies");
        }
    }
}

#[async_trait]
impl MovieRepository for CachingMovieRepository {
    async fn top_rated(&self, page: u32) -> Result<Page<Movie>> {
        match self.fetch_with_retry(|| self.api.top_rated(page)).await {
            Ok(dto) => {
                let page = mapper::movie_page(dto);
                self.cache_fetched(&page.items).await;
                Ok(page)
            }
            Err(err) if page == 1 => {
                warn!(error = %err, "top-rated fetch failed; serving cached catalog");
                let movies = self.store.load().await?;
                Ok(Page::single(movies))
            }
            Err(err) => Err(err),
        }
    }

    async fn search(&self, query: &str, page: u32) -> Result<Page<Movie>> {
        match self.fetch_with_retry(|| self.api.search(query, page)).await {
            Ok(dto) => Ok(mapper::movie_page(dto)),
            Err(err) if page == 1 => {
                warn!(error = %err, query, "search failed; filtering cached catalog");
                let needle = query.to_lowercase();
                let movies = self.store.load().await?;
                let matches: Vec<Movie> = movies
                    .into_iter()
                    .filter(|m| m.title.to_lowercase().contains(&needle))
                    .collect();
                Ok(Page::single(matches))
            }
            Err(err) => Err(err),
        }
    }

    async fn movie_details(&self, id: u64) -> Result<MovieDetails> {
        let dto = self.api.movie_details(id).await?;
        Ok(mapper::movie_details(dto))
    }

    async fn movie_videos(&self, id: u64) -> Result<Vec<Video>> {
        let dto = self.api.movie_videos(id).await?;
        Ok(mapper::videos(dto))
    }

    async fn genres(&self) -> Result<Vec<Genre>> {
        let dto = self.api.genres().await?;
        Ok(mapper::genres(dto))
    }
}

impl std::fmt::Debug for CachingMovieRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachingMovieRepository")
            .field("retry", &self.retry)
            .field("has_network_monitor", &self.network.is_some())
            .finish_non_exhaustive()
    }
}
