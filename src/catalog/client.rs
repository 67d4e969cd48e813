//! HTTP catalog client
//!
//! Thin reqwest wrapper: rate limiting, auth/query plumbing, and status
//! mapping into the error taxonomy. Retry belongs to the repository
//! layer, not here.

use super::dto::{GenresResponseDto, MovieDetailsDto, MovieDto, PagedResponseDto, VideosResponseDto};
use super::rate_limit::RateLimiter;
use crate::config::CatalogConfig;
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Operations offered by the remote catalog
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Top-rated movies, one page at a time
    async fn top_rated(&self, page: u32) -> Result<PagedResponseDto<MovieDto>>;

    /// Search movies by title
    async fn search(&self, query: &str, page: u32) -> Result<PagedResponseDto<MovieDto>>;

    /// Details for one movie
    async fn movie_details(&self, id: u64) -> Result<MovieDetailsDto>;

    /// Videos (trailers, teasers) for one movie
    async fn movie_videos(&self, id: u64) -> Result<VideosResponseDto>;

    /// The full genre list
    async fn genres(&self) -> Result<GenresResponseDto>;
}

/// Catalog client over reqwest
pub struct CatalogClient {
    http: reqwest::Client,
    config: CatalogConfig,
    limiter: Option<RateLimiter>,
}

impl CatalogClient {
    /// Build a client from config
    pub fn new(config: CatalogConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.http.timeout())
            .user_agent(&config.http.user_agent)
            .build()
            .expect("Failed to build HTTP client");
        let limiter = config.http.rate_limit.as_ref().map(RateLimiter::new);
        Self {
            http,
            config,
            limiter,
        }
    }

    /// The configuration this client was built from
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        if let Some(limiter) = &self.limiter {
            limiter.wait().await;
        }

        let url = self.endpoint(path);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("api_key", self.config.api_key.as_str()),
                ("language", self.config.language.as_str()),
            ])
            .query(query)
            .send()
            .await
            .map_err(|e| Error::from_transport(e, self.config.http.timeout_ms))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok());
            return Err(Error::rate_limited(retry_after));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::server(status.as_u16(), body));
        }

        debug!(%url, "catalog request succeeded");
        response
            .json::<T>()
            .await
            .map_err(|e| Error::decode(e.to_string()))
    }
}

#[async_trait]
impl CatalogApi for CatalogClient {
    async fn top_rated(&self, page: u32) -> Result<PagedResponseDto<MovieDto>> {
        self.get_json("movie/top_rated", &[("page", page.to_string())])
            .await
    }

    async fn search(&self, query: &str, page: u32) -> Result<PagedResponseDto<MovieDto>> {
        self.get_json(
            "search/movie",
            &[
                ("query", query.to_string()),
                ("page", page.to_string()),
                ("include_adult", "false".to_string()),
            ],
        )
        .await
    }

    async fn movie_details(&self, id: u64) -> Result<MovieDetailsDto> {
        self.get_json(&format!("movie/{id}"), &[]).await
    }

    async fn movie_videos(&self, id: u64) -> Result<VideosResponseDto> {
        self.get_json(&format!("movie/{id}/videos"), &[]).await
    }

    async fn genres(&self) -> Result<GenresResponseDto> {
        self.get_json("genre/movie/list", &[]).await
    }
}

impl std::fmt::Debug for CatalogClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogClient")
            .field("base_url", &self.config.base_url)
            .field("has_rate_limiter", &self.limiter.is_some())
            .finish_non_exhaustive()
    }
}
