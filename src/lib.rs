// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # cinekit
//!
//! A Rust-native client kit for paginated movie catalogs: concurrent
//! page batching, bounded retry with backoff, and offline cache
//! fallback.
//!
//! ## Features
//!
//! - **Concurrent Pagination**: Fetch several pages per advance and
//!   merge them deterministically in page order
//! - **Retry with Backoff**: Exponential backoff with jitter, driven by
//!   a transient/permanent error taxonomy
//! - **Offline Fallback**: Network-first repositories that serve the
//!   last-known-good cached set when the catalog is unreachable
//! - **Favorites**: A persistent favorites list joined against the
//!   local cache
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cinekit::catalog::CatalogClient;
//! use cinekit::config::CatalogConfig;
//! use cinekit::paginator::Paginator;
//! use cinekit::repository::{CachingMovieRepository, MovieRepository};
//! use cinekit::store::JsonMovieStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> cinekit::Result<()> {
//!     let config = CatalogConfig::from_env()?;
//!     let retry = config.retry.policy();
//!     let client = Arc::new(CatalogClient::new(config));
//!     let store = Arc::new(JsonMovieStore::open(".cinekit/movies.json")?);
//!     let repo = Arc::new(CachingMovieRepository::new(client, store).with_retry(retry));
//!
//!     let pager = Paginator::from_fn(2, move |page| {
//!         let repo = Arc::clone(&repo);
//!         async move { repo.top_rated(page).await }
//!     });
//!     pager.load_next_page().await?;
//!     for movie in pager.items() {
//!         println!("{}", movie.title);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Paginator<Movie>                        │
//! │  load_next_page() → batch fan-out → page-ordered merge      │
//! └──────────────────────────────┬──────────────────────────────┘
//!                                │ PageLoader
//! ┌──────────────────────────────┴──────────────────────────────┐
//! │               CachingMovieRepository                        │
//! │  RetryPolicy (backoff + jitter)   network-first / fallback  │
//! └──────────┬──────────────────────────────────────┬───────────┘
//!            │                                      │
//! ┌──────────┴───────────┐              ┌───────────┴───────────┐
//! │   CatalogClient      │              │   MovieStore          │
//! │ reqwest + rate limit │              │ JSON / in-memory      │
//! └──────────────────────┘              └───────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and domain entities
pub mod types;

/// Pagination engine
pub mod paginator;

/// Retry with exponential backoff and jitter
pub mod retry;

/// Remote catalog API client
pub mod catalog;

/// Local cache stores
pub mod store;

/// Network-first repositories with cache fallback
pub mod repository;

/// Network connectivity signal
pub mod network;

/// Client configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use paginator::{LoadState, PageLoader, Paginator};
pub use retry::RetryPolicy;
pub use types::{Movie, Page};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
