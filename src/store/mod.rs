//! Local cache stores
//!
//! Persists the last-known-good movie set for offline fallback, plus
//! the favorite-movie id list. Consumers depend on the [`MovieStore`]
//! and [`FavoritesStore`] traits; two implementations are provided:
//! JSON files with atomic writes, and in-memory stores for tests and
//! ephemeral sessions.

mod json;
mod memory;

pub use json::{JsonFavoritesStore, JsonMovieStore};
pub use memory::{MemoryFavoritesStore, MemoryMovieStore};

use crate::error::Result;
use crate::types::Movie;
use async_trait::async_trait;

/// Cache of the last-known-good movie set.
///
/// `save` upserts by movie id: existing entries are updated in place,
/// new ones appended, so the cached order is first-seen order.
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// Upsert a batch of movies into the cached set
    async fn save(&self, movies: &[Movie]) -> Result<()>;

    /// All cached movies, in first-seen order
    async fn load(&self) -> Result<Vec<Movie>>;

    /// Cached movies for the given ids, in the requested order;
    /// ids with no cached entry are skipped
    async fn load_by_ids(&self, ids: &[u64]) -> Result<Vec<Movie>>;
}

/// Persistent set of favorite movie ids, in insertion order
#[async_trait]
pub trait FavoritesStore: Send + Sync {
    /// All favorite ids, oldest first
    async fn ids(&self) -> Result<Vec<u64>>;

    /// Whether an id is marked favorite
    async fn contains(&self, id: u64) -> Result<bool>;

    /// Mark an id as favorite; adding an existing id is a no-op
    async fn add(&self, id: u64) -> Result<()>;

    /// Unmark an id; removing an absent id is a no-op
    async fn remove(&self, id: u64) -> Result<()>;
}

/// Upsert `incoming` into `existing` by movie id
pub(crate) fn upsert_movies(existing: &mut Vec<Movie>, incoming: &[Movie]) {
    for movie in incoming {
        match existing.iter_mut().find(|m| m.id == movie.id) {
            Some(slot) => *slot = movie.clone(),
            None => existing.push(movie.clone()),
        }
    }
}

/// Select movies for `ids` in the requested order
pub(crate) fn select_by_ids(movies: &[Movie], ids: &[u64]) -> Vec<Movie> {
    ids.iter()
        .filter_map(|id| movies.iter().find(|m| m.id == *id).cloned())
        .collect()
}
