//! In-memory stores for tests and ephemeral sessions

use super::{select_by_ids, upsert_movies, FavoritesStore, MovieStore};
use crate::error::Result;
use crate::types::Movie;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Movie cache held entirely in memory
#[derive(Debug, Default)]
pub struct MemoryMovieStore {
    movies: RwLock<Vec<Movie>>,
}

impl MemoryMovieStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with movies
    pub fn with_movies(movies: Vec<Movie>) -> Self {
        Self {
            movies: RwLock::new(movies),
        }
    }
}

#[async_trait]
impl MovieStore for MemoryMovieStore {
    async fn save(&self, incoming: &[Movie]) -> Result<()> {
        let mut movies = self.movies.write().await;
        upsert_movies(&mut movies, incoming);
        Ok(())
    }

    async fn load(&self) -> Result<Vec<Movie>> {
        Ok(self.movies.read().await.clone())
    }

    async fn load_by_ids(&self, ids: &[u64]) -> Result<Vec<Movie>> {
        Ok(select_by_ids(&self.movies.read().await, ids))
    }
}

/// Favorite ids held entirely in memory
#[derive(Debug, Default)]
pub struct MemoryFavoritesStore {
    ids: RwLock<Vec<u64>>,
}

impl MemoryFavoritesStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FavoritesStore for MemoryFavoritesStore {
    async fn ids(&self) -> Result<Vec<u64>> {
        Ok(self.ids.read().await.clone())
    }

    async fn contains(&self, id: u64) -> Result<bool> {
        Ok(self.ids.read().await.contains(&id))
    }

    async fn add(&self, id: u64) -> Result<()> {
        let mut ids = self.ids.write().await;
        if !ids.contains(&id) {
            ids.push(id);
        }
        Ok(())
    }

    async fn remove(&self, id: u64) -> Result<()> {
        self.ids.write().await.retain(|existing| *existing != id);
        Ok(())
    }
}
