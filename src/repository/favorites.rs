//! Favorite movies, joined against the local cache

use crate::error::Result;
use crate::store::{FavoritesStore, MovieStore};
use crate::types::Movie;
use std::sync::Arc;

/// Favorite-movie operations over the favorites and movie stores.
///
/// Favorites only reference ids; the movie data itself comes from the
/// cached catalog, so a favorite whose movie was never cached simply
/// does not appear in `favorite_movies`.
pub struct FavoriteMoviesRepository {
    favorites: Arc<dyn FavoritesStore>,
    movies: Arc<dyn MovieStore>,
}

impl FavoriteMoviesRepository {
    /// Create a repository over the two stores
    pub fn new(favorites: Arc<dyn FavoritesStore>, movies: Arc<dyn MovieStore>) -> Self {
        Self { favorites, movies }
    }

    /// Cached movies for all favorite ids, oldest favorite first
    pub async fn favorite_movies(&self) -> Result<Vec<Movie>> {
        let ids = self.favorites.ids().await?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.movies.load_by_ids(&ids).await
    }

    /// Whether a movie is marked favorite
    pub async fn is_favorite(&self, id: u64) -> Result<bool> {
        self.favorites.contains(id).await
    }

    /// Mark a movie as favorite
    pub async fn add(&self, id: u64) -> Result<()> {
        self.favorites.add(id).await
    }

    /// Unmark a movie
    pub async fn remove(&self, id: u64) -> Result<()> {
        self.favorites.remove(id).await
    }

    /// Flip the favorite flag, returning the new state
    pub async fn toggle(&self, id: u64) -> Result<bool> {
        if self.favorites.contains(id).await? {
            self.favorites.remove(id).await?;
            Ok(false)
        } else {
            self.favorites.add(id).await?;
            Ok(true)
        }
    }
}

impl std::fmt::Debug for FavoriteMoviesRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FavoriteMoviesRepository")
            .finish_non_exhaustive()
    }
}
