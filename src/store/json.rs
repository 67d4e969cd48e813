//! JSON-file-backed stores
//!
//! Each store keeps its working set in memory behind an `RwLock` and
//! writes the whole file on every mutation, via a temp file and rename
//! for atomicity.

use super::{select_by_ids, upsert_movies, FavoritesStore, MovieStore};
use crate::error::{Error, Result};
use crate::types::Movie;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

fn read_or_default<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Ok(T::default());
    }
    let contents = std::fs::read_to_string(path).map_err(|e| Error::Store {
        message: format!("Failed to read {}: {e}", path.display()),
    })?;
    serde_json::from_str(&contents).map_err(|e| Error::Store {
        message: format!("Failed to parse {}: {e}", path.display()),
    })
}

async fn write_atomic<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let contents = serde_json::to_string_pretty(value).map_err(|e| Error::Store {
        message: format!("Failed to serialize {}: {e}", path.display()),
    })?;

    // Write to temp file first, then rename for atomicity
    let temp_path = path.with_extension("tmp");
    tokio::fs::write(&temp_path, &contents)
        .await
        .map_err(|e| Error::Store {
            message: format!("Failed to write {}: {e}", temp_path.display()),
        })?;
    tokio::fs::rename(&temp_path, path)
        .await
        .map_err(|e| Error::Store {
            message: format!("Failed to rename into {}: {e}", path.display()),
        })?;
    Ok(())
}

/// Movie cache persisted as one JSON file
#[derive(Debug)]
pub struct JsonMovieStore {
    path: PathBuf,
    movies: RwLock<Vec<Movie>>,
}

impl JsonMovieStore {
    /// Open a store, loading existing contents if the file is present
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let movies = read_or_default(&path)?;
        Ok(Self {
            path,
            movies: RwLock::new(movies),
        })
    }
}

#[async_trait]
impl MovieStore for JsonMovieStore {
    async fn save(&self, incoming: &[Movie]) -> Result<()> {
        let mut movies = self.movies.write().await;
        upsert_movies(&mut movies, incoming);
        write_atomic(&self.path, &*movies).await
    }

    async fn load(&self) -> Result<Vec<Movie>> {
        Ok(self.movies.read().await.clone())
    }

    async fn load_by_ids(&self, ids: &[u64]) -> Result<Vec<Movie>> {
        Ok(select_by_ids(&self.movies.read().await, ids))
    }
}

/// Favorite ids persisted as one JSON file
#[derive(Debug)]
pub struct JsonFavoritesStore {
    path: PathBuf,
    ids: RwLock<Vec<u64>>,
}

impl JsonFavoritesStore {
    /// Open a store, loading existing contents if the file is present
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let ids = read_or_default(&path)?;
        Ok(Self {
            path,
            ids: RwLock::new(ids),
        })
    }
}

#[async_trait]
impl FavoritesStore for JsonFavoritesStore {
    async fn ids(&self) -> Result<Vec<u64>> {
        Ok(self.ids.read().await.clone())
    }

    async fn contains(&self, id: u64) -> Result<bool> {
        Ok(self.ids.read().await.contains(&id))
    }

    async fn add(&self, id: u64) -> Result<()> {
        let mut ids = self.ids.write().await;
        if ids.contains(&id) {
            return Ok(());
        }
        ids.push(id);
        write_atomic(&self.path, &*ids).await
    }

    async fn remove(&self, id: u64) -> Result<()> {
        let mut ids = self.ids.write().await;
        let before = ids.len();
        ids.retain(|existing| *existing != id);
        if ids.len() == before {
            return Ok(());
        }
        write_atomic(&self.path, &*ids).await
    }
}
