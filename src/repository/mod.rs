//! Repository layer
//!
//! Composes the catalog client, the retry policy, and the local cache
//! store into the network-first/cache-fallback contract the paginator
//! loads pages through. All retrying in the crate happens here.

mod favorites;
mod movies;

pub use favorites::FavoriteMoviesRepository;
pub use movies::{CachingMovieRepository, MovieRepository};
