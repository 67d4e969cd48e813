//! Common types shared across the crate
//!
//! `Page` is the unit the paginator accumulates; the remaining types are
//! the catalog domain entities. Entities are serde-serializable because
//! the local cache store persists them as JSON.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Pagination
// ============================================================================

/// One fetched unit of a paginated collection, carrying the items plus
/// total-count metadata reported by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// 1-based page number
    pub page: u32,
    /// Items in page order
    pub items: Vec<T>,
    /// Total number of pages the server reports (>= 1)
    pub total_pages: u32,
    /// Total number of items the server reports
    pub total_items: u64,
}

impl<T> Page<T> {
    /// Create a page
    pub fn new(page: u32, items: Vec<T>, total_pages: u32, total_items: u64) -> Self {
        Self {
            page,
            items,
            total_pages,
            total_items,
        }
    }

    /// A single terminal page, used when serving a cached item set
    pub fn single(items: Vec<T>) -> Self {
        let total_items = items.len() as u64;
        Self {
            page: 1,
            items,
            total_pages: 1,
            total_items,
        }
    }

    /// Number of items in this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the page carries no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// ============================================================================
// Domain Entities
// ============================================================================

/// A movie as it appears in listings and search results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub overview: String,
    pub poster_path: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub genre_ids: Vec<u64>,
    pub vote_average: f64,
}

/// Full details for a single movie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetails {
    pub id: u64,
    pub title: String,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub genres: Vec<Genre>,
    pub vote_average: f64,
    pub production_countries: Vec<ProductionCountry>,
}

impl MovieDetails {
    /// Release year, when a release date is known
    pub fn year(&self) -> Option<i32> {
        use chrono::Datelike;
        self.release_date.map(|d| d.year())
    }

    /// ISO 3166-1 code of the first production country, if any
    pub fn country(&self) -> Option<&str> {
        self.production_countries
            .first()
            .map(|c| c.iso_3166_1.as_str())
    }
}

/// A production country attached to movie details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionCountry {
    pub iso_3166_1: String,
    pub name: String,
}

/// A movie genre
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// A video (trailer, teaser, clip) attached to a movie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub key: String,
    pub name: String,
    pub site: String,
    pub kind: String,
}
