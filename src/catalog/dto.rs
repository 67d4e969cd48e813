//! Wire DTOs for the catalog API
//!
//! Field names mirror the TMDB v3 JSON payloads; unknown fields are
//! ignored on deserialization.

use serde::Deserialize;

/// One page of a paginated listing response
#[derive(Debug, Clone, Deserialize)]
pub struct PagedResponseDto<T> {
    pub page: u32,
    pub results: Vec<T>,
    pub total_pages: u32,
    pub total_results: u64,
}

/// A movie row in listings and search results
#[derive(Debug, Clone, Deserialize)]
pub struct MovieDto {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub genre_ids: Vec<u64>,
    #[serde(default)]
    pub vote_average: f64,
}

/// Full movie details
#[derive(Debug, Clone, Deserialize)]
pub struct MovieDetailsDto {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub genres: Vec<GenreDto>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub production_countries: Vec<ProductionCountryDto>,
}

/// A production country entry
#[derive(Debug, Clone, Deserialize)]
pub struct ProductionCountryDto {
    pub iso_3166_1: String,
    #[serde(default)]
    pub name: String,
}

/// A genre entry
#[derive(Debug, Clone, Deserialize)]
pub struct GenreDto {
    pub id: u64,
    pub name: String,
}

/// Genre list response
#[derive(Debug, Clone, Deserialize)]
pub struct GenresResponseDto {
    pub genres: Vec<GenreDto>,
}

/// A video (trailer, teaser, clip) entry
#[derive(Debug, Clone, Deserialize)]
pub struct VideoDto {
    pub id: String,
    pub key: String,
    pub name: String,
    pub site: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Video list response
#[derive(Debug, Clone, Deserialize)]
pub struct VideosResponseDto {
    pub results: Vec<VideoDto>,
}
