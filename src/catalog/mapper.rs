//! DTO to domain conversion
//!
//! Mapping is lenient where the API is sloppy: empty or malformed
//! release dates become `None` instead of failing the whole page.

use super::dto::{
    GenreDto, GenresResponseDto, MovieDetailsDto, MovieDto, PagedResponseDto, VideosResponseDto,
};
use crate::types::{Genre, Movie, MovieDetails, Page, ProductionCountry, Video};
use chrono::NaiveDate;

/// Parse a `YYYY-MM-DD` release date, treating empty or malformed
/// values as absent
pub fn parse_release_date(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Convert a movie row
pub fn movie(dto: MovieDto) -> Movie {
    Movie {
        id: dto.id,
        title: dto.title,
        overview: dto.overview.unwrap_or_default(),
        poster_path: dto.poster_path,
        release_date: parse_release_date(dto.release_date.as_deref()),
        genre_ids: dto.genre_ids,
        vote_average: dto.vote_average,
    }
}

/// Convert a listing page
pub fn movie_page(dto: PagedResponseDto<MovieDto>) -> Page<Movie> {
    Page {
        page: dto.page,
        items: dto.results.into_iter().map(movie).collect(),
        total_pages: dto.total_pages.max(1),
        total_items: dto.total_results,
    }
}

/// Convert movie details
pub fn movie_details(dto: MovieDetailsDto) -> MovieDetails {
    MovieDetails {
        id: dto.id,
        title: dto.title,
        overview: dto.overview,
        poster_path: dto.poster_path,
        release_date: parse_release_date(dto.release_date.as_deref()),
        genres: dto.genres.into_iter().map(genre).collect(),
        vote_average: dto.vote_average,
        production_countries: dto
            .production_countries
            .into_iter()
            .map(|c| ProductionCountry {
                iso_3166_1: c.iso_3166_1,
                name: c.name,
            })
            .collect(),
    }
}

/// Convert a genre entry
pub fn genre(dto: GenreDto) -> Genre {
    Genre {
        id: dto.id,
        name: dto.name,
    }
}

/// Convert a genre list response
pub fn genres(dto: GenresResponseDto) -> Vec<Genre> {
    dto.genres.into_iter().map(genre).collect()
}

/// Convert a video list response
pub fn videos(dto: VideosResponseDto) -> Vec<Video> {
    dto.results
        .into_iter()
        .map(|v| Video {
            id: v.id,
            key: v.key,
            name: v.name,
            site: v.site,
            kind: v.kind,
        })
        .collect()
}
