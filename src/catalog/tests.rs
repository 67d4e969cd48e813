//! Tests for the catalog module (DTO parsing and mapping; HTTP paths
//! are covered by the wiremock integration tests)

use super::dto::{MovieDetailsDto, MovieDto, PagedResponseDto, VideosResponseDto};
use super::mapper;
use super::CatalogClient;
use crate::config::CatalogConfig;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

#[test]
fn test_paged_response_deserializes_tmdb_shape() {
    let payload = json!({
        "page": 1,
        "results": [
            {
                "id": 278,
                "title": "The Shawshank Redemption",
                "overview": "Imprisoned in the 1940s...",
                "poster_path": "/9cqNxx0GxF0bflZmeSMuL5tnGzr.jpg",
                "release_date": "1994-09-23",
                "genre_ids": [18, 80],
                "vote_average": 8.708,
                "popularity": 134.3
            },
            {
                "id": 238,
                "title": "The Godfather",
                "release_date": "",
                "vote_average": 8.7
            }
        ],
        "total_pages": 500,
        "total_results": 10000
    });

    let dto: PagedResponseDto<MovieDto> = serde_json::from_value(payload).unwrap();
    assert_eq!(dto.page, 1);
    assert_eq!(dto.results.len(), 2);
    assert_eq!(dto.total_pages, 500);
    assert_eq!(dto.total_results, 10000);

    // Missing optional fields fall back to defaults.
    let sparse = &dto.results[1];
    assert_eq!(sparse.overview, None);
    assert!(sparse.genre_ids.is_empty());
}

#[test_case(Some("1994-09-23"), NaiveDate::from_ymd_opt(1994, 9, 23); "well formed")]
#[test_case(Some(""), None; "empty")]
#[test_case(Some("  "), None; "whitespace")]
#[test_case(Some("not-a-date"), None; "malformed")]
#[test_case(None, None; "absent")]
fn test_release_date_parses_leniently(raw: Option<&str>, expected: Option<NaiveDate>) {
    assert_eq!(mapper::parse_release_date(raw), expected);
}

#[test]
fn test_movie_page_mapping() {
    let dto = PagedResponseDto {
        page: 2,
        results: vec![MovieDto {
            id: 680,
            title: "Pulp Fiction".into(),
            overview: Some("A burger-loving hit man...".into()),
            poster_path: None,
            release_date: Some("1994-09-10".into()),
            genre_ids: vec![53, 80],
            vote_average: 8.5,
        }],
        total_pages: 0,
        total_results: 1,
    };

    let page = mapper::movie_page(dto);
    assert_eq!(page.page, 2);
    // A zero total page count is normalized to 1.
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.items[0].title, "Pulp Fiction");
    assert_eq!(
        page.items[0].release_date,
        NaiveDate::from_ymd_opt(1994, 9, 10)
    );
}

#[test]
fn test_movie_details_mapping() {
    let payload = json!({
        "id": 278,
        "title": "The Shawshank Redemption",
        "overview": "Imprisoned in the 1940s...",
        "release_date": "1994-09-23",
        "genres": [{"id": 18, "name": "Drama"}, {"id": 80, "name": "Crime"}],
        "vote_average": 8.708,
        "production_countries": [{"iso_3166_1": "US", "name": "United States of America"}]
    });
    let dto: MovieDetailsDto = serde_json::from_value(payload).unwrap();
    let details = mapper::movie_details(dto);

    assert_eq!(details.year(), Some(1994));
    assert_eq!(details.country(), Some("US"));
    assert_eq!(details.genres.len(), 2);
    assert_eq!(details.genres[0].name, "Drama");
}

#[test]
fn test_video_mapping_renames_type_field() {
    let payload = json!({
        "results": [
            {"id": "v1", "key": "PLl99DlL6b4", "name": "Trailer", "site": "YouTube", "type": "Trailer"}
        ]
    });
    let dto: VideosResponseDto = serde_json::from_value(payload).unwrap();
    let videos = mapper::videos(dto);

    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0].kind, "Trailer");
    assert_eq!(videos[0].site, "YouTube");
}

#[test]
fn test_client_endpoint_handles_slashes() {
    let mut config = CatalogConfig::new("secret");
    config.base_url = "https://api.example.com/3/".into();
    let client = CatalogClient::new(config);

    assert_eq!(
        client.endpoint("/movie/top_rated"),
        "https://api.example.com/3/movie/top_rated"
    );
    assert_eq!(
        client.endpoint("movie/278"),
        "https://api.example.com/3/movie/278"
    );
}
