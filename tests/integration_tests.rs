//! Integration tests using a mock HTTP server
//!
//! Exercise the full flow: catalog client → repository (retry + cache
//! fallback) → paginator, against wiremock endpoints shaped like the
//! real catalog API.

use cinekit::catalog::{CatalogApi, CatalogClient};
use cinekit::config::CatalogConfig;
use cinekit::error::Error;
use cinekit::paginator::{LoadState, Paginator};
use cinekit::repository::{CachingMovieRepository, MovieRepository};
use cinekit::retry::RetryPolicy;
use cinekit::store::{MemoryMovieStore, MovieStore};
use cinekit::types::Movie;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Helpers
// ============================================================================

fn config_for(server: &MockServer) -> CatalogConfig {
    let mut config = CatalogConfig::new("test-key");
    config.base_url = server.uri();
    config
}

fn fast_retry() -> RetryPolicy {
    RetryPolicy {
        max_retries: 2,
        initial_delay: Duration::from_millis(1),
        backoff_factor: 1.0,
        jitter: Duration::ZERO,
    }
}

fn movie_row(id: u64, title: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "overview": "A film.",
        "poster_path": format!("/p{id}.jpg"),
        "release_date": "1994-09-23",
        "genre_ids": [18],
        "vote_average": 8.2
    })
}

fn listing_body(page: u32, rows: Vec<serde_json::Value>, total_pages: u32) -> serde_json::Value {
    json!({
        "page": page,
        "results": rows,
        "total_pages": total_pages,
        "total_results": u64::from(total_pages) * 20
    })
}

fn cached_movie(id: u64, title: &str) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        overview: String::new(),
        poster_path: None,
        release_date: None,
        genre_ids: vec![],
        vote_average: 7.0,
    }
}

fn repository(server: &MockServer, store: Arc<MemoryMovieStore>) -> CachingMovieRepository {
    let client = Arc::new(CatalogClient::new(config_for(server)));
    CachingMovieRepository::new(client, store).with_retry(fast_retry())
}

// ============================================================================
// Catalog Client Tests
// ============================================================================

#[tokio::test]
async fn test_client_parses_top_rated_listing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/top_rated"))
        .and(query_param("api_key", "test-key"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing_body(
            1,
            vec![movie_row(278, "The Shawshank Redemption"), movie_row(238, "The Godfather")],
            3,
        )))
        .mount(&mock_server)
        .await;

    let client = CatalogClient::new(config_for(&mock_server));
    let dto = client.top_rated(1).await.unwrap();

    assert_eq!(dto.page, 1);
    assert_eq!(dto.total_pages, 3);
    assert_eq!(dto.results.len(), 2);
    assert_eq!(dto.results[0].title, "The Shawshank Redemption");
    assert_eq!(dto.results[1].id, 238);
}

#[tokio::test]
async fn test_client_sends_search_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .and(query_param("query", "matrix"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing_body(
            2,
            vec![movie_row(603, "The Matrix")],
            2,
        )))
        .mount(&mock_server)
        .await;

    let client = CatalogClient::new(config_for(&mock_server));
    let dto = client.search("matrix", 2).await.unwrap();

    assert_eq!(dto.page, 2);
    assert_eq!(dto.results[0].title, "The Matrix");
}

#[tokio::test]
async fn test_client_maps_not_found_to_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/999999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status_message": "The resource you requested could not be found."
        })))
        .mount(&mock_server)
        .await;

    let client = CatalogClient::new(config_for(&mock_server));
    let err = client.movie_details(999_999).await.unwrap_err();

    assert!(matches!(err, Error::Server { status: 404, .. }));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_client_maps_throttling_to_rate_limited() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/top_rated"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "7"))
        .mount(&mock_server)
        .await;

    let client = CatalogClient::new(config_for(&mock_server));
    let err = client.top_rated(1).await.unwrap_err();

    assert!(matches!(
        err,
        Error::RateLimited {
            retry_after_seconds: Some(7)
        }
    ));
    assert!(err.is_retryable());
}

// ============================================================================
// Repository Tests
// ============================================================================

#[tokio::test]
async fn test_repository_retries_transient_server_error() {
    let mock_server = MockServer::start().await;

    // First request fails, second succeeds
    Mock::given(method("GET"))
        .and(path("/movie/top_rated"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/movie/top_rated"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing_body(
            1,
            vec![movie_row(278, "The Shawshank Redemption")],
            1,
        )))
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemoryMovieStore::new());
    let repo = repository(&mock_server, Arc::clone(&store));

    let page = repo.top_rated(1).await.unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].title, "The Shawshank Redemption");

    // The fetched listing lands in the cache
    let cached = store.load().await.unwrap();
    assert_eq!(cached.len(), 1);
    assert_eq!(cached[0].id, 278);
}

#[tokio::test]
async fn test_repository_serves_cache_when_catalog_is_down() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/top_rated"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemoryMovieStore::with_movies(vec![
        cached_movie(278, "The Shawshank Redemption"),
        cached_movie(238, "The Godfather"),
    ]));
    let repo = repository(&mock_server, store);

    let page = repo.top_rated(1).await.unwrap();
    assert_eq!(page.page, 1);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].title, "The Shawshank Redemption");
}

#[tokio::test]
async fn test_repository_propagates_failure_on_deeper_pages() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/top_rated"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemoryMovieStore::with_movies(vec![cached_movie(
        278,
        "The Shawshank Redemption",
    )]));
    let repo = repository(&mock_server, store);

    let err = repo.top_rated(2).await.unwrap_err();
    assert!(matches!(err, Error::Server { status: 503, .. }));
}

#[tokio::test]
async fn test_search_falls_back_to_cached_titles() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemoryMovieStore::with_movies(vec![
        cached_movie(603, "The Matrix"),
        cached_movie(238, "The Godfather"),
    ]));
    let repo = repository(&mock_server, store);

    let page = repo.search("matrix", 1).await.unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, 603);
}

// ============================================================================
// End-to-End Pagination Tests
// ============================================================================

#[tokio::test]
async fn test_paginator_batches_over_live_endpoints() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/top_rated"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing_body(
            1,
            vec![movie_row(278, "The Shawshank Redemption"), movie_row(238, "The Godfather")],
            2,
        )))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/movie/top_rated"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing_body(
            2,
            vec![movie_row(240, "The Godfather Part II")],
            2,
        )))
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemoryMovieStore::new());
    let repo = Arc::new(repository(&mock_server, store));
    let pager = Paginator::from_fn(2, move |page| {
        let repo = Arc::clone(&repo);
        async move { repo.top_rated(page).await }
    });

    pager.load_next_page().await.unwrap();

    assert_eq!(pager.current_page(), 2);
    assert_eq!(pager.total_pages(), 2);
    assert_eq!(pager.state(), LoadState::Done);
    assert!(!pager.has_more_pages());

    let titles: Vec<String> = pager.items().into_iter().map(|m| m.title).collect();
    assert_eq!(
        titles,
        vec!["The Shawshank Redemption", "The Godfather", "The Godfather Part II"]
    );
}
