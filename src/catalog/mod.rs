//! Remote catalog API client
//!
//! Talks to a TMDB-style movie catalog over HTTP. The wire shapes live
//! in [`dto`], [`mapper`] converts them into domain entities, and
//! [`CatalogClient`] implements the [`CatalogApi`] trait with reqwest
//! plus an optional client-side token-bucket rate limiter.
//!
//! The client never retries; the repository layer wraps calls in a
//! [`crate::retry::RetryPolicy`].

mod client;
pub mod dto;
pub mod mapper;
mod rate_limit;

pub use client::{CatalogApi, CatalogClient};
pub use rate_limit::RateLimiter;

#[cfg(test)]
mod tests;
