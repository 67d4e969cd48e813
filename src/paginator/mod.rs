//! Pagination engine
//!
//! A generic accumulator for page-numbered collections. One
//! [`Paginator`] instance owns the merged item list for a browsing
//! session and advances it one batch of pages at a time through a
//! caller-supplied [`PageLoader`].
//!
//! # Guarantees
//!
//! - Merge order is strictly ascending page number, independent of
//!   fetch completion order.
//! - `current_page`, `total_pages`, and the item list only advance;
//!   [`Paginator::reset`] is the sole shrinking operation.
//! - A `load_next_page` call while a load is already running is a no-op.
//! - In a multi-page batch, partial success counts as forward progress;
//!   only a fully failed batch surfaces an error.

mod engine;

pub use engine::{loader_fn, FnLoader, LoadState, PageLoader, Paginator};
