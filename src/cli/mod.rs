//! CLI module
//!
//! Command-line front end for browsing a catalog from the terminal.
//!
//! # Commands
//!
//! - `top-rated` - Page through the top-rated listing
//! - `search` - Search movies by title
//! - `details` - Show details for one movie
//! - `videos` - List videos for one movie
//! - `favorites` - Manage the favorites list

mod commands;
mod runner;

pub use commands::{Cli, Commands, FavoritesAction, OutputFormat};
pub use runner::Runner;
