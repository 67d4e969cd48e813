//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// cinekit catalog browser CLI
#[derive(Parser, Debug)]
#[command(name = "cinekit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (JSON); falls back to CINEKIT_* environment
    /// variables when absent
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// API key, overriding config file and environment
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Directory for the local cache and favorites files
    #[arg(short, long, global = true, default_value = ".cinekit")]
    pub data_dir: PathBuf,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Page through the top-rated listing
    TopRated {
        /// Number of load steps to run
        #[arg(long, default_value = "1")]
        pages: u32,

        /// Pages fetched concurrently per load step
        #[arg(long, default_value = "1")]
        batch: u32,
    },

    /// Search movies by title
    Search {
        /// Title query
        query: String,

        /// Number of load steps to run
        #[arg(long, default_value = "1")]
        pages: u32,
    },

    /// Show details for one movie
    Details {
        /// Movie id
        id: u64,
    },

    /// List videos (trailers, teasers) for one movie
    Videos {
        /// Movie id
        id: u64,
    },

    /// Manage the favorites list
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
}

/// Favorites subcommands
#[derive(Subcommand, Debug)]
pub enum FavoritesAction {
    /// List favorite movies from the local cache
    List,
    /// Mark a movie as favorite
    Add { id: u64 },
    /// Unmark a movie
    Remove { id: u64 },
    /// Flip the favorite flag
    Toggle { id: u64 },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Human-readable output
    Pretty,
}
