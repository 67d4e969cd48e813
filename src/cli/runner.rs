//! CLI command execution

use super::commands::{Cli, Commands, FavoritesAction, OutputFormat};
use crate::catalog::CatalogClient;
use crate::config::CatalogConfig;
use crate::error::Result;
use crate::paginator::Paginator;
use crate::repository::{CachingMovieRepository, FavoriteMoviesRepository, MovieRepository};
use crate::store::{JsonFavoritesStore, JsonMovieStore};
use crate::types::Movie;
use std::sync::Arc;
use tracing::info;

/// Executes a parsed CLI invocation
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for a parsed invocation
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::TopRated { pages, batch } => self.top_rated(*pages, *batch).await,
            Commands::Search { query, pages } => self.search(query, *pages).await,
            Commands::Details { id } => self.details(*id).await,
            Commands::Videos { id } => self.videos(*id).await,
            Commands::Favorites { action } => self.favorites(action).await,
        }
    }

    fn load_config(&self) -> Result<CatalogConfig> {
        let mut config = match &self.cli.config {
            Some(path) => CatalogConfig::from_file(path)?,
            None => CatalogConfig::from_env()?,
        };
        if let Some(api_key) = &self.cli.api_key {
            config.api_key = api_key.clone();
        }
        config.validate()?;
        Ok(config)
    }

    fn movie_store(&self) -> Result<Arc<JsonMovieStore>> {
        std::fs::create_dir_all(&self.cli.data_dir)?;
        Ok(Arc::new(JsonMovieStore::open(
            self.cli.data_dir.join("movies.json"),
        )?))
    }

    fn favorites_store(&self) -> Result<Arc<JsonFavoritesStore>> {
        std::fs::create_dir_all(&self.cli.data_dir)?;
        Ok(Arc::new(JsonFavoritesStore::open(
            self.cli.data_dir.join("favorites.json"),
        )?))
    }

    fn repository(&self) -> Result<Arc<CachingMovieRepository>> {
        let config = self.load_config()?;
        let retry = config.retry.policy();
        let client = Arc::new(CatalogClient::new(config));
        let store = self.movie_store()?;
        Ok(Arc::new(
            CachingMovieRepository::new(client, store).with_retry(retry),
        ))
    }

    async fn top_rated(&self, pages: u32, batch: u32) -> Result<()> {
        let repo = self.repository()?;
        let pager = {
            let repo = Arc::clone(&repo);
            Paginator::from_fn(batch, move |page| {
                let repo = Arc::clone(&repo);
                async move { repo.top_rated(page).await }
            })
        };

        for _ in 0..pages {
            if !pager.has_more_pages() {
                break;
            }
            pager.load_next_page().await?;
        }

        info!(
            pages = pager.current_page(),
            total_pages = pager.total_pages(),
            items = pager.item_count(),
            "top-rated listing loaded"
        );
        self.print_movies(&pager.items())
    }

    async fn search(&self, query: &str, pages: u32) -> Result<()> {
        let repo = self.repository()?;
        let pager = {
            let repo = Arc::clone(&repo);
            let query = query.to_string();
            Paginator::from_fn(1, move |page| {
                let repo = Arc::clone(&repo);
                let query = query.clone();
                async move { repo.search(&query, page).await }
            })
        };

        for _ in 0..pages {
            if !pager.has_more_pages() {
                break;
            }
            pager.load_next_page().await?;
        }

        self.print_movies(&pager.items())
    }

    async fn details(&self, id: u64) -> Result<()> {
        let repo = self.repository()?;
        let details = repo.movie_details(id).await?;
        match self.cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&details)?),
            OutputFormat::Pretty => {
                let year = details
                    .year()
                    .map_or_else(|| "----".to_string(), |y| y.to_string());
                println!("{} ({year})  *{:.1}", details.title, details.vote_average);
                if let Some(country) = details.country() {
                    println!("Country: {country}");
                }
                if !details.genres.is_empty() {
                    let names: Vec<&str> =
                        details.genres.iter().map(|g| g.name.as_str()).collect();
                    println!("Genres: {}", names.join(", "));
                }
                if let Some(overview) = &details.overview {
                    println!("\n{overview}");
                }
            }
        }
        Ok(())
    }

    async fn videos(&self, id: u64) -> Result<()> {
        let repo = self.repository()?;
        let videos = repo.movie_videos(id).await?;
        match self.cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&videos)?),
            OutputFormat::Pretty => {
                for video in &videos {
                    println!("[{}] {} ({} / {})", video.kind, video.name, video.site, video.key);
                }
            }
        }
        Ok(())
    }

    async fn favorites(&self, action: &FavoritesAction) -> Result<()> {
        let repo =
            FavoriteMoviesRepository::new(self.favorites_store()?, self.movie_store()?);
        match action {
            FavoritesAction::List => {
                let movies = repo.favorite_movies().await?;
                self.print_movies(&movies)
            }
            FavoritesAction::Add { id } => {
                repo.add(*id).await?;
                println!("Added {id} to favorites");
                Ok(())
            }
            FavoritesAction::Remove { id } => {
                repo.remove(*id).await?;
                println!("Removed {id} from favorites");
                Ok(())
            }
            FavoritesAction::Toggle { id } => {
                let now_favorite = repo.toggle(*id).await?;
                if now_favorite {
                    println!("{id} is now a favorite");
                } else {
                    println!("{id} is no longer a favorite");
                }
                Ok(())
            }
        }
    }

    fn print_movies(&self, movies: &[Movie]) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(movies)?),
            OutputFormat::Pretty => {
                for movie in movies {
                    let year = movie.release_date.map_or_else(
                        || "----".to_string(),
                        |d| {
                            use chrono::Datelike;
                            d.year().to_string()
                        },
                    );
                    println!("{:>8}  {} ({year})  *{:.1}", movie.id, movie.title, movie.vote_average);
                }
            }
        }
        Ok(())
    }
}
