//! Cinedex server binary
//!
//! Bootstrap order: logging, configuration, one store connection for the
//! process lifetime, HTTP server. The store handle is torn down explicitly
//! when the server loop returns.

use std::sync::Arc;

use cinedex::config::Config;
use cinedex::db::{Database, SurrealGenreStore, SurrealMovieStore};
use cinedex::server::{self, AppState};
use cinedex::services::{GenreService, MovieService};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cinedex=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env();
    tracing::info!(
        "Starting cinedex ({} environment), store at {}",
        config.environment,
        config.database_url
    );

    let db = Database::connect(&config.database_url).await?;

    let genre_store = Arc::new(SurrealGenreStore::new(db.clone()));
    let movie_store = Arc::new(SurrealMovieStore::new(db.clone()));

    let state = AppState::new(
        GenreService::new(genre_store.clone()),
        MovieService::new(movie_store, genre_store),
    );

    let result = server::start_server(state, config.port).await;

    db.close().await;
    result
}
