//! Portfolio site server: Leptos SSR pages, blog JSON API, static assets.

mod config;
mod content;
mod routes;
mod state;

use std::net::SocketAddr;

use crate::config::{ConfigError, SiteConfig};
use crate::content::PostCatalog;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: SocketAddr, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

#[tokio::main]
async fn main() {
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            eprintln!("ignoring .env: {err}");
        }
    }
    tracing_subscriber::fmt::init();

    if let Err(err) = run().await {
        tracing::error!(error = %err, "server exited");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = SiteConfig::from_env()?;
    let posts = PostCatalog::load_dir(&config.posts_dir);
    let state = state::AppState::new(posts);

    let app = routes::leptos_app(state, &config)?;
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;

    tracing::info!(%addr, "portfolio listening");
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}
