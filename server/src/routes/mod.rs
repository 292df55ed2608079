//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON API and stitches it with Leptos SSR rendering
//! under a single Axum router. Every render and server function call gets the
//! post catalog as a `SharedPostSource` in context. Compiled WASM/JS/CSS is
//! served from `/pkg`; anything unmatched falls through to the static
//! `public/` directory.

pub mod posts;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use client::net::source::SharedPostSource;

use crate::config::{ConfigError, SiteConfig};
use crate::state::AppState;

/// JSON API routes plus the health check.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/posts", get(posts::list_posts))
        .route("/api/posts/{slug}", get(posts::get_post))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Full site: API routes + Leptos SSR pages + static assets.
///
/// # Errors
///
/// Returns `ConfigError::Leptos` if the Leptos configuration cannot be loaded
/// (missing or malformed `[[workspace.metadata.leptos]]` section).
pub fn leptos_app(state: AppState, config: &SiteConfig) -> Result<Router, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    Ok(site_router(state, conf.leptos_options, config))
}

/// [`leptos_app`] with explicit Leptos options.
pub fn site_router(state: AppState, leptos_options: LeptosOptions, config: &SiteConfig) -> Router {
    let routes = generate_route_list(client::app::App);

    let source = post_source(&state);

    let leptos_router = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            move || provide_context(source.clone()),
            {
                let opts = leptos_options.clone();
                move || client::app::shell(opts.clone())
            },
        )
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    let public_service = ServeDir::new(&config.public_dir);

    api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback_service(public_service)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// The catalog as the client crate sees it.
pub fn post_source(state: &AppState) -> SharedPostSource {
    SharedPostSource::new(state.posts.clone())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
