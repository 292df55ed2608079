//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! post catalog is loaded once at startup and never mutated, so handlers
//! share it behind an `Arc` without locking.

use std::sync::Arc;

use crate::content::PostCatalog;

#[derive(Clone, Default)]
pub struct AppState {
    pub posts: Arc<PostCatalog>,
}

impl AppState {
    #[must_use]
    pub fn new(posts: PostCatalog) -> Self {
        Self { posts: Arc::new(posts) }
    }
}
