//! Post source seam.
//!
//! The server implements `PostSource` for its catalog and provides a
//! `SharedPostSource` as Leptos context for every render and server function
//! call. The client crate only ever sees the trait.

#[cfg(test)]
#[path = "source_test.rs"]
mod source_test;

use std::sync::Arc;

use super::types::{Post, PostSummary};

/// Read-only access to published posts.
pub trait PostSource: Send + Sync {
    /// Every valid post, newest first.
    fn summaries(&self) -> Vec<PostSummary>;

    /// The post at `slug`, if it exists.
    fn post(&self, slug: &str) -> Option<Post>;
}

/// Cloneable handle stored in Leptos context.
#[derive(Clone)]
pub struct SharedPostSource(Arc<dyn PostSource>);

impl SharedPostSource {
    pub fn new(source: Arc<dyn PostSource>) -> Self {
        Self(source)
    }

    #[must_use]
    pub fn summaries(&self) -> Vec<PostSummary> {
        self.0.summaries()
    }

    #[must_use]
    pub fn post(&self, slug: &str) -> Option<Post> {
        self.0.post(slug)
    }
}

impl std::fmt::Debug for SharedPostSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedPostSource").finish_non_exhaustive()
    }
}
