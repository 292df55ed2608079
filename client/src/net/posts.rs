//! Server functions backing the blog pages.
//!
//! During SSR these run in-process against the `SharedPostSource` in context,
//! so the first HTML response already carries the posts. After hydration the
//! same calls go over HTTP to the handlers `leptos_axum` registers for them.

use leptos::prelude::*;

use super::types::{Post, PostSummary};

/// Listing for the blog index.
///
/// # Errors
///
/// Returns `ServerFnError` when no post source is configured or the request
/// fails in transit.
#[server]
pub async fn list_posts() -> Result<Vec<PostSummary>, ServerFnError> {
    Ok(post_source()?.summaries())
}

/// One post, or `None` for an unknown slug.
///
/// # Errors
///
/// Returns `ServerFnError` when no post source is configured or the request
/// fails in transit.
#[server]
pub async fn find_post(slug: String) -> Result<Option<Post>, ServerFnError> {
    Ok(post_source()?.post(&slug))
}

#[cfg(feature = "ssr")]
fn post_source() -> Result<super::source::SharedPostSource, ServerFnError> {
    use_context::<super::source::SharedPostSource>()
        .ok_or_else(|| ServerFnError::new("post source missing from context"))
}
