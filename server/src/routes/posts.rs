//! Blog post JSON endpoints.

#[cfg(test)]
#[path = "posts_test.rs"]
mod posts_test;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use client::net::types::{Post, PostSummary};

use crate::state::AppState;

/// `GET /api/posts`: valid posts, newest first.
pub async fn list_posts(State(state): State<AppState>) -> Json<Vec<PostSummary>> {
    Json(state.posts.summaries())
}

/// `GET /api/posts/{slug}`.
///
/// # Errors
///
/// `404` when no post has this slug.
pub async fn get_post(State(state): State<AppState>, Path(slug): Path<String>) -> Result<Json<Post>, StatusCode> {
    match state.posts.get(&slug) {
        Some(post) => Ok(Json(post.clone())),
        None => {
            tracing::debug!(%slug, "post not found");
            Err(StatusCode::NOT_FOUND)
        }
    }
}
