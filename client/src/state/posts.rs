//! View state for pages that load posts.

#[cfg(test)]
#[path = "posts_test.rs"]
mod posts_test;

use std::fmt::Display;

use crate::net::types::PostMeta;

/// Outcome of a post load as a page renders it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Loadable<T> {
    Ready(T),
    NotFound,
    Failed(String),
}

impl<T> Loadable<T> {
    pub fn from_result<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) => Self::Failed(err.to_string()),
        }
    }

    /// A lookup where `Ok(None)` means the item does not exist.
    pub fn from_lookup<E: Display>(result: Result<Option<T>, E>) -> Self {
        match result {
            Ok(Some(value)) => Self::Ready(value),
            Ok(None) => Self::NotFound,
            Err(err) => Self::Failed(err.to_string()),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// `date • read time` line shown under post titles.
pub fn meta_line(meta: &PostMeta) -> String {
    match meta.read_time.as_deref() {
        Some(read_time) if !read_time.is_empty() => format!("{} • {read_time}", meta.date),
        _ => meta.date.clone(),
    }
}

/// Route path for a post detail page. The slug is percent-encoded.
pub fn post_href(slug: &str) -> String {
    format!("/blog/{}", urlencoding::encode(slug))
}
