//! Shared wire DTOs for the blog API.
//!
//! DESIGN
//! ======
//! The server serializes these same types, so the JSON schema has exactly
//! one definition. Field names follow the frontmatter keys (`readTime`).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Frontmatter of a published post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMeta {
    pub title: String,
    pub description: String,
    /// Publication date as written in the frontmatter, `YYYY-MM-DD`.
    pub date: String,
    #[serde(rename = "readTime", alias = "read_time", default, skip_serializing_if = "Option::is_none")]
    pub read_time: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A listing entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    pub slug: String,
    #[serde(flatten)]
    pub meta: PostMeta,
}

/// A full post with its body rendered to HTML.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub slug: String,
    #[serde(flatten)]
    pub meta: PostMeta,
    pub html: String,
}

impl Post {
    #[must_use]
    pub fn summary(&self) -> PostSummary {
        PostSummary { slug: self.slug.clone(), meta: self.meta.clone() }
    }
}
