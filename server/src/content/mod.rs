//! Blog content loaded from markdown files on disk.
//!
//! SYSTEM CONTEXT
//! ==============
//! Posts live in `POSTS_DIR` as `*.md` / `*.mdx` files with a `---` YAML
//! frontmatter block. They are parsed once at startup into an immutable
//! [`PostCatalog`] shared by the API handlers.
//!
//! ERROR HANDLING
//! ==============
//! A file that cannot be read or parsed, or that lacks a required field, is
//! logged at `warn` and left out of the catalog. A missing directory yields an
//! empty catalog. Startup never fails because of content.

pub mod frontmatter;
pub mod markdown;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use client::net::source::PostSource;
use client::net::types::{Post, PostSummary};
use time::Date;
use time::macros::format_description;

/// File extensions recognised as posts.
pub const POST_EXTENSIONS: [&str; 2] = ["md", "mdx"];

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to read {}: {source}", .path.display())]
    Io { path: PathBuf, source: std::io::Error },
    #[error("post `{slug}`: frontmatter block is not closed")]
    UnclosedFrontmatter { slug: String },
    #[error("post `{slug}`: invalid frontmatter: {source}")]
    Yaml { slug: String, source: serde_yaml::Error },
    #[error("post `{slug}`: missing required field `{field}`")]
    MissingField { slug: String, field: &'static str },
    #[error("post has an empty slug")]
    EmptySlug,
}

/// Read-only set of valid posts, newest first.
#[derive(Debug, Default, Clone)]
pub struct PostCatalog {
    posts: Vec<Post>,
}

impl PostCatalog {
    /// Build a catalog from already-parsed posts, dropping duplicates by slug
    /// (first wins) and sorting newest first.
    pub fn from_posts(posts: impl IntoIterator<Item = Post>) -> Self {
        let mut unique: Vec<Post> = Vec::new();
        for post in posts {
            if unique.iter().any(|p| p.slug == post.slug) {
                tracing::warn!(slug = %post.slug, "duplicate post slug; keeping the first");
                continue;
            }
            unique.push(post);
        }
        unique.sort_by(newest_first);
        Self { posts: unique }
    }

    /// Load every post file in `dir`.
    pub fn load_dir(dir: &Path) -> Self {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(dir = %dir.display(), error = %err, "posts directory unreadable; serving no posts");
                return Self::default();
            }
        };

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry.path()),
                Err(err) => {
                    tracing::warn!(dir = %dir.display(), error = %err, "skipping unreadable directory entry");
                    None
                }
            })
            .filter(|path| path.is_file() && is_post_file(path))
            .collect();
        paths.sort();

        let posts = paths.iter().filter_map(|path| match load_file(path) {
            Ok(post) => Some(post),
            Err(err) => {
                tracing::warn!(error = %err, "skipping post");
                None
            }
        });
        let catalog = Self::from_posts(posts);
        tracing::info!(dir = %dir.display(), count = catalog.len(), "posts loaded");
        catalog
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn summaries(&self) -> Vec<PostSummary> {
        self.posts.iter().map(Post::summary).collect()
    }

    pub fn get(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.slug == slug)
    }
}

impl PostSource for PostCatalog {
    fn summaries(&self) -> Vec<PostSummary> {
        PostCatalog::summaries(self)
    }

    fn post(&self, slug: &str) -> Option<Post> {
        self.get(slug).cloned()
    }
}

fn is_post_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| POST_EXTENSIONS.contains(&ext))
}

/// Slug for a post file: its stem.
pub fn slug_for(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::trim)
        .filter(|stem| !stem.is_empty())
        .map(str::to_owned)
}

/// Read and parse one post file.
///
/// # Errors
///
/// Returns [`ContentError`] when the file cannot be read or its contents do
/// not form a valid post.
pub fn load_file(path: &Path) -> Result<Post, ContentError> {
    let slug = slug_for(path).ok_or(ContentError::EmptySlug)?;
    let text = std::fs::read_to_string(path).map_err(|source| ContentError::Io { path: path.to_path_buf(), source })?;
    parse_post(&slug, &text)
}

/// Parse post source text under `slug`.
///
/// # Errors
///
/// Returns [`ContentError`] for an empty slug, malformed frontmatter, or a
/// missing `title`, `description`, or `date`.
pub fn parse_post(slug: &str, text: &str) -> Result<Post, ContentError> {
    if slug.trim().is_empty() {
        return Err(ContentError::EmptySlug);
    }
    let (raw, body) = frontmatter::parse(slug, text)?;
    let mut meta = raw.into_meta(slug)?;
    if meta.read_time.is_none() {
        meta.read_time = Some(markdown::read_time_label(body));
    }
    Ok(Post { slug: slug.to_owned(), meta, html: markdown::render_html(body) })
}

/// Parse a frontmatter date. Accepts `2025-05-09` and `May 9, 2025`.
pub fn parse_date(raw: &str) -> Option<Date> {
    let raw = raw.trim();
    let iso = format_description!("[year]-[month]-[day]");
    let long = format_description!("[month repr:long] [day padding:none], [year]");
    let short = format_description!("[month repr:short] [day padding:none], [year]");
    Date::parse(raw, iso)
        .or_else(|_| Date::parse(raw, long))
        .or_else(|_| Date::parse(raw, short))
        .ok()
}

/// Newest first; undated posts after dated ones; ties by slug.
fn newest_first(a: &Post, b: &Post) -> Ordering {
    let da = parse_date(&a.meta.date);
    let db = parse_date(&b.meta.date);
    match (da, db) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
    .then_with(|| a.slug.cmp(&b.slug))
}
