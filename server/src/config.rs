//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_POSTS_DIR: &str = "content/posts";
pub const DEFAULT_PUBLIC_DIR: &str = "public";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort { value: String, source: std::num::ParseIntError },
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub port: u16,
    pub posts_dir: PathBuf,
    pub public_dir: PathBuf,
}

impl SiteConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `POSTS_DIR`: default `content/posts`
    /// - `PUBLIC_DIR`: default `public`
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidPort` when `PORT` is set but not a `u16`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// See [`SiteConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            Some(value) => value.parse::<u16>().map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };
        let posts_dir = get("POSTS_DIR").map_or_else(|| PathBuf::from(DEFAULT_POSTS_DIR), PathBuf::from);
        let public_dir = get("PUBLIC_DIR").map_or_else(|| PathBuf::from(DEFAULT_PUBLIC_DIR), PathBuf::from);

        Ok(Self { port, posts_dir, public_dir })
    }
}
