//! `---` delimited YAML frontmatter.

#[cfg(test)]
#[path = "frontmatter_test.rs"]
mod frontmatter_test;

use client::net::types::PostMeta;
use serde::Deserialize;

use super::ContentError;

const FENCE: &str = "---";

/// Frontmatter as written. Every field is optional here; [`RawFrontmatter::into_meta`]
/// enforces which ones a published post needs.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFrontmatter {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<serde_yaml::Value>,
    #[serde(alias = "read_time")]
    pub read_time: Option<String>,
    #[serde(default)]
    pub tags: Tags,
}

/// `tags` may be a list or a single comma-separated string.
#[derive(Debug, Default, Deserialize)]
#[serde(untagged)]
pub enum Tags {
    #[default]
    None,
    List(Vec<String>),
    Joined(String),
}

impl Tags {
    fn into_vec(self) -> Vec<String> {
        let raw = match self {
            Self::None => Vec::new(),
            Self::List(list) => list,
            Self::Joined(joined) => joined.split(',').map(str::to_owned).collect(),
        };
        raw.into_iter()
            .map(|tag| tag.trim().to_owned())
            .filter(|tag| !tag.is_empty())
            .collect()
    }
}

impl RawFrontmatter {
    /// Validate into a publishable [`PostMeta`].
    ///
    /// # Errors
    ///
    /// `ContentError::MissingField` when `title`, `description`, or `date` is
    /// absent or blank.
    pub fn into_meta(self, slug: &str) -> Result<PostMeta, ContentError> {
        let missing = |field| ContentError::MissingField { slug: slug.to_owned(), field };
        let title = non_blank(self.title).ok_or_else(|| missing("title"))?;
        let description = non_blank(self.description).ok_or_else(|| missing("description"))?;
        let date = non_blank(self.date.and_then(date_text)).ok_or_else(|| missing("date"))?;
        Ok(PostMeta {
            title,
            description,
            date,
            read_time: non_blank(self.read_time),
            tags: self.tags.into_vec(),
        })
    }
}

// YAML reads an unquoted `2025-05-09` as a string, but numbers and other
// scalars are accepted too.
fn date_text(value: serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

/// Split `text` into parsed frontmatter and the markdown body.
///
/// A file without an opening fence has empty frontmatter and is all body.
///
/// # Errors
///
/// `UnclosedFrontmatter` when the opening fence has no closing fence, `Yaml`
/// when the block is not valid YAML.
pub fn parse<'a>(slug: &str, text: &'a str) -> Result<(RawFrontmatter, &'a str), ContentError> {
    let Some((yaml, body)) = split(text) else {
        if opens_with_fence(text) {
            return Err(ContentError::UnclosedFrontmatter { slug: slug.to_owned() });
        }
        return Ok((RawFrontmatter::default(), text));
    };
    if yaml.trim().is_empty() {
        return Ok((RawFrontmatter::default(), body));
    }
    let raw = serde_yaml::from_str(yaml).map_err(|source| ContentError::Yaml { slug: slug.to_owned(), source })?;
    Ok((raw, body))
}

fn opens_with_fence(text: &str) -> bool {
    text.trim_start_matches('\u{feff}')
        .lines()
        .next()
        .is_some_and(|line| line.trim_end() == FENCE)
}

/// Locate the frontmatter block. Returns `(yaml, body)`.
fn split(text: &str) -> Option<(&str, &str)> {
    let text = text.trim_start_matches('\u{feff}');
    let mut lines = text.split_inclusive('\n');
    let first = lines.next()?;
    if first.trim_end() != FENCE {
        return None;
    }
    let yaml_start = first.len();
    let mut offset = yaml_start;
    for line in lines {
        if line.trim_end() == FENCE {
            let yaml = &text[yaml_start..offset];
            let body = &text[offset + line.len()..];
            return Some((yaml, body));
        }
        offset += line.len();
    }
    None
}
