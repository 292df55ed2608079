use super::*;
use client::net::types::PostMeta;

// =============================================================
// Helpers
// =============================================================

fn post(slug: &str, date: &str) -> Post {
    Post {
        slug: slug.to_owned(),
        meta: PostMeta {
            title: slug.to_uppercase(),
            description: "d".to_owned(),
            date: date.to_owned(),
            read_time: None,
            tags: Vec::new(),
        },
        html: String::new(),
    }
}

fn write(dir: &Path, name: &str, contents: &str) {
    std::fs::write(dir.join(name), contents).unwrap();
}

const VALID: &str = "---\ntitle: Valid\ndescription: A post\ndate: 2025-05-09\ntags: [rust]\n---\nHello **world**.\n";

// =============================================================
// Parsing
// =============================================================

#[test]
fn parse_post_renders_body_and_estimates_read_time() {
    let post = parse_post("valid", VALID).unwrap();
    assert_eq!(post.slug, "valid");
    assert_eq!(post.meta.title, "Valid");
    assert_eq!(post.meta.read_time.as_deref(), Some("1 min read"));
    assert!(post.html.contains("<strong>world</strong>"));
}

#[test]
fn parse_post_keeps_explicit_read_time() {
    let text = "---\ntitle: T\ndescription: D\ndate: 2025-01-01\nreadTime: 9 min read\n---\nshort\n";
    assert_eq!(parse_post("t", text).unwrap().meta.read_time.as_deref(), Some("9 min read"));
}

#[test]
fn parse_post_rejects_empty_slug() {
    assert!(matches!(parse_post("  ", VALID), Err(ContentError::EmptySlug)));
}

#[test]
fn parse_date_accepts_iso_and_long_forms() {
    let iso = parse_date("2025-05-09").unwrap();
    assert_eq!(parse_date("May 9, 2025"), Some(iso));
    assert_eq!(parse_date("Jan 2, 2024").map(|d| d.ordinal()), Some(2));
    assert_eq!(parse_date("someday"), None);
}

#[test]
fn slug_for_uses_file_stem() {
    assert_eq!(slug_for(Path::new("posts/hello-world.mdx")).as_deref(), Some("hello-world"));
    assert_eq!(slug_for(Path::new("posts/ .md")), None);
}

// =============================================================
// Catalog
// =============================================================

#[test]
fn catalog_sorts_newest_first_with_undated_last() {
    let catalog = PostCatalog::from_posts([
        post("old", "2023-01-01"),
        post("undated", "sometime"),
        post("new", "May 9, 2025"),
        post("mid", "2024-06-30"),
    ]);
    let slugs: Vec<_> = catalog.summaries().into_iter().map(|s| s.slug).collect();
    assert_eq!(slugs, vec!["new", "mid", "old", "undated"]);
}

#[test]
fn catalog_breaks_date_ties_by_slug() {
    let catalog = PostCatalog::from_posts([post("b", "2024-01-01"), post("a", "2024-01-01")]);
    let slugs: Vec<_> = catalog.summaries().into_iter().map(|s| s.slug).collect();
    assert_eq!(slugs, vec!["a", "b"]);
}

#[test]
fn catalog_keeps_first_of_duplicate_slugs() {
    let mut first = post("dup", "2024-01-01");
    first.meta.title = "First".to_owned();
    let catalog = PostCatalog::from_posts([first, post("dup", "2025-01-01")]);
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.get("dup").unwrap().meta.title, "First");
}

#[test]
fn load_dir_skips_invalid_and_foreign_files() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "valid.md", VALID);
    write(dir.path(), "also.mdx", "---\ntitle: Also\ndescription: D\ndate: 2025-06-01\n---\nbody\n");
    write(dir.path(), "no-title.md", "---\ndescription: D\ndate: 2025-01-01\n---\nbody\n");
    write(dir.path(), "broken.md", "---\ntitle: [\n---\n");
    write(dir.path(), "notes.txt", VALID);
    std::fs::create_dir(dir.path().join("nested.md")).unwrap();

    let catalog = PostCatalog::load_dir(dir.path());

    let slugs: Vec<_> = catalog.summaries().into_iter().map(|s| s.slug).collect();
    assert_eq!(slugs, vec!["also", "valid"]);
    assert!(catalog.get("no-title").is_none());
    assert!(catalog.get("notes").is_none());
}

#[test]
fn load_dir_missing_directory_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = PostCatalog::load_dir(&dir.path().join("absent"));
    assert!(catalog.is_empty());
}
