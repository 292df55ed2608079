use super::*;

// =============================================================
// Helpers
// =============================================================

fn meta() -> PostMeta {
    PostMeta {
        title: "Hello".to_owned(),
        description: "First post".to_owned(),
        date: "2025-05-09".to_owned(),
        read_time: Some("5 min read".to_owned()),
        tags: vec!["rust".to_owned()],
    }
}

// =============================================================
// Serde shape
// =============================================================

#[test]
fn summary_flattens_meta_and_uses_read_time_key() {
    let summary = PostSummary { slug: "hello".to_owned(), meta: meta() };
    let value = serde_json::to_value(&summary).unwrap();
    assert_eq!(value["slug"], "hello");
    assert_eq!(value["title"], "Hello");
    assert_eq!(value["readTime"], "5 min read");
    assert!(value.get("meta").is_none());
}

#[test]
fn missing_optional_fields_default() {
    let json = r#"{"slug":"a","title":"T","description":"D","date":"2024-01-01"}"#;
    let summary: PostSummary = serde_json::from_str(json).unwrap();
    assert_eq!(summary.meta.read_time, None);
    assert!(summary.meta.tags.is_empty());
}

#[test]
fn read_time_is_omitted_when_absent() {
    let mut m = meta();
    m.read_time = None;
    let value = serde_json::to_value(&m).unwrap();
    assert!(value.get("readTime").is_none());
}

#[test]
fn snake_case_read_time_is_accepted() {
    let json = r#"{"title":"T","description":"D","date":"2024-01-01","read_time":"2 min read"}"#;
    let m: PostMeta = serde_json::from_str(json).unwrap();
    assert_eq!(m.read_time.as_deref(), Some("2 min read"));
}

#[test]
fn post_carries_html_and_summarizes() {
    let post = Post { slug: "hello".to_owned(), meta: meta(), html: "<p>hi</p>".to_owned() };
    let value = serde_json::to_value(&post).unwrap();
    assert_eq!(value["html"], "<p>hi</p>");
    assert_eq!(post.summary(), PostSummary { slug: "hello".to_owned(), meta: meta() });
}
