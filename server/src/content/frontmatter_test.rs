use super::*;

// =============================================================
// Splitting
// =============================================================

#[test]
fn split_separates_yaml_and_body() {
    let text = "---\ntitle: Hi\n---\n# Body\n";
    let (yaml, body) = split(text).unwrap();
    assert_eq!(yaml, "title: Hi\n");
    assert_eq!(body, "# Body\n");
}

#[test]
fn split_handles_crlf_and_bom() {
    let text = "\u{feff}---\r\ntitle: Hi\r\n---\r\nbody";
    let (yaml, body) = split(text).unwrap();
    assert_eq!(yaml, "title: Hi\r\n");
    assert_eq!(body, "body");
}

#[test]
fn split_accepts_closing_fence_at_eof() {
    let (yaml, body) = split("---\ntitle: Hi\n---").unwrap();
    assert_eq!(yaml, "title: Hi\n");
    assert_eq!(body, "");
}

#[test]
fn parse_without_fence_is_all_body() {
    let (raw, body) = parse("a", "just text\n").unwrap();
    assert!(raw.title.is_none());
    assert_eq!(body, "just text\n");
}

#[test]
fn parse_rejects_unclosed_fence() {
    let err = parse("a", "---\ntitle: Hi\nno end\n").unwrap_err();
    assert!(matches!(err, ContentError::UnclosedFrontmatter { ref slug } if slug == "a"));
}

#[test]
fn parse_rejects_invalid_yaml() {
    let err = parse("a", "---\ntitle: [unclosed\n---\n").unwrap_err();
    assert!(matches!(err, ContentError::Yaml { .. }));
}

// =============================================================
// Validation
// =============================================================

fn meta_of(yaml: &str) -> Result<PostMeta, ContentError> {
    let text = format!("---\n{yaml}---\nbody\n");
    let (raw, _) = parse("slug", &text)?;
    raw.into_meta("slug")
}

#[test]
fn into_meta_reads_all_fields() {
    let meta = meta_of(
        "title: Hello\ndescription: First\ndate: 2025-05-09\nreadTime: 5 min read\ntags: [Rust, Web]\n",
    )
    .unwrap();
    assert_eq!(meta.title, "Hello");
    assert_eq!(meta.description, "First");
    assert_eq!(meta.date, "2025-05-09");
    assert_eq!(meta.read_time.as_deref(), Some("5 min read"));
    assert_eq!(meta.tags, vec!["Rust", "Web"]);
}

#[test]
fn into_meta_requires_title_description_and_date() {
    for (yaml, field) in [
        ("description: D\ndate: 2025-01-01\n", "title"),
        ("title: T\ndate: 2025-01-01\n", "description"),
        ("title: T\ndescription: D\n", "date"),
        ("title: '  '\ndescription: D\ndate: 2025-01-01\n", "title"),
    ] {
        let err = meta_of(yaml).unwrap_err();
        assert!(
            matches!(err, ContentError::MissingField { field: f, .. } if f == field),
            "{yaml:?} should be missing {field}"
        );
    }
}

#[test]
fn tags_accept_comma_separated_string() {
    let meta = meta_of("title: T\ndescription: D\ndate: 2025-01-01\ntags: \"rust, wasm ,\"\n").unwrap();
    assert_eq!(meta.tags, vec!["rust", "wasm"]);
}

#[test]
fn snake_case_read_time_is_accepted() {
    let meta = meta_of("title: T\ndescription: D\ndate: 2025-01-01\nread_time: 3 min read\n").unwrap();
    assert_eq!(meta.read_time.as_deref(), Some("3 min read"));
}
