use super::*;

use axum::body::{Body, to_bytes};
use axum::http::{Request, header};
use client::net::posts::{find_post, list_posts};
use client::net::types::{Post, PostMeta};
use futures::executor::block_on;
use tower::ServiceExt;

use crate::content::PostCatalog;

// =============================================================
// Helpers
// =============================================================

fn post(slug: &str, date: &str) -> Post {
    Post {
        slug: slug.to_owned(),
        meta: PostMeta {
            title: format!("Title {slug}"),
            description: format!("About {slug}"),
            date: date.to_owned(),
            read_time: Some("1 min read".to_owned()),
            tags: vec!["rust".to_owned()],
        },
        html: format!("<p>Body of {slug}</p>\n"),
    }
}

fn catalog_state() -> AppState {
    AppState::new(PostCatalog::from_posts([post("hello", "2025-05-09"), post("older", "2024-01-01")]))
}

fn site(state: AppState) -> (Router, tempfile::TempDir) {
    let public = tempfile::tempdir().unwrap();
    let config = SiteConfig { port: 0, posts_dir: PathBuf::from("unused"), public_dir: public.path().to_path_buf() };
    let options = LeptosOptions::builder().output_name("portfolio").build();
    (site_router(state, options, &config), public)
}

async fn get_page(router: Router, uri: &str, cookie: Option<&str>) -> (StatusCode, String) {
    let mut request = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }
    let response = router.oneshot(request.body(Body::empty()).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

// =============================================================
// Health
// =============================================================

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

// =============================================================
// Server functions
// =============================================================

#[test]
fn server_functions_read_the_catalog_from_context() {
    let state = catalog_state();
    let owner = Owner::new();
    owner.with(|| {
        provide_context(post_source(&state));

        let listing = block_on(list_posts()).unwrap();
        let slugs: Vec<_> = listing.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, ["hello", "older"]);

        let found = block_on(find_post("hello".to_owned())).unwrap();
        assert_eq!(found.map(|p| p.meta.title), Some("Title hello".to_owned()));
        assert_eq!(block_on(find_post("nope".to_owned())).unwrap(), None);
    });
}

#[test]
fn server_functions_error_without_a_post_source() {
    let owner = Owner::new();
    owner.with(|| {
        assert!(block_on(list_posts()).is_err());
        assert!(block_on(find_post("hello".to_owned())).is_err());
    });
}

// =============================================================
// Server-rendered pages
// =============================================================

#[tokio::test]
async fn blog_index_html_contains_the_listing() {
    let (router, _public) = site(catalog_state());
    let (status, body) = get_page(router, "/blog", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Title hello"), "{body}");
    assert!(body.contains("Title older"));
    assert!(body.find("Title hello") < body.find("Title older"));
    assert!(!body.contains("Loading posts"));
}

#[tokio::test]
async fn blog_index_html_shows_empty_state() {
    let (router, _public) = site(AppState::default());
    let (status, body) = get_page(router, "/blog", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No blog posts found."));
}

#[tokio::test]
async fn post_html_contains_the_rendered_body() {
    let (router, _public) = site(catalog_state());
    let (status, body) = get_page(router, "/blog/hello", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<p>Body of hello</p>"), "{body}");
    assert!(body.contains("2025-05-09 • 1 min read"));
}

#[tokio::test]
async fn unknown_post_is_a_404_with_not_found_state() {
    let (router, _public) = site(catalog_state());
    let (status, body) = get_page(router, "/blog/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Post not found"));
}

#[tokio::test]
async fn first_render_follows_the_theme_cookie() {
    let (router, _public) = site(catalog_state());
    let (_, light) = get_page(router.clone(), "/", Some("theme=light")).await;
    assert!(light.contains(r#"data-theme="light""#), "{light}");
    assert!(light.contains("Switch to dark theme"));

    let (_, default) = get_page(router, "/", None).await;
    assert!(default.contains(r#"data-theme="dark""#));
    assert!(default.contains("Switch to light theme"));
}

#[tokio::test]
async fn public_directory_is_the_fallback() {
    let (router, public) = site(AppState::default());
    std::fs::write(public.path().join("robots.txt"), "User-agent: *\n").unwrap();
    let (status, body) = get_page(router, "/robots.txt", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "User-agent: *\n");
}

#[tokio::test]
async fn pages_link_katex_and_the_typeset_hook() {
    let (router, _public) = site(AppState::default());
    let (_, body) = get_page(router, "/", None).await;
    assert!(body.contains(client::app::KATEX_STYLESHEET));
    assert!(body.contains(client::app::KATEX_SCRIPT));
    assert!(body.contains(client::app::MATH_TYPESET_SCRIPT));
}

#[tokio::test]
async fn typeset_hook_ships_in_public() {
    let public = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../public");
    let config = SiteConfig { port: 0, posts_dir: PathBuf::from("unused"), public_dir: public };
    let options = LeptosOptions::builder().output_name("portfolio").build();
    let router = site_router(AppState::default(), options, &config);
    let (status, body) = get_page(router, client::app::MATH_TYPESET_SCRIPT, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("katex.render"));
}
