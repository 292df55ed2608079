//! Single post page at `/blog/:slug`.
//!
//! The post is a resource keyed on the slug. An unknown slug renders the
//! not-found state and, during SSR, sets the response status to 404.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};
use leptos_router::hooks::use_params_map;

use crate::components::page_frame::PageFrame;
use crate::components::tag_list::TagList;
use crate::net::posts::find_post;
use crate::net::types::Post;
use crate::state::posts::{Loadable, meta_line};

#[component]
pub fn PostPage() -> impl IntoView {
    let params = use_params_map();
    let post = Resource::new(move || params.with(|p| p.get("slug")).unwrap_or_default(), find_post);

    let body = move || {
        post.get().map(|result| {
            let loaded = Loadable::from_lookup(result);
            match &loaded {
                Loadable::NotFound => mark_not_found(),
                Loadable::Failed(err) => log::warn!("post: load failed: {err}"),
                Loadable::Ready(_) => {}
            }
            post_view(loaded)
        })
    };

    view! {
        <PageFrame>
            <a href="/blog" class="back-link">
                <span aria-hidden="true">"← "</span>
                "Back to all posts"
            </a>
            <Suspense fallback=|| view! { <p class="status-text">"Loading post…"</p> }>{body}</Suspense>
        </PageFrame>
    }
}

fn post_view(loaded: Loadable<Post>) -> AnyView {
    match loaded {
        Loadable::NotFound => view! {
            <div class="empty-state">
                <h1 class="page-title">"Post not found"</h1>
                <p>"There is no post at this address."</p>
            </div>
        }
        .into_any(),
        Loadable::Failed(message) => {
            view! { <p class="status-text status-error">"Could not load post: " {message}</p> }.into_any()
        }
        Loadable::Ready(post) => {
            let meta = meta_line(&post.meta);
            view! {
                <article class="post">
                    <header class="post-header">
                        <h1 class="post-title">{post.meta.title}</h1>
                        <p class="post-description">{post.meta.description}</p>
                        <div class="post-meta">{meta}</div>
                        <TagList tags=post.meta.tags/>
                    </header>
                    <div class="prose" inner_html=post.html></div>
                </article>
            }
            .into_any()
        }
    }
}

fn mark_not_found() {
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(http::StatusCode::NOT_FOUND);
    }
}
