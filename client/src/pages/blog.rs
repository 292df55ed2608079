//! Blog index listing every valid post, newest first.
//!
//! SYSTEM CONTEXT
//! ==============
//! The listing is a resource over the `list_posts` server function. The
//! route renders in async SSR mode, so the first response already contains
//! the cards. The server has filtered invalid records and sorted the list.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use crate::components::page_frame::{PageFrame, PageWidth};
use crate::components::post_card::PostCard;
use crate::net::posts::list_posts;
use crate::net::types::PostSummary;
use crate::state::posts::Loadable;

#[component]
pub fn BlogPage() -> impl IntoView {
    let posts = Resource::new(|| (), |()| list_posts());

    let body = move || {
        posts.get().map(|result| {
            let listing = Loadable::from_result(result);
            if let Loadable::Failed(err) = &listing {
                log::warn!("blog: listing load failed: {err}");
            }
            listing_view(listing)
        })
    };

    view! {
        <PageFrame width=PageWidth::Wide>
            <h1 class="page-title">"Blogs"</h1>
            <Suspense fallback=|| view! { <p class="status-text">"Loading posts…"</p> }>{body}</Suspense>
        </PageFrame>
    }
}

fn listing_view(listing: Loadable<Vec<PostSummary>>) -> AnyView {
    match listing {
        Loadable::Ready(list) if list.is_empty() => empty_state().into_any(),
        Loadable::NotFound => empty_state().into_any(),
        Loadable::Ready(list) => view! {
            <div class="post-list">
                {list.into_iter().map(|post| view! { <PostCard post=post/> }).collect_view()}
            </div>
        }
        .into_any(),
        Loadable::Failed(message) => {
            view! { <p class="status-text status-error">"Could not load posts: " {message}</p> }.into_any()
        }
    }
}

fn empty_state() -> impl IntoView {
    view! {
        <div class="empty-state">
            <p>"No blog posts found."</p>
        </div>
    }
}
