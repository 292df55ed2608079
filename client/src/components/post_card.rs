//! Blog listing card linking to the post page.

use leptos::prelude::*;

use crate::components::tag_list::TagList;
use crate::net::types::PostSummary;
use crate::state::posts::{meta_line, post_href};

#[component]
pub fn PostCard(post: PostSummary) -> impl IntoView {
    let href = post_href(&post.slug);
    let meta = meta_line(&post.meta);
    let PostSummary { meta: post_meta, .. } = post;

    view! {
        <article class="card card-hover post-card">
            <a href=href class="post-card-link">
                <header class="card-header">
                    <div class="post-card-title-row">
                        <h2 class="card-title">{post_meta.title}</h2>
                        <span class="post-card-arrow" aria-hidden="true">"→"</span>
                    </div>
                    <p class="card-description">{post_meta.description}</p>
                </header>
                <div class="card-content">
                    <TagList tags=post_meta.tags/>
                </div>
                <footer class="card-footer post-meta">{meta}</footer>
            </a>
        </article>
    }
}
