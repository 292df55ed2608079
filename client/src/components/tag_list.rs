//! Row of tag badges.

use leptos::prelude::*;

#[component]
pub fn TagList(tags: Vec<String>) -> impl IntoView {
    (!tags.is_empty()).then(|| {
        view! {
            <div class="tag-list">
                {tags.into_iter().map(|tag| view! { <span class="badge">{tag}</span> }).collect_view()}
            </div>
        }
    })
}
