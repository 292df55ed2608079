//! Small outbound link chips used on the home page.

use leptos::prelude::*;

use crate::state::profile::LinkItem;

/// Rounded chip naming a project the owner created.
#[component]
pub fn ProjectChip(link: LinkItem) -> impl IntoView {
    view! {
        <a class="chip" href=link.href target="_blank" rel="noopener noreferrer">
            <span class="chip-icon" aria-hidden="true">"⚡"</span>
            <span>{link.label}</span>
        </a>
    }
}

/// Button-like link to a social profile.
#[component]
pub fn SocialLink(link: LinkItem) -> impl IntoView {
    view! {
        <a class="social-link" href=link.href target="_blank" rel="noopener noreferrer">
            <span>{link.label}</span>
        </a>
    }
}
