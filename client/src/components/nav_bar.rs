//! Top navigation bar with route highlighting and the theme toggle.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::theme_toggle::ThemeToggle;
use crate::state::profile::{NAV_ITEMS, SITE_MARK};

#[component]
pub fn NavBar() -> impl IntoView {
    let pathname = use_location().pathname;

    let links = NAV_ITEMS
        .iter()
        .copied()
        .map(|item| {
            let active = move || pathname.with(|path| item.is_active(path));
            let class = move || if active() { "nav-link nav-link-active" } else { "nav-link" };
            let current = move || active().then_some("page");
            view! {
                <a
                    href=item.href
                    class=class
                    aria-current=current
                    target=item.external.then_some("_blank")
                    rel=item.external.then_some("noopener noreferrer")
                >
                    {item.label}
                </a>
            }
        })
        .collect_view();

    view! {
        <header class="nav-bar">
            <a href="/" class="nav-mark">
                <span>{SITE_MARK}</span>
            </a>
            <nav class="nav-links">
                {links}
                <ThemeToggle/>
            </nav>
        </header>
    }
}
