//! Full-viewport animated canvas behind the page content.
//!
//! The canvas is inert markup on the server. After hydration an effect mounts
//! a `BackgroundHost` on it; the frame loop reads the resolved theme on every
//! tick, so theme changes need no restart. Rendering outside `ThemeProvider`
//! panics in both builds.

#[cfg(test)]
#[path = "animated_background_test.rs"]
mod animated_background_test;

use leptos::prelude::*;

use crate::components::theme_provider::use_theme;
#[cfg(feature = "hydrate")]
use crate::state::theme::ResolvedTheme;
#[cfg(feature = "hydrate")]
use crate::util::background::{self, BrowserBackground};

#[component]
pub fn AnimatedBackground() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let theme = use_theme();

    #[cfg(feature = "hydrate")]
    {
        let host = StoredValue::new_local(None::<BrowserBackground>);
        let state = theme.state;

        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if host.with_value(Option::is_some) {
                return;
            }
            let resolved = move || state.try_get_untracked().map_or(ResolvedTheme::default(), |s| s.resolved);
            host.set_value(background::mount(canvas, resolved));
        });

        on_cleanup(move || {
            host.try_update_value(|slot| *slot = None);
        });
    }

    view! {
        <canvas
            node_ref=canvas_ref
            class="animated-background"
            data-theme=move || theme.state.get().resolved.as_str()
            aria-hidden="true"
        ></canvas>
    }
}
