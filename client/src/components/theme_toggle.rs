//! Dark/light toggle button.

use leptos::prelude::*;

use crate::components::theme_provider::use_theme;
use crate::state::theme::ResolvedTheme;

/// Flips between explicit `dark` and `light` based on what is shown now.
/// A `system` preference is replaced by the opposite of its resolved theme.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    let on_click = move |_| {
        let target = theme.state.get_untracked().toggle_target();
        theme.set_preference.run(target);
    };
    let icon = move || match theme.state.get().resolved {
        ResolvedTheme::Dark => "☀",
        ResolvedTheme::Light => "☾",
    };
    let title = move || format!("Switch to {} theme", theme.state.get().resolved.toggled().as_str());

    view! {
        <button class="theme-toggle" type="button" aria-label="Toggle theme" title=title on:click=on_click>
            <span aria-hidden="true">{icon}</span>
        </button>
    }
}
