//! Theme context provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! Server rendering and the first client render both start from the stored
//! preference in the `theme` cookie, read from the request on the server and
//! from `document.cookie` in the browser, so the two agree. After hydration an effect builds the browser `ThemeResolver`, publishes its
//! state into a signal, and keeps the resolver alive until cleanup. The
//! pre-paint bootstrap script has already applied the stored theme to
//! `<html>`, so the handoff does not flash.

use leptos::prelude::*;

use crate::state::theme::{ThemePreference, ThemeState};
use crate::util::bootstrap;

#[cfg(feature = "hydrate")]
use crate::util::{
    color_scheme::{DocumentRoot, MediaQuerySource},
    theme_resolver::ThemeResolver,
    theme_storage::CookieStore,
};

#[cfg(feature = "hydrate")]
type BrowserResolver = ThemeResolver<CookieStore, MediaQuerySource, DocumentRoot>;

/// Theme state and setter exposed to the component tree.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub state: ReadSignal<ThemeState>,
    pub set_preference: Callback<ThemePreference>,
}

/// Read the theme context. Panics when rendered outside `ThemeProvider`.
pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

/// The `Cookie` header this render sees.
fn cookie_header() -> Option<String> {
    #[cfg(feature = "ssr")]
    {
        use_context::<http::request::Parts>()
            .and_then(|parts| parts.headers.get(http::header::COOKIE)?.to_str().ok().map(str::to_owned))
    }
    #[cfg(all(feature = "hydrate", not(feature = "ssr")))]
    {
        crate::util::theme_storage::document_cookie()
    }
    #[cfg(not(any(feature = "ssr", feature = "hydrate")))]
    {
        None
    }
}

#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let (state, set_state) = signal(bootstrap::first_render_state(cookie_header().as_deref()));

    #[cfg(feature = "hydrate")]
    let set_preference = {
        let resolver = StoredValue::new_local(None::<BrowserResolver>);

        Effect::new(move || {
            if resolver.with_value(Option::is_some) {
                return;
            }
            let built = BrowserResolver::new(CookieStore::default(), MediaQuerySource, DocumentRoot);
            set_state.set(built.state());
            built.subscribe(move |next| set_state.set(next));
            resolver.set_value(Some(built));
        });

        on_cleanup(move || {
            resolver.try_update_value(|slot| *slot = None);
        });

        Callback::new(move |preference: ThemePreference| {
            resolver.with_value(|slot| match slot {
                Some(resolver) => resolver.set_preference(preference),
                None => log::debug!("theme: preference {preference} before hydration ignored"),
            });
        })
    };

    #[cfg(not(feature = "hydrate"))]
    let set_preference = Callback::new(move |preference: ThemePreference| {
        set_state.set(ThemeState::new(preference, None));
    });

    provide_context(ThemeContext { state, set_preference });

    children()
}
