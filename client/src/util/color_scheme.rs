//! Browser adapters for the OS color-scheme signal and the document root.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ThemeResolver` talks to the browser only through the two traits here.
//! Hydrate builds get `MediaQuerySource` and `DocumentRoot`; SSR builds get
//! the same types as no-ops so server rendering stays deterministic.

use crate::state::theme::ResolvedTheme;
#[cfg(feature = "hydrate")]
use crate::state::theme::DARK_SCHEME_QUERY;

/// Source of the OS "prefers dark" signal.
pub trait ColorSchemeSource {
    /// RAII handle; dropping it removes the listener.
    type Listener;

    /// Current OS preference, or `None` when unavailable.
    fn prefers_dark(&self) -> Option<bool>;

    /// Call `on_change` with the new value whenever the OS preference flips.
    /// Returns `None` when the signal cannot be observed.
    fn listen(&self, on_change: Box<dyn Fn(bool)>) -> Option<Self::Listener>;
}

/// Receiver of the resolved appearance.
pub trait AppearanceTarget {
    fn apply(&self, theme: ResolvedTheme);
}

/// `matchMedia("(prefers-color-scheme: dark)")`.
#[derive(Clone, Copy, Debug, Default)]
pub struct MediaQuerySource;

#[cfg(feature = "hydrate")]
fn dark_query() -> Option<web_sys::MediaQueryList> {
    web_sys::window()?.match_media(DARK_SCHEME_QUERY).ok().flatten()
}

impl ColorSchemeSource for MediaQuerySource {
    #[cfg(feature = "hydrate")]
    type Listener = gloo_events::EventListener;
    #[cfg(not(feature = "hydrate"))]
    type Listener = ();

    fn prefers_dark(&self) -> Option<bool> {
        #[cfg(feature = "hydrate")]
        {
            dark_query().map(|mq| mq.matches())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn listen(&self, on_change: Box<dyn Fn(bool)>) -> Option<Self::Listener> {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast as _;

            let query = dark_query()?;
            let fallback = query.clone();
            Some(gloo_events::EventListener::new(&query, "change", move |event| {
                let matches = event
                    .dyn_ref::<web_sys::MediaQueryListEvent>()
                    .map_or_else(|| fallback.matches(), web_sys::MediaQueryListEvent::matches);
                on_change(matches);
            }))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            drop(on_change);
            None
        }
    }
}

/// The `<html>` element: class, `data-theme`, and `color-scheme`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

impl AppearanceTarget for DocumentRoot {
    fn apply(&self, theme: ResolvedTheme) {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast as _;

            let Some(root) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            else {
                log::warn!("theme: no document element to apply {}", theme.as_str());
                return;
            };

            let name = theme.as_str();
            let classes = root.class_list();
            if let Err(err) = classes
                .remove_2(ResolvedTheme::Dark.as_str(), ResolvedTheme::Light.as_str())
                .and_then(|()| classes.add_1(name))
            {
                log::warn!("theme: class update failed: {err:?}");
            }
            if let Err(err) = root.set_attribute("data-theme", name) {
                log::warn!("theme: data-theme update failed: {err:?}");
            }
            if let Some(html) = root.dyn_ref::<web_sys::HtmlElement>() {
                if let Err(err) = html.style().set_property("color-scheme", name) {
                    log::warn!("theme: color-scheme update failed: {err:?}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = theme;
        }
    }
}
