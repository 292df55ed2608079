//! # client
//!
//! Leptos frontend for the portfolio site. Builds as `ssr` for server
//! rendering inside `server`, or as `hydrate` for the browser WASM bundle.
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | Document shell, routes, root providers |
//! | [`components`] | Theme provider and toggle, backdrop canvas, cards, chrome |
//! | [`pages`] | Home, projects, blog index, post |
//! | [`state`] | Theme model plus static profile and project content |
//! | [`net`] | Blog server functions, post source seam, wire types |
//! | [`util`] | Theme resolver, browser adapters, bootstrap script, theme CSS |

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console_log init failed: {err}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
