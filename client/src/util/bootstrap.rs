//! Pre-paint theme script.
//!
//! SYSTEM CONTEXT
//! ==============
//! The SSR shell inlines `script()` in `<head>` so the document root carries
//! the right theme before first paint, long before the WASM bundle hydrates.
//! The script is generated from the same constants the resolver uses, and
//! `resolve_cookie_header` mirrors its logic in Rust so the two can be
//! checked against each other.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use crate::state::theme::{DARK_SCHEME_QUERY, ResolvedTheme, STORAGE_KEY, ThemePreference, ThemeState};
use crate::util::theme_storage::cookie_value;

/// Initial theme state for a `Cookie` header, as the script computes it.
#[must_use]
pub fn initial_state(cookie_header: Option<&str>, os_prefers_dark: Option<bool>) -> ThemeState {
    let stored = cookie_header.and_then(|header| cookie_value(header, STORAGE_KEY));
    let preference = ThemePreference::parse_stored(stored);
    let os = if preference == ThemePreference::System { os_prefers_dark } else { None };
    ThemeState::new(preference, os)
}

/// State for the first render, before the resolver exists.
///
/// The server cannot see the OS signal, so `system` renders as the default
/// on both sides of hydration and the resolver corrects it afterwards.
#[must_use]
pub fn first_render_state(cookie_header: Option<&str>) -> ThemeState {
    initial_state(cookie_header, None)
}

/// The theme the pre-paint script applies for a `Cookie` header.
#[must_use]
pub fn resolve_cookie_header(cookie_header: Option<&str>, os_prefers_dark: Option<bool>) -> ResolvedTheme {
    initial_state(cookie_header, os_prefers_dark).resolved
}

fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| String::from("\"\""))
}

/// Inline JavaScript for the `<head>` of every page.
///
/// Reads the `theme` cookie, resolves it (consulting `matchMedia` only for
/// `system`), and applies class, `data-theme`, and `color-scheme` to the
/// document root. Any exception falls back to the default theme.
#[must_use]
pub fn script() -> String {
    let valid: Vec<&str> = ThemePreference::ALL.iter().map(|p| p.as_str()).collect();
    let valid = serde_json::to_string(&valid).unwrap_or_else(|_| String::from("[]"));
    let key = js_string(STORAGE_KEY);
    let default_preference = js_string(ThemePreference::default().as_str());
    let default_resolved = js_string(ResolvedTheme::default().as_str());
    let system = js_string(ThemePreference::System.as_str());
    let dark = js_string(ResolvedTheme::Dark.as_str());
    let light = js_string(ResolvedTheme::Light.as_str());
    let query = js_string(DARK_SCHEME_QUERY);

    format!(
        "(function(){{\
var key={key},valid={valid},fallback={default_resolved};\
function apply(t){{var r=document.documentElement;r.classList.remove({dark},{light});r.classList.add(t);\
r.setAttribute(\"data-theme\",t);r.style.colorScheme=t;}}\
try{{\
var stored=null,parts=document.cookie.split(\";\");\
for(var i=0;i<parts.length;i++){{var p=parts[i].replace(/^\\s+/,\"\");\
if(p.indexOf(key+\"=\")===0){{stored=p.substring(key.length+1);break;}}}}\
var pref=valid.indexOf(stored)>=0?stored:{default_preference};\
var resolved=pref;\
if(pref==={system}){{var mq=window.matchMedia?window.matchMedia({query}):null;\
resolved=mq?(mq.matches?{dark}:{light}):fallback;}}\
apply(resolved);\
}}catch(e){{try{{apply(fallback);}}catch(_){{}}}}\
}})();"
    )
}
