//! Persistence of the theme preference.
//!
//! The preference lives in a first-party cookie so the pre-paint script in
//! `<head>` can read it before any WASM loads. Requires a browser
//! environment; SSR builds report `StorageError::Unavailable`.

#[cfg(test)]
#[path = "theme_storage_test.rs"]
mod theme_storage_test;

use crate::state::theme::{STORAGE_KEY, STORAGE_MAX_AGE_SECS};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("no document available")]
    Unavailable,
    #[error("cookie access failed: {0}")]
    Cookie(String),
}

/// Where the preference is read from and written to.
pub trait PreferenceStore {
    /// The raw persisted value, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the backing store cannot be read.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Persist `value`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the backing store cannot be written.
    fn save(&self, value: &str) -> Result<(), StorageError>;
}

/// Find `key` in a `Cookie`-style header (`a=1; b=2`).
#[must_use]
pub fn cookie_value<'a>(header: &'a str, key: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim_start().split_once('=')?;
        (name == key).then_some(value)
    })
}

/// The `document.cookie` assignment that stores `value` under `key`.
#[must_use]
pub fn cookie_assignment(key: &str, value: &str) -> String {
    format!("{key}={value}; max-age={STORAGE_MAX_AGE_SECS}; path=/; SameSite=Lax")
}

/// Cookie-backed store on `document.cookie`.
#[derive(Clone, Copy, Debug)]
pub struct CookieStore {
    key: &'static str,
}

impl Default for CookieStore {
    fn default() -> Self {
        Self { key: STORAGE_KEY }
    }
}

#[cfg(feature = "hydrate")]
fn html_document() -> Result<web_sys::HtmlDocument, StorageError> {
    use wasm_bindgen::JsCast as _;

    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
        .ok_or(StorageError::Unavailable)
}

/// The raw `document.cookie` string, if readable.
#[cfg(feature = "hydrate")]
pub fn document_cookie() -> Option<String> {
    html_document().ok()?.cookie().ok()
}

#[cfg(feature = "hydrate")]
fn js_error(err: &wasm_bindgen::JsValue) -> StorageError {
    StorageError::Cookie(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl PreferenceStore for CookieStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let header = html_document()?.cookie().map_err(|e| js_error(&e))?;
            Ok(cookie_value(&header, self.key).map(str::to_owned))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = self.key;
            Err(StorageError::Unavailable)
        }
    }

    fn save(&self, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            html_document()?
                .set_cookie(&cookie_assignment(self.key, value))
                .map_err(|e| js_error(&e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.key, value);
            Err(StorageError::Unavailable)
        }
    }
}
