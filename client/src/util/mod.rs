//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod background;
pub mod bootstrap;
pub mod color_scheme;
#[cfg(test)]
pub(crate) mod script_runner;
pub mod theme_css;
pub mod theme_resolver;
pub mod theme_storage;
