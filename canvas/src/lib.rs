//! Animated canvas backdrop for the portfolio site.
//!
//! This crate is compiled to WebAssembly and runs in the browser, but all of
//! its state and motion logic is plain Rust so it can be tested natively.
//! The host (the Leptos client) mounts a [`engine::Backdrop`] on a canvas
//! element and feeds it the resolved theme; everything else happens here.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::Backdrop`]: canvas element plus a running animator |
//! | [`animator`] | Testable [`animator::BackdropCore`] and the per-frame loop |
//! | [`scheduler`] | Cancellable frame loop and the `requestAnimationFrame` backend |
//! | [`dot`] | Dot particles, drift, twinkle, and wrap-around |
//! | [`palette`] | Theme palettes, HSL tokens, gradient stops |
//! | [`render`] | Draws a scene to a 2D context |
//! | [`consts`] | Shared numeric constants (densities, speeds, bands) |

pub mod animator;
pub mod consts;
pub mod dot;
pub mod engine;
pub mod palette;
pub mod render;
pub mod scheduler;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
