//! Client state and static site content.
//!
//! SYSTEM CONTEXT
//! ==============
//! `theme` holds the preference model shared with the bootstrap script,
//! `posts` the page-level fetch lifecycle, and `projects`/`profile` the
//! content compiled into the app.

pub mod posts;
pub mod profile;
pub mod projects;
pub mod theme;
