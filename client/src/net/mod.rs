//! Post data access shared by the server and the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire schema the server serializes. `source` is the
//! seam the server fills with its post catalog. `posts` holds the server
//! functions pages load through, run in-process during SSR and over HTTP
//! after hydration.

pub mod posts;
pub mod source;
pub mod types;
