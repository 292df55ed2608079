//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and content cards. Theme state reaches them
//! through the context published by `theme_provider`.

pub mod animated_background;
pub mod link_chips;
pub mod nav_bar;
pub mod page_frame;
pub mod post_card;
pub mod project_card;
pub mod tag_list;
pub mod theme_provider;
pub mod theme_toggle;
