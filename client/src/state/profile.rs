//! Owner profile and site navigation content.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

pub const NAME: &str = "Bhaskar Jha";
pub const SITE_MARK: &str = "GwdG";
pub const TAGLINE: &str =
    "Hey! I'm a passionate developer and designer focused on creating beautiful, functional experiences.";
pub const EMPLOYER: &str = "Palanam Technologies";
pub const INTERESTS: &str = "Interested in data structures, algorithms, web development, deep learning, \
                             embedded systems, competitive programming, and more.";
pub const EMAIL: &str = "bhaskar2004jha@gmail.com";
pub const FOOTER_HANDLE: &str = "bhaskar";

/// A labelled outbound link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkItem {
    pub label: &'static str,
    pub href: &'static str,
}

pub const CREATOR_OF: &[LinkItem] = &[
    LinkItem { label: "To All The Films", href: "https://to-all-the-films.vercel.app/" },
    LinkItem { label: "PasteBox", href: "https://save-your-last-note.vercel.app/" },
];

pub const SOCIAL_LINKS: &[LinkItem] = &[
    LinkItem { label: "GitHub", href: "https://github.com/gw-dg" },
    LinkItem { label: "Twitter", href: "https://x.com/bhaskar__jha" },
    LinkItem { label: "Linkedin", href: "https://www.linkedin.com/in/bhaskar-jha-89226a218/" },
];

/// Entry in the top navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub external: bool,
}

impl NavItem {
    /// Whether this item matches the current route. Nested routes count, so
    /// `/blog/hello` keeps `Blog` highlighted. External links never match.
    pub fn is_active(&self, path: &str) -> bool {
        if self.external {
            return false;
        }
        path == self.href || path.strip_prefix(self.href).is_some_and(|rest| rest.starts_with('/'))
    }
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Blog", href: "/blog", external: false },
    NavItem { label: "Projects", href: "/projects", external: false },
    NavItem {
        label: "Resume",
        href: "https://drive.google.com/file/d/1qBWrBnLxzGau2YwkLf8PsMkTQ-_AwZtx/view?usp=sharing",
        external: true,
    },
];

pub fn mailto() -> String {
    format!("mailto:{EMAIL}")
}

pub fn footer_text(year: i32) -> String {
    format!("© {year} • {FOOTER_HANDLE}")
}
