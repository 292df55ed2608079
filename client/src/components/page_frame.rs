//! Common page chrome: nav bar, content column, footer.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::state::profile::footer_text;

/// Column width of a page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PageWidth {
    #[default]
    Narrow,
    Wide,
}

impl PageWidth {
    fn class(self) -> &'static str {
        match self {
            Self::Narrow => "page-column",
            Self::Wide => "page-column page-column-wide",
        }
    }
}

#[component]
pub fn PageFrame(#[prop(optional)] width: PageWidth, children: Children) -> impl IntoView {
    view! {
        <div class="page">
            <div class=width.class()>
                <NavBar/>
                <main class="page-main">{children()}</main>
                <SiteFooter/>
            </div>
        </div>
    }
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    let year = time::OffsetDateTime::now_utc().year();
    view! {
        <footer class="site-footer">
            <p>{footer_text(year)}</p>
        </footer>
    }
}
