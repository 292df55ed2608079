//! Root application component, routing, and the SSR document shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, SsrMode, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::animated_background::AnimatedBackground;
use crate::components::theme_provider::ThemeProvider;
use crate::pages::{blog::BlogPage, home::HomePage, post::PostPage, projects::ProjectsPage};
use crate::state::profile::NAME;
use crate::util::{bootstrap, theme_css};

pub const KATEX_STYLESHEET: &str = "/css/katex.min.css";
pub const KATEX_SCRIPT: &str = "/js/katex.min.js";
pub const MATH_TYPESET_SCRIPT: &str = "/js/render-math.js";

/// HTML shell rendered on the server for SSR + hydration.
///
/// The bootstrap script runs before first paint and applies the stored theme
/// to `<html>`; the palette stylesheet defines the color tokens it selects.
/// KaTeX and its typesetting hook are served from `public/`.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script inner_html=bootstrap::script()></script>
                <style id="theme-tokens" inner_html=theme_css::stylesheet()></style>
                <link rel="stylesheet" href=KATEX_STYLESHEET/>
                <script defer src=KATEX_SCRIPT></script>
                <script defer src=MATH_TYPESET_SCRIPT></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text=NAME/>

        <ThemeProvider>
            <AnimatedBackground/>
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("projects") view=ProjectsPage/>
                    <Route path=StaticSegment("blog") view=BlogPage ssr=SsrMode::Async/>
                    <Route
                        path=(StaticSegment("blog"), ParamSegment("slug"))
                        view=PostPage
                        ssr=SsrMode::Async
                    />
                </Routes>
            </Router>
        </ThemeProvider>
    }
}
