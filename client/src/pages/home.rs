//! Landing page: who the owner is, what they build, where to find them.

use leptos::prelude::*;

use crate::components::link_chips::{ProjectChip, SocialLink};
use crate::components::page_frame::PageFrame;
use crate::state::profile::{CREATOR_OF, EMAIL, EMPLOYER, INTERESTS, NAME, SOCIAL_LINKS, TAGLINE, mailto};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageFrame>
            <section class="home">
                <h1 class="home-name">{NAME}</h1>
                <p class="home-tagline">{TAGLINE}</p>

                <div class="home-block">
                    <h2 class="home-label">"Working at"</h2>
                    <span class="pill">{EMPLOYER}</span>
                </div>

                <div class="home-block">
                    <h2 class="home-label">"Creator of"</h2>
                    <div class="chip-row">
                        {CREATOR_OF.iter().map(|link| view! { <ProjectChip link=*link/> }).collect_view()}
                    </div>
                </div>

                <p class="home-text">{INTERESTS}</p>

                <p class="home-text">
                    "I write " <a href="/blog" class="inline-link">"blog posts"</a>
                    " about development, algorithms, design, and technology."
                </p>

                <div class="home-block">
                    <h2 class="home-heading">"Find me on"</h2>
                    <div class="social-row">
                        {SOCIAL_LINKS.iter().map(|link| view! { <SocialLink link=*link/> }).collect_view()}
                    </div>
                </div>

                <div class="home-block">
                    <h2 class="home-heading">"Or mail me at"</h2>
                    <a href=mailto() class="mail-link">
                        <span aria-hidden="true">"✉"</span>
                        <span>{EMAIL}</span>
                    </a>
                </div>
            </section>
        </PageFrame>
    }
}
