//! Projects page: featured projects first, then the rest.

use leptos::prelude::*;

use crate::components::page_frame::{PageFrame, PageWidth};
use crate::components::project_card::ProjectCard;
use crate::state::projects::{featured, others};

#[component]
pub fn ProjectsPage() -> impl IntoView {
    view! {
        <PageFrame width=PageWidth::Wide>
            <h1 class="page-title">"Projects"</h1>

            <section class="project-section">
                <h2 class="section-title">"Featured Projects"</h2>
                <div class="card-grid">
                    {featured().map(|project| view! { <ProjectCard project=project/> }).collect_view()}
                </div>
            </section>

            <section class="project-section">
                <h2 class="section-title">"Other Projects"</h2>
                <div class="card-grid">
                    {others().map(|project| view! { <ProjectCard project=project/> }).collect_view()}
                </div>
            </section>
        </PageFrame>
    }
}
