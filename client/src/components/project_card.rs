//! Card for one entry of the project catalogue.

use leptos::prelude::*;

use crate::components::tag_list::TagList;
use crate::state::projects::Project;

#[component]
pub fn ProjectCard(project: &'static Project) -> impl IntoView {
    let github = project.github.map(|href| {
        view! {
            <a class="button-outline" href=href target="_blank" rel="noopener noreferrer">"GitHub"</a>
        }
    });
    let live = project.live.map(|href| {
        view! {
            <a class="button-outline" href=href target="_blank" rel="noopener noreferrer">"Live"</a>
        }
    });

    view! {
        <article class="card card-hover">
            <header class="card-header">
                <h3 class="card-title">{project.title}</h3>
                <p class="card-description">{project.description}</p>
            </header>
            <div class="card-content">
                <TagList tags=project.tags.iter().map(|t| (*t).to_owned()).collect()/>
            </div>
            <footer class="card-footer">{github} {live}</footer>
        </article>
    }
}
