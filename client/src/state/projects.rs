//! Static project catalogue shown on the projects page.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

/// A portfolio project entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub github: Option<&'static str>,
    pub live: Option<&'static str>,
    pub featured: bool,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "To All The Films",
        description: "Movie discovery app using React, Firebase, and the TMDB API, allowing users to explore \
                      films, view detailed information, and receive personalized recommendations based on their \
                      preferences and watch history.",
        tags: &["React", "Javascript", "Firebase", "Machine Learning", "Pinecone"],
        github: Some("https://github.com/gw-dg/to-all-the-films"),
        live: Some("https://to-all-the-films.vercel.app/"),
        featured: true,
    },
    Project {
        title: "PasteBox",
        description: "Save your Notes, Code snippets for last minute revision",
        tags: &["React", "JavaScript", "Tailwind", "Express", "Mongodb", "Passportjs"],
        github: Some("https://github.com/gw-dg/pastebox"),
        live: Some("https://save-your-last-note.vercel.app/"),
        featured: true,
    },
    Project {
        title: "DeepDiagnose",
        description: "Machine Learning based Disease Prediction based on Symptoms.",
        tags: &["Python", "Next.js", "FastAPI", "Machine Learning"],
        github: Some("https://github.com/gw-dg/DeepDiagnoseFrontend"),
        live: Some("https://deepdiagnose.vercel.app/"),
        featured: false,
    },
    Project {
        title: "Zen-Type",
        description: "Minimalist Typing Speed testing application",
        tags: &["React", "Firebase", "ChartJs"],
        github: Some("https://github.com/gw-dg/zen-type"),
        live: Some("https://zen-type.netlify.app/"),
        featured: false,
    },
    Project {
        title: "MQTT Server",
        description: "An IoT project demonstrating a basic MQTT broker setup using a Raspberry Pi as the server \
                      and NodeMCU as the client to publish and subscribe to messages over a local network.",
        tags: &["IoT", "MQTT", "Raspberry Pi", "NodeMCU"],
        github: None,
        live: None,
        featured: false,
    },
];

/// Featured projects in catalogue order.
pub fn featured() -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(|p| p.featured)
}

/// Non-featured projects in catalogue order.
pub fn others() -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(|p| !p.featured)
}
