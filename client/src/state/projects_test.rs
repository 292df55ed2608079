use super::*;

#[test]
fn featured_and_others_partition_the_catalogue() {
    let featured: Vec<_> = featured().map(|p| p.title).collect();
    let others: Vec<_> = others().map(|p| p.title).collect();
    assert_eq!(featured, vec!["To All The Films", "PasteBox"]);
    assert_eq!(others, vec!["DeepDiagnose", "Zen-Type", "MQTT Server"]);
    assert_eq!(featured.len() + others.len(), PROJECTS.len());
}

#[test]
fn links_are_absent_rather_than_empty() {
    for project in PROJECTS {
        assert_ne!(project.github, Some(""));
        assert_ne!(project.live, Some(""));
    }
    let mqtt = PROJECTS.iter().find(|p| p.title == "MQTT Server").unwrap();
    assert!(mqtt.github.is_none());
    assert!(mqtt.live.is_none());
}

#[test]
fn every_project_has_tags() {
    assert!(PROJECTS.iter().all(|p| !p.tags.is_empty()));
}

#[test]
fn continued_description_has_single_spaces() {
    let films = PROJECTS[0].description;
    assert!(films.contains("explore films"));
    assert!(!films.contains("  "));
}
