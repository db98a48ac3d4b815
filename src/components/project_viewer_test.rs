use super::*;

fn project(live: &str, source: &str) -> Project {
    Project {
        id: 1,
        title: "Orbit".to_owned(),
        description: String::new(),
        tags: Vec::new(),
        thumbnail: String::new(),
        live_url: live.to_owned(),
        github_url: source.to_owned(),
        tech_stack: Vec::new(),
        featured: false,
    }
}

#[test]
fn viewer_class_reflects_open_state() {
    assert_eq!(viewer_class(true), "viewer viewer--open");
    assert_eq!(viewer_class(false), "viewer");
}

#[test]
fn project_links_include_both_urls() {
    let links = project_links(&project("https://a.example", "https://b.example"));
    assert_eq!(
        links,
        vec![("Live Demo", "https://a.example".to_owned()), ("Source", "https://b.example".to_owned())]
    );
}

#[test]
fn project_links_skip_blank_urls() {
    let links = project_links(&project("", "https://b.example"));
    assert_eq!(links, vec![("Source", "https://b.example".to_owned())]);
}
