//! Projects gallery filtering and summary statistics.

use std::collections::HashSet;

use crate::content::Project;

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

/// Filter value that matches every project.
pub const ALL_TAG: &str = "All";

/// Current gallery filter and search text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryState {
    pub filter: String,
    pub search: String,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self { filter: ALL_TAG.to_owned(), search: String::new() }
    }
}

impl GalleryState {
    /// Projects visible under the current filter and search.
    #[must_use]
    pub fn visible<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        filter_projects(projects, &self.filter, &self.search)
    }
}

/// `"All"` followed by every distinct tag in first-seen order.
#[must_use]
pub fn all_tags(projects: &[Project]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tags = vec![ALL_TAG.to_owned()];
    for tag in projects.iter().flat_map(|p| &p.tags) {
        if seen.insert(tag.as_str()) {
            tags.push(tag.clone());
        }
    }
    tags
}

/// Whether `project` passes the tag filter and the search text.
///
/// The tag must match exactly. Search is case-insensitive against the title,
/// description, and tech stack; only an empty search matches everything.
/// Whitespace is searched for literally.
#[must_use]
pub fn matches(project: &Project, filter: &str, search: &str) -> bool {
    let tag_ok = filter == ALL_TAG || project.tags.iter().any(|t| t == filter);
    if !tag_ok {
        return false;
    }
    let needle = search.to_lowercase();
    if needle.is_empty() {
        return true;
    }
    project.title.to_lowercase().contains(&needle)
        || project.description.to_lowercase().contains(&needle)
        || project.tech_stack.iter().any(|tech| tech.to_lowercase().contains(&needle))
}

#[must_use]
pub fn filter_projects<'a>(projects: &'a [Project], filter: &str, search: &str) -> Vec<&'a Project> {
    projects.iter().filter(|p| matches(p, filter, search)).collect()
}

/// Headline numbers shown under the gallery.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GalleryStats {
    pub projects: usize,
    pub technologies: usize,
    pub featured: usize,
    pub categories: usize,
}

#[must_use]
pub fn stats(projects: &[Project]) -> GalleryStats {
    let technologies = projects.iter().flat_map(|p| &p.tech_stack).collect::<HashSet<_>>().len();
    GalleryStats {
        projects: projects.len(),
        technologies,
        featured: projects.iter().filter(|p| p.featured).count(),
        categories: all_tags(projects).len() - 1,
    }
}
