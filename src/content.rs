//! Site content catalog: owner profile, projects, and effect tuning.
//!
//! The catalog ships inside the binary as `content/site.json`. A malformed
//! catalog is a build-time mistake, so [`SiteContent::embedded`] logs it and
//! falls back to an empty site instead of failing the page.

use serde::{Deserialize, Serialize};

use effects::{ConfigError, LoaderConfig, TrailConfig};

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

const SITE_JSON: &str = include_str!("../content/site.json");

/// Error returned by [`SiteContent::parse`].
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to parse site content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid effect overrides: {0}")]
    Effects(#[from] ConfigError),
    /// Two projects share an id, which breaks keyed rendering.
    #[error("duplicate project id: {0}")]
    DuplicateProjectId(u32),
}

/// A portfolio project.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub thumbnail: String,
    pub live_url: String,
    pub github_url: String,
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

/// Optional tuning for the decorative effects.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsOverrides {
    pub trail: TrailConfig,
    pub loader: LoaderConfig,
}

/// Everything the site renders that is not markup.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub owner: String,
    pub tagline: String,
    pub about: String,
    pub skills: Vec<String>,
    pub socials: Vec<SocialLink>,
    pub projects: Vec<Project>,
    pub effects: EffectsOverrides,
}

impl SiteContent {
    /// Parse and check a catalog document.
    ///
    /// # Errors
    ///
    /// Returns a [`ContentError`] for malformed JSON, invalid effect tuning,
    /// or duplicate project ids.
    pub fn parse(raw: &str) -> Result<Self, ContentError> {
        let content: Self = serde_json::from_str(raw)?;
        content.effects.trail.clone().validate()?;
        content.effects.loader.clone().validate()?;

        let mut seen = std::collections::HashSet::new();
        for project in &content.projects {
            if !seen.insert(project.id) {
                return Err(ContentError::DuplicateProjectId(project.id));
            }
        }
        Ok(content)
    }

    /// The catalog compiled into the binary, or defaults if it is broken.
    #[must_use]
    pub fn embedded() -> Self {
        match Self::parse(SITE_JSON) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("site content unusable, falling back to defaults: {e}");
                Self::default()
            }
        }
    }

    #[must_use]
    pub fn project(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}
