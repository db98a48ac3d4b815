//! Page chrome state: loading gate, active section, and the project viewer.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the content catalog so the
//! catalog stays immutable for the whole session.

use effects::timer::OneShot;

use crate::content::Project;

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// How long a closed viewer keeps its project so the exit animation can finish.
pub const VIEWER_CLEAR_DELAY_MS: f64 = 300.0;

/// Top-level page sections, in page order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Home,
    Projects,
    About,
    Contact,
}

impl Section {
    pub const ALL: [Self; 4] = [Self::Home, Self::Projects, Self::About, Self::Contact];

    /// DOM id of the section element.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Projects => "projects",
            Self::About => "about",
            Self::Contact => "contact",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Projects => "Projects",
            Self::About => "About",
            Self::Contact => "Contact",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    /// In-page anchor for nav links.
    #[must_use]
    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

/// Project detail modal.
///
/// Closing hides the modal immediately but keeps the project until the clear
/// deadline passes. Reopening before then cancels the clear.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewerState {
    selected: Option<Project>,
    open: bool,
    clear: OneShot,
}

impl ViewerState {
    pub fn open(&mut self, project: Project) {
        self.clear.cancel();
        self.selected = Some(project);
        self.open = true;
    }

    pub fn close(&mut self, now_ms: f64) {
        if !self.open {
            return;
        }
        self.open = false;
        self.clear.arm(now_ms, VIEWER_CLEAR_DELAY_MS);
    }

    /// Drop the project once the clear deadline passes. Returns `true` if it did.
    pub fn advance(&mut self, now_ms: f64) -> bool {
        if self.clear.fire_if_due(now_ms) {
            self.selected = None;
            return true;
        }
        false
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Project> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn next_deadline_ms(&self) -> Option<f64> {
        self.clear.due_ms()
    }
}

/// Page-level UI state.
#[derive(Clone, Debug, PartialEq)]
pub struct UiState {
    /// `true` until the loading screen signals completion.
    pub loading: bool,
    pub active_section: Section,
    pub viewer: ViewerState,
}

impl Default for UiState {
    fn default() -> Self {
        Self { loading: true, active_section: Section::Home, viewer: ViewerState::default() }
    }
}

/// `overflow` value for `<body>`: scrolling is locked while the viewer is open.
#[must_use]
pub fn body_overflow(viewer_open: bool) -> &'static str {
    if viewer_open { "hidden" } else { "unset" }
}
