//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page sections and effect hosts while reading/writing
//! shared state from Leptos context providers.

pub mod contact_section;
pub mod cursor_trail;
pub mod loading_screen;
pub mod nav_bar;
pub mod project_viewer;
pub mod projects_gallery;
pub mod sections;
