//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::{
    contact_section::ContactSection,
    cursor_trail::CursorTrail,
    loading_screen::LoadingScreen,
    nav_bar::NavBar,
    project_viewer::ProjectViewer,
    projects_gallery::ProjectsGallery,
    sections::{About, Footer, Hero},
};
use crate::content::{Project, SiteContent};
use crate::state::{contact::ContactState, gallery::GalleryState, ui::UiState};
use crate::util::scroll_lock;

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

/// Root application component.
///
/// Shows the loading screen until the loader completes, then the site. The
/// cursor trail stays mounted for the whole session.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let content = SiteContent::embedded();
    let trail = content.effects.trail.clone();
    let loader = content.effects.loader.clone();
    let title = page_title(&content.owner);

    let ui = RwSignal::new(UiState::default());
    provide_context(content);
    provide_context(ui);
    provide_context(RwSignal::new(GalleryState::default()));
    provide_context(RwSignal::new(ContactState::default()));

    Effect::new(move |_| scroll_lock::apply(ui.with(|u| u.viewer.is_open())));
    on_cleanup(scroll_lock::release);

    let loading = move || ui.with(|u| u.loading);
    let on_loaded = Callback::new(move |()| {
        log::info!("loading finished");
        ui.update(|u| u.loading = false);
    });

    view! {
        <Title text=title/>
        <CursorTrail config=trail/>
        <Show when=loading fallback=MainSite>
            <LoadingScreen config=loader.clone() on_complete=on_loaded/>
        </Show>
    }
}

#[component]
fn MainSite() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let on_select = Callback::new(move |project: Project| ui.update(|u| u.viewer.open(project)));

    view! {
        <NavBar/>
        <main class="site">
            <Hero/>
            <ProjectsGallery on_select=on_select/>
            <About/>
            <ContactSection/>
        </main>
        <Footer/>
        <ProjectViewer/>
    }
}

/// Document title for the site owner.
#[must_use]
pub fn page_title(owner: &str) -> String {
    let owner = owner.trim();
    if owner.is_empty() { "Portfolio".to_owned() } else { format!("{owner} | Portfolio") }
}

