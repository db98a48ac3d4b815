//! Modal detail view for the selected project.
//!
//! The modal reads `UiState::viewer`. Closing hides it at once; the project is
//! cleared after the viewer's delay so the exit transition still has content.

use leptos::prelude::*;

use crate::content::Project;
use crate::state::ui::UiState;
use crate::util::clock::now_ms;
use crate::util::deadline::wake_at;

#[cfg(test)]
#[path = "project_viewer_test.rs"]
mod project_viewer_test;

/// Close the viewer and schedule the delayed clear.
pub fn close_viewer(ui: RwSignal<UiState>) {
    ui.update(|u| u.viewer.close(now_ms()));
    if let Some(deadline) = ui.with_untracked(|u| u.viewer.next_deadline_ms()) {
        wake_at(deadline, move || {
            // The signal is gone if the app unmounted first.
            ui.try_update(|u| u.viewer.advance(now_ms()));
        });
    }
}

/// Project viewer modal.
#[component]
pub fn ProjectViewer() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let is_open = move || ui.with(|u| u.viewer.is_open());
    let selected = move || ui.with(|u| u.viewer.selected().cloned());
    let on_close = move |_| close_viewer(ui);

    view! {
        <div class=move || viewer_class(is_open()) aria-hidden=move || (!is_open()).to_string()>
            <div class="viewer__backdrop" on:click=on_close></div>
            {move || selected().map(|project| view! { <ViewerBody project=project on_close=Callback::new(move |()| close_viewer(ui))/> })}
        </div>
    }
}

#[component]
fn ViewerBody(project: Project, on_close: Callback<()>) -> impl IntoView {
    let tags = project.tags.iter().map(|t| view! { <span class="viewer__tag">{t.clone()}</span> }).collect_view();
    let stack = project.tech_stack.iter().map(|t| view! { <li class="viewer__tech">{t.clone()}</li> }).collect_view();
    let links = project_links(&project)
        .into_iter()
        .map(|(label, href)| {
            view! { <a class="viewer__link" href=href target="_blank" rel="noopener noreferrer">{label}</a> }
        })
        .collect_view();

    view! {
        <div class="viewer__panel" role="dialog" aria-modal="true">
            <button class="viewer__close" on:click=move |_| on_close.run(()) aria-label="Close">"×"</button>
            <img class="viewer__image" src=project.thumbnail.clone() alt=project.title.clone()/>
            <h2 class="viewer__title">{project.title.clone()}</h2>
            <p class="viewer__description">{project.description.clone()}</p>
            <div class="viewer__tags">{tags}</div>
            <ul class="viewer__stack">{stack}</ul>
            <div class="viewer__links">{links}</div>
        </div>
    }
}

#[must_use]
pub fn viewer_class(open: bool) -> &'static str {
    if open { "viewer viewer--open" } else { "viewer" }
}

/// Outbound links for a project, skipping empty URLs.
#[must_use]
pub fn project_links(project: &Project) -> Vec<(&'static str, String)> {
    [("Live Demo", &project.live_url), ("Source", &project.github_url)]
        .into_iter()
        .filter(|(_, url)| !url.trim().is_empty())
        .map(|(label, url)| (label, url.clone()))
        .collect()
}
