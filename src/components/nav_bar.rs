//! Top navigation with in-page section links.

use leptos::prelude::*;

use crate::content::SiteContent;
use crate::state::ui::{Section, UiState};

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

/// Navigation bar. Clicking a link marks its section active.
#[component]
pub fn NavBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let site = expect_context::<SiteContent>();

    let links = Section::ALL
        .into_iter()
        .map(|section| {
            let class = move || nav_link_class(ui.with(|u| u.active_section), section);
            let on_click = move |_| ui.update(|u| u.active_section = section);
            view! {
                <a class=class href=section.href() on:click=on_click>{section.label()}</a>
            }
        })
        .collect_view();

    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href=Section::Home.href()>{brand(&site.owner)}</a>
            <div class="nav-bar__links">{links}</div>
        </nav>
    }
}

/// CSS class for a nav link given the active section.
#[must_use]
pub fn nav_link_class(active: Section, section: Section) -> &'static str {
    if active == section { "nav-bar__link nav-bar__link--active" } else { "nav-bar__link" }
}

/// Brand text: the owner's name, uppercased, or a fallback.
#[must_use]
pub fn brand(owner: &str) -> String {
    let owner = owner.trim();
    if owner.is_empty() { "PORTFOLIO".to_owned() } else { format!("{}.3D", owner.to_uppercase()) }
}
