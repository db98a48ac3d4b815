//! Filterable projects gallery with summary stats.

use leptos::prelude::*;

use crate::content::{Project, SiteContent};
use crate::state::gallery::{GalleryState, all_tags, stats};
use crate::state::ui::Section;

#[cfg(test)]
#[path = "projects_gallery_test.rs"]
mod projects_gallery_test;

/// Gallery section. `on_select` receives the clicked project.
#[component]
pub fn ProjectsGallery(on_select: Callback<Project>) -> impl IntoView {
    let site = expect_context::<SiteContent>();
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let projects = StoredValue::new(site.projects.clone());

    let filters = all_tags(&site.projects)
        .into_iter()
        .map(|tag| {
            let tag_for_class = tag.clone();
            let tag_for_click = tag.clone();
            let class = move || filter_button_class(gallery.with(|g| g.filter == tag_for_class));
            let on_click = move |_| gallery.update(|g| g.filter.clone_from(&tag_for_click));
            view! { <button class=class on:click=on_click>{tag}</button> }
        })
        .collect_view();

    let visible = move || {
        let state = gallery.get();
        projects.with_value(|all| state.visible(all).into_iter().cloned().collect::<Vec<_>>())
    };
    let empty = move || visible().is_empty();

    let summary = stats(&site.projects);
    let stat_items = [
        ("Projects", summary.projects),
        ("Technologies", summary.technologies),
        ("Featured", summary.featured),
        ("Categories", summary.categories),
    ]
    .into_iter()
    .map(|(label, value)| {
        view! {
            <div class="gallery__stat">
                <div class="gallery__stat-value">{value}</div>
                <div class="gallery__stat-label">{label}</div>
            </div>
        }
    })
    .collect_view();

    view! {
        <section id=Section::Projects.id() class="gallery">
            <h2>"Featured Projects"</h2>
            <div class="gallery__controls">
                <input
                    class="gallery__search"
                    type="search"
                    placeholder="Search projects..."
                    prop:value=move || gallery.with(|g| g.search.clone())
                    on:input=move |ev| gallery.update(|g| g.search = event_target_value(&ev))
                />
                <div class="gallery__filters">{filters}</div>
            </div>
            <Show
                when=move || !empty()
                fallback=|| view! {
                    <div class="gallery__empty">
                        <p>"No projects found"</p>
                        <p>"Try adjusting your search or filter criteria"</p>
                    </div>
                }
            >
                <div class="gallery__grid">
                    <For each=visible key=|p| p.id let:project>
                        <ProjectCard project=project on_select=on_select/>
                    </For>
                </div>
            </Show>
            <div class="gallery__stats">{stat_items}</div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project, on_select: Callback<Project>) -> impl IntoView {
    let class = card_class(project.featured);
    let tags = project
        .tags
        .iter()
        .map(|tag| view! { <span class="card__tag">{tag.clone()}</span> })
        .collect_view();
    let title = project.title.clone();
    let description = project.description.clone();
    let thumbnail = project.thumbnail.clone();
    let on_click = move |_| on_select.run(project.clone());

    view! {
        <article class=class on:click=on_click>
            <img class="card__thumb" src=thumbnail alt=title.clone()/>
            <h3 class="card__title">{title}</h3>
            <p class="card__description">{description}</p>
            <div class="card__tags">{tags}</div>
        </article>
    }
}

#[must_use]
pub fn filter_button_class(active: bool) -> &'static str {
    if active { "gallery__filter gallery__filter--active" } else { "gallery__filter" }
}

#[must_use]
pub fn card_class(featured: bool) -> &'static str {
    if featured { "card card--featured" } else { "card" }
}
