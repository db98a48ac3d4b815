//! Static page sections: hero, about, and footer.

use leptos::prelude::*;

use crate::content::SiteContent;
use crate::state::ui::Section;

#[component]
pub fn Hero() -> impl IntoView {
    let site = expect_context::<SiteContent>();
    view! {
        <section id=Section::Home.id() class="hero">
            <h1 class="hero__title">{site.owner.clone()}</h1>
            <p class="hero__tagline">{site.tagline.clone()}</p>
            <a class="hero__cta" href=Section::Projects.href()>"View Projects"</a>
        </section>
    }
}

#[component]
pub fn About() -> impl IntoView {
    let site = expect_context::<SiteContent>();
    let skills = site
        .skills
        .iter()
        .map(|skill| view! { <li class="about__skill">{skill.clone()}</li> })
        .collect_view();
    view! {
        <section id=Section::About.id() class="about">
            <h2>"About"</h2>
            <p class="about__bio">{site.about.clone()}</p>
            <ul class="about__skills">{skills}</ul>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let site = expect_context::<SiteContent>();
    let socials = site
        .socials
        .iter()
        .map(|link| {
            view! {
                <a class="footer__social" href=link.url.clone() target="_blank" rel="noopener noreferrer">
                    {link.name.clone()}
                </a>
            }
        })
        .collect_view();
    view! {
        <footer class="footer">
            <div class="footer__socials">{socials}</div>
            <p class="footer__note">{format!("© {}", site.owner)}</p>
        </footer>
    }
}
