//! Contact section with a locally simulated form submission.

use leptos::prelude::*;

use crate::content::SiteContent;
use crate::state::contact::{ContactError, ContactState, Field, SubmitStatus};
use crate::util::clock::now_ms;
use crate::util::deadline::wake_at;

#[cfg(test)]
#[path = "contact_section_test.rs"]
mod contact_section_test;

/// Keep one wake-up pending until the form has no deadlines left.
fn drive(contact: RwSignal<ContactState>) {
    let Some(deadline) = contact.with_untracked(ContactState::next_deadline_ms) else {
        return;
    };
    wake_at(deadline, move || {
        if contact.try_update(|s| s.advance(now_ms())).is_some() {
            drive(contact);
        }
    });
}

/// Label of the submit button.
#[must_use]
pub fn submit_label(status: SubmitStatus) -> &'static str {
    match status {
        SubmitStatus::Idle => "Send Message",
        SubmitStatus::Submitting => "Sending...",
        SubmitStatus::Success => "Sent!",
    }
}

/// Banner text under the form, if any.
#[must_use]
pub fn status_message(status: SubmitStatus, error: Option<&ContactError>) -> Option<String> {
    if let Some(err) = error {
        return Some(capitalize(&err.to_string()));
    }
    (status == SubmitStatus::Success).then(|| "Thanks! Your message has been sent.".to_owned())
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map(|c| c.to_uppercase().chain(chars).collect()).unwrap_or_default()
}

#[must_use]
pub fn field_class(invalid: bool) -> &'static str {
    if invalid { "contact__input contact__input--invalid" } else { "contact__input" }
}

/// Contact section.
#[component]
pub fn ContactSection() -> impl IntoView {
    let content = expect_context::<SiteContent>();
    let contact = expect_context::<RwSignal<ContactState>>();

    let value = move |field: Field| {
        contact.with(|s| match field {
            Field::Name => s.form.name.clone(),
            Field::Email => s.form.email.clone(),
            Field::Message => s.form.message.clone(),
        })
    };
    let invalid = move |field: Field| contact.with(|s| s.error().is_some_and(|e| e.field() == field));
    let status = move || contact.with(ContactState::status);
    let message = move || contact.with(|s| status_message(s.status(), s.error()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut result = Ok(());
        contact.update(|s| result = s.submit(now_ms()));
        match result {
            Ok(()) => drive(contact),
            Err(err) => log::debug!("contact: rejected submission: {err}"),
        }
    };

    on_cleanup(move || {
        contact.try_update(ContactState::cancel);
    });

    view! {
        <section id="contact" class="section contact">
            <h2 class="section__title">"Get In Touch"</h2>
            <p class="contact__intro">{format!("Have a project in mind? {} would love to hear about it.", content.owner)}</p>
            <form class="contact__form" on:submit=on_submit novalidate=true>
                <input
                    class=move || field_class(invalid(Field::Name))
                    type="text"
                    name="name"
                    placeholder="Your Name"
                    prop:value=move || value(Field::Name)
                    on:input=move |ev| contact.update(|s| s.edit(Field::Name, event_target_value(&ev)))
                />
                <input
                    class=move || field_class(invalid(Field::Email))
                    type="email"
                    name="email"
                    placeholder="Your Email"
                    prop:value=move || value(Field::Email)
                    on:input=move |ev| contact.update(|s| s.edit(Field::Email, event_target_value(&ev)))
                />
                <textarea
                    class=move || field_class(invalid(Field::Message))
                    name="message"
                    rows="5"
                    placeholder="Your Message"
                    prop:value=move || value(Field::Message)
                    on:input=move |ev| contact.update(|s| s.edit(Field::Message, event_target_value(&ev)))
                ></textarea>
                <button
                    class="contact__submit"
                    type="submit"
                    disabled=move || status() == SubmitStatus::Submitting
                >
                    {move || submit_label(status())}
                </button>
                {move || message().map(|text| view! { <p class="contact__status" role="status">{text}</p> })}
            </form>
        </section>
    }
}
