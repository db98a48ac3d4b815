use super::*;

fn filled() -> ContactState {
    let mut state = ContactState::default();
    state.edit(Field::Name, "Ada".to_owned());
    state.edit(Field::Email, "ada@example.com".to_owned());
    state.edit(Field::Message, "Hello there".to_owned());
    state
}

// =============================================================
// Validation
// =============================================================

#[test]
fn empty_form_reports_name_first() {
    assert_eq!(ContactForm::default().validate(), Err(ContactError::Missing(Field::Name)));
}

#[test]
fn whitespace_only_counts_as_missing() {
    let form = ContactForm { name: "  ".to_owned(), email: "a@b.co".to_owned(), message: "hi".to_owned() };
    assert_eq!(form.validate(), Err(ContactError::Missing(Field::Name)));
}

#[test]
fn email_shape_is_checked() {
    for bad in ["ada", "ada@", "@example.com", "ada@example", "ada@.com", "ada@example.", "a da@example.com", "a@b@c.com"] {
        let form = ContactForm { name: "Ada".to_owned(), email: bad.to_owned(), message: "hi".to_owned() };
        assert_eq!(form.validate(), Err(ContactError::InvalidEmail), "accepted {bad}");
    }
}

#[test]
fn missing_message_is_reported() {
    let form = ContactForm { name: "Ada".to_owned(), email: "ada@example.com".to_owned(), message: String::new() };
    assert_eq!(form.validate(), Err(ContactError::Missing(Field::Message)));
}

#[test]
fn error_message_names_field() {
    assert_eq!(ContactError::Missing(Field::Email).to_string(), "email is required");
}

// =============================================================
// Submission lifecycle
// =============================================================

#[test]
fn invalid_submit_stays_idle_and_keeps_error() {
    let mut state = ContactState::default();
    assert!(state.submit(0.0).is_err());
    assert_eq!(state.status(), SubmitStatus::Idle);
    assert_eq!(state.error(), Some(&ContactError::Missing(Field::Name)));
    assert_eq!(state.next_deadline_ms(), None);
}

#[test]
fn editing_the_field_clears_its_error() {
    let mut state = ContactState::default();
    assert!(state.submit(0.0).is_err());
    state.edit(Field::Message, "hi".to_owned());
    assert!(state.error().is_some());
    state.edit(Field::Name, "Ada".to_owned());
    assert!(state.error().is_none());
}

#[test]
fn valid_submit_succeeds_then_resets() {
    let mut state = filled();
    assert_eq!(state.submit(1_000.0), Ok(()));
    assert_eq!(state.status(), SubmitStatus::Submitting);
    assert_eq!(state.next_deadline_ms(), Some(3_000.0));

    state.advance(2_999.0);
    assert_eq!(state.status(), SubmitStatus::Submitting);

    state.advance(3_000.0);
    assert_eq!(state.status(), SubmitStatus::Success);
    assert_eq!(state.form, ContactForm::default());
    assert_eq!(state.next_deadline_ms(), Some(6_000.0));

    state.advance(6_000.0);
    assert_eq!(state.status(), SubmitStatus::Idle);
    assert_eq!(state.next_deadline_ms(), None);
}

#[test]
fn late_wakeup_applies_both_transitions() {
    let mut state = filled();
    state.submit(0.0).expect("valid form");
    state.advance(10_000.0);
    assert_eq!(state.status(), SubmitStatus::Idle);
    assert_eq!(state.form, ContactForm::default());
}

#[test]
fn resubmit_while_submitting_is_ignored() {
    let mut state = filled();
    state.submit(0.0).expect("valid form");
    state.submit(500.0).expect("ignored");
    assert_eq!(state.next_deadline_ms(), Some(2_000.0));
}

#[test]
fn cancel_drops_pending_transitions() {
    let mut state = filled();
    state.submit(0.0).expect("valid form");
    state.cancel();
    state.cancel();
    state.advance(10_000.0);
    assert_eq!(state.status(), SubmitStatus::Idle);
    assert_eq!(state.form.name, "Ada");
}
