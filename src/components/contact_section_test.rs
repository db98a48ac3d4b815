use super::*;

#[test]
fn submit_label_follows_status() {
    assert_eq!(submit_label(SubmitStatus::Idle), "Send Message");
    assert_eq!(submit_label(SubmitStatus::Submitting), "Sending...");
    assert_eq!(submit_label(SubmitStatus::Success), "Sent!");
}

#[test]
fn status_message_prefers_validation_errors() {
    let err = ContactError::Missing(Field::Email);
    assert_eq!(status_message(SubmitStatus::Idle, Some(&err)).as_deref(), Some("Email is required"));
}

#[test]
fn status_message_reports_success() {
    assert!(status_message(SubmitStatus::Success, None).is_some());
    assert_eq!(status_message(SubmitStatus::Idle, None), None);
    assert_eq!(status_message(SubmitStatus::Submitting, None), None);
}

#[test]
fn field_class_marks_invalid_fields() {
    assert!(field_class(true).contains("--invalid"));
    assert_eq!(field_class(false), "contact__input");
}
