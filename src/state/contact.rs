//! Contact form state with simulated submission.
//!
//! Nothing leaves the browser: a valid submission waits [`SUBMIT_DELAY_MS`],
//! reports success and clears the form, then returns to idle after
//! [`SUCCESS_RESET_MS`].

use std::fmt;

use effects::timer::{OneShot, earliest};

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// Simulated round-trip time of a submission.
pub const SUBMIT_DELAY_MS: f64 = 2_000.0;

/// How long the success banner stays up.
pub const SUCCESS_RESET_MS: f64 = 3_000.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        })
    }
}

/// Why a submission was refused.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("{0} is required")]
    Missing(Field),
    #[error("email address looks invalid")]
    InvalidEmail,
}

impl ContactError {
    /// The field the error belongs to.
    #[must_use]
    pub fn field(&self) -> Field {
        match self {
            Self::Missing(field) => *field,
            Self::InvalidEmail => Field::Email,
        }
    }
}

/// Form field values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// Check required fields and the email shape, in field order.
    ///
    /// # Errors
    ///
    /// Returns the first [`ContactError`] found.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::Missing(Field::Name));
        }
        if self.email.trim().is_empty() {
            return Err(ContactError::Missing(Field::Email));
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::Missing(Field::Message));
        }
        Ok(())
    }
}

/// `local@domain.tld` with no whitespace.
fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
}

/// Form values, submission status, and its pending deadlines.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactState {
    pub form: ContactForm,
    status: SubmitStatus,
    error: Option<ContactError>,
    respond: OneShot,
    reset: OneShot,
}

impl ContactState {
    /// Update one field. Clears a validation error on that field.
    pub fn edit(&mut self, field: Field, value: String) {
        self.form.set(field, value);
        if self.error.as_ref().is_some_and(|e| e.field() == field) {
            self.error = None;
        }
    }

    /// Start a simulated submission.
    ///
    /// Ignored while a submission is in flight.
    ///
    /// # Errors
    ///
    /// Returns the validation error, which is also kept for display.
    pub fn submit(&mut self, now_ms: f64) -> Result<(), ContactError> {
        if self.status == SubmitStatus::Submitting {
            return Ok(());
        }
        if let Err(e) = self.form.validate() {
            self.error = Some(e.clone());
            return Err(e);
        }
        self.error = None;
        self.reset.cancel();
        self.status = SubmitStatus::Submitting;
        self.respond.arm(now_ms, SUBMIT_DELAY_MS);
        log::info!("contact: submitting message from {}", self.form.name.trim());
        Ok(())
    }

    /// Apply every transition due at `now_ms`.
    pub fn advance(&mut self, now_ms: f64) {
        if let Some(due) = self.respond.due_ms()
            && self.respond.fire_if_due(now_ms)
        {
            self.status = SubmitStatus::Success;
            self.form = ContactForm::default();
            self.reset.arm(due, SUCCESS_RESET_MS);
        }
        if self.reset.fire_if_due(now_ms) {
            self.status = SubmitStatus::Idle;
        }
    }

    /// Drop pending transitions, e.g. when the form unmounts.
    pub fn cancel(&mut self) {
        self.respond.cancel();
        self.reset.cancel();
        if self.status == SubmitStatus::Submitting {
            self.status = SubmitStatus::Idle;
        }
    }

    #[must_use]
    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    #[must_use]
    pub fn error(&self) -> Option<&ContactError> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn next_deadline_ms(&self) -> Option<f64> {
        earliest(self.respond.due_ms(), self.reset.due_ms())
    }
}
