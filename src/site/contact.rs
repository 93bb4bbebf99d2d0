//! Contact form: a simulated send followed by a timed reset.

use thiserror::Error;

pub const SUBMIT_LATENCY_MS: u32 = 2_000;
pub const RESET_AFTER_MS: u32 = 3_000;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("{} is required", .0.as_str())]
    MissingField(Field),
    #[error("email address has no @")]
    MalformedEmail,
    #[error("a message is already being sent")]
    Busy,
}

#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        for (field, value) in [
            (Field::Name, &self.name),
            (Field::Email, &self.email),
            (Field::Message, &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        if !self.email.contains('@') {
            return Err(ContactError::MalformedEmail);
        }
        Ok(())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SubmitPhase {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct ContactForm {
    pub draft: ContactDraft,
    pub phase: SubmitPhase,
    pub focused: Option<Field>,
}

impl ContactForm {
    pub fn edit(&mut self, field: Field, value: String) {
        if self.phase == SubmitPhase::Editing {
            self.draft.set(field, value);
        }
    }

    pub fn submit(&mut self) -> Result<(), ContactError> {
        if self.phase != SubmitPhase::Editing {
            return Err(ContactError::Busy);
        }
        self.draft.validate()?;
        self.phase = SubmitPhase::Submitting;
        Ok(())
    }

    /// The simulated request finished.
    pub fn sent(&mut self) {
        if self.phase == SubmitPhase::Submitting {
            self.phase = SubmitPhase::Submitted;
        }
    }

    /// Success banner timed out: clear everything.
    pub fn reset(&mut self) {
        if self.phase == SubmitPhase::Submitted {
            *self = Self::default();
        }
    }
}

/// At most one pending timer per timed phase. Arming a phase replaces the
/// timer it held, so repeated submissions never pile up handles.
#[derive(Debug)]
pub struct PhaseTimers<T> {
    sending: Option<T>,
    resetting: Option<T>,
}

impl<T> Default for PhaseTimers<T> {
    fn default() -> Self {
        Self {
            sending: None,
            resetting: None,
        }
    }
}

impl<T> PhaseTimers<T> {
    /// `timer` ends `phase`. Editing has no timer and is ignored.
    pub fn arm(&mut self, phase: SubmitPhase, timer: T) {
        match phase {
            SubmitPhase::Submitting => self.sending = Some(timer),
            SubmitPhase::Submitted => self.resetting = Some(timer),
            SubmitPhase::Editing => {}
        }
    }

    pub fn clear(&mut self) {
        self.sending = None;
        self.resetting = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.edit(Field::Name, "Ada".to_string());
        form.edit(Field::Email, "ada@example.com".to_string());
        form.edit(Field::Message, "Hello".to_string());
        form
    }

    #[test]
    fn missing_fields_are_reported_in_order() {
        let mut form = ContactForm::default();
        assert_eq!(form.submit(), Err(ContactError::MissingField(Field::Name)));
        form.edit(Field::Name, "Ada".to_string());
        form.edit(Field::Email, "   ".to_string());
        assert_eq!(form.submit(), Err(ContactError::MissingField(Field::Email)));
        assert_eq!(
            ContactError::MissingField(Field::Email).to_string(),
            "email is required"
        );
    }

    #[test]
    fn full_cycle_returns_to_a_blank_form() {
        let mut form = filled();
        form.submit().expect("valid draft");
        assert_eq!(form.phase, SubmitPhase::Submitting);
        assert_eq!(form.submit(), Err(ContactError::Busy));

        form.edit(Field::Name, "ignored".to_string());
        assert_eq!(form.draft.name, "Ada");

        form.sent();
        assert_eq!(form.phase, SubmitPhase::Submitted);
        form.reset();
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn reset_before_send_is_ignored() {
        let mut form = filled();
        form.submit().expect("valid draft");
        form.reset();
        assert_eq!(form.phase, SubmitPhase::Submitting);
    }

    #[test]
    fn email_needs_an_at_sign() {
        let mut form = filled();
        form.edit(Field::Email, "ada.example.com".to_string());
        assert_eq!(form.submit(), Err(ContactError::MalformedEmail));
    }

    #[test]
    fn repeated_submissions_hold_at_most_two_timers() {
        let handle = std::rc::Rc::new(());
        let mut timers = PhaseTimers::default();
        for _ in 0..5 {
            timers.arm(SubmitPhase::Submitting, handle.clone());
            timers.arm(SubmitPhase::Submitted, handle.clone());
        }
        assert_eq!(std::rc::Rc::strong_count(&handle), 3);

        timers.arm(SubmitPhase::Editing, handle.clone());
        assert_eq!(std::rc::Rc::strong_count(&handle), 3);

        timers.clear();
        assert_eq!(std::rc::Rc::strong_count(&handle), 1);
        assert!(timers.sending.is_none() && timers.resetting.is_none());
    }
}
