//! The form session: single source of truth for values and errors.

use regform_model::{FieldName, FormValues};
use regform_validate::{FormErrors, validate_all, validate_field};
use tracing::{debug, trace};

use crate::event::FormEvent;

/// One registration-form session.
///
/// Owns the current [`FormValues`] and [`FormErrors`] pair and routes user
/// events into the validation rules with an explicit
/// mutate → validate → store sequence. Construct one per visible form and
/// drop (or [`reset`](FormSession::reset)) it when the form goes away.
///
/// Events are handled serially to completion; the session has no interior
/// synchronization and is meant to be owned by a single caller.
#[derive(Debug, Clone, Default)]
pub struct FormSession {
    values: FormValues,
    errors: FormErrors,
}

impl FormSession {
    /// Create a session with all fields empty and no errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current field values, for rendering input contents.
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Current per-field errors, for rendering inline error text.
    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Store a new value for `field`, then re-validate that field against
    /// the updated value set. Models validate-on-keystroke.
    ///
    /// Only `field`'s error slot is touched: editing the password does not
    /// re-check an already-validated confirmation. Its stale result stands
    /// until the confirmation is next changed, blurred, or the form
    /// submitted.
    pub fn set_value(&mut self, field: FieldName, value: impl Into<String>) {
        let value = value.into();
        // Values are never logged; passwords pass through here.
        trace!(field = %field, len = value.len(), "value changed");
        self.values.set(field, value);
        self.errors.set(field, validate_field(field, &self.values));
    }

    /// Blur trigger: re-validate `field` against the current values without
    /// mutating them. Tabbing past an untouched required field still
    /// produces its error. Idempotent.
    pub fn touch_field(&mut self, field: FieldName) {
        self.errors.set(field, validate_field(field, &self.values));
    }

    /// Validate the whole form and replace the error state with the result,
    /// clearing stale errors even on success.
    ///
    /// Returns whether the form is valid. Nothing is transmitted; on
    /// success the boolean is the only observable effect and the caller
    /// decides what happens next.
    pub fn submit(&mut self) -> bool {
        self.errors = validate_all(&self.values);
        let valid = self.errors.is_valid();
        debug!(valid, errors = self.errors.error_count(), "form submitted");
        valid
    }

    /// Restore all values to empty and clear all errors.
    pub fn reset(&mut self) {
        debug!("session reset");
        self.values = FormValues::default();
        self.errors = FormErrors::default();
    }

    /// Route a presentation-layer event to the matching operation.
    ///
    /// Returns `Some(validity)` for [`FormEvent::SubmitRequested`], `None`
    /// for the other events.
    pub fn handle(&mut self, event: FormEvent) -> Option<bool> {
        match event {
            FormEvent::ValueChanged { field, value } => {
                self.set_value(field, value);
                None
            }
            FormEvent::FieldBlurred { field } => {
                self.touch_field(field);
                None
            }
            FormEvent::SubmitRequested => Some(self.submit()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_empty_and_error_free() {
        let session = FormSession::new();
        for field in FieldName::ALL {
            assert_eq!(session.values().get(field), "");
            assert_eq!(session.errors().get(field), None);
        }
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut session = FormSession::new();
        session.set_value(FieldName::Username, "ab");
        assert!(session.errors().get(FieldName::Username).is_some());

        session.reset();
        assert_eq!(session.values(), &FormValues::default());
        assert!(session.errors().is_valid());
    }
}
