//! Validation rules for the registration form.
//!
//! Pure functions only: given the current value set, compute zero or one
//! error per field. All statefulness (when rules run, where results are
//! stored) lives in `regform-session`.
//!
//! ## Rule table
//!
//! Evaluated top to bottom per field; first match wins:
//!
//! - **username**: required, then 3-15 alphanumeric characters
//! - **email**: required, then `local@domain.tld` shape (case-insensitive)
//! - **password**: required, then the composite strength policy
//!   (8-20 chars, ≥1 digit, ≥1 lowercase, ≥1 uppercase, ≥1 special)
//! - **confirmPassword**: required, then exact raw-value equality with the
//!   current password
//!
//! Emptiness and format matching run on trimmed values; the confirmation
//! equality intentionally does not trim (a trailing space is a mismatch).

pub mod checks;
mod error;

pub use error::{FieldError, FormErrors};

use regform_model::{FieldName, FormValues};

/// Validate a single field against the current value set.
///
/// Stateless and deterministic. `ConfirmPassword` is the one field whose
/// rule reads another field (the password) out of `values`.
pub fn validate_field(field: FieldName, values: &FormValues) -> Option<FieldError> {
    match field {
        FieldName::Username => checks::username::check(values.get(FieldName::Username)),
        FieldName::Email => checks::email::check(values.get(FieldName::Email)),
        FieldName::Password => checks::password::check(values.get(FieldName::Password)),
        FieldName::ConfirmPassword => checks::confirm_password::check(
            values.get(FieldName::ConfirmPassword),
            values.get(FieldName::Password),
        ),
    }
}

/// Validate every field, in enumeration order, into a fresh error set.
///
/// The form is submittable iff the result [`FormErrors::is_valid`].
pub fn validate_all(values: &FormValues) -> FormErrors {
    let mut errors = FormErrors::new();
    for field in FieldName::ALL {
        errors.set(field, validate_field(field, values));
    }
    errors
}
