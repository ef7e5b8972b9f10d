//! Validation error types.
//!
//! `FieldError` enumerates the five error kinds the rule table can produce,
//! each variant carrying only its needed data. `FormErrors` is the
//! per-field result of a validation run: at most one error per field,
//! the latest run overwriting the previous one.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use regform_model::FieldName;

/// A single field's validation failure.
///
/// Every kind blocks submission; there is no severity ladder below
/// "invalid" for a registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldError {
    /// The field is empty (after trimming whitespace).
    Required(FieldName),
    /// Username is not 3-15 alphanumeric characters.
    UsernameFormat,
    /// Email does not look like `local@domain.tld`.
    EmailFormat,
    /// Password fails the composite strength policy.
    PasswordPolicy,
    /// Confirmation does not equal the password, compared on raw values.
    PasswordMismatch,
}

impl FieldError {
    /// The field this error applies to.
    pub fn field(&self) -> FieldName {
        match self {
            FieldError::Required(field) => *field,
            FieldError::UsernameFormat => FieldName::Username,
            FieldError::EmailFormat => FieldName::Email,
            FieldError::PasswordPolicy => FieldName::Password,
            FieldError::PasswordMismatch => FieldName::ConfirmPassword,
        }
    }

    /// The user-visible message, exactly as the form displays it.
    pub fn message(&self) -> &'static str {
        match self {
            FieldError::Required(FieldName::Username) => "Username is required",
            FieldError::Required(FieldName::Email) => "Email is required",
            FieldError::Required(FieldName::Password) => "Password is required",
            FieldError::Required(FieldName::ConfirmPassword) => "Confirm password!",
            FieldError::UsernameFormat => {
                "Username should be 3-15 characters and shouldn't include any special character!"
            }
            FieldError::EmailFormat => "Invalid email address",
            FieldError::PasswordPolicy => {
                "Password must be 8-20 characters long and contain at least 1 digit, 1 lowercase letter, 1 uppercase letter, and 1 special character!"
            }
            FieldError::PasswordMismatch => "Passwords do not match",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Validation state of the whole form: zero or one error per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    username: Option<FieldError>,
    email: Option<FieldError>,
    password: Option<FieldError>,
    confirm_password: Option<FieldError>,
}

impl FormErrors {
    /// An all-valid (empty) error set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current error for a field, if any.
    pub fn get(&self, field: FieldName) -> Option<FieldError> {
        *self.slot(field)
    }

    /// Current error message for a field, if any.
    pub fn message(&self, field: FieldName) -> Option<&'static str> {
        self.get(field).map(|error| error.message())
    }

    /// Store the latest validation result for a field, overwriting any
    /// previous error (`None` clears the slot).
    pub fn set(&mut self, field: FieldName, error: Option<FieldError>) {
        *self.slot_mut(field) = error;
    }

    /// True when no field has an error.
    pub fn is_valid(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Number of fields currently in error.
    pub fn error_count(&self) -> usize {
        self.iter().count()
    }

    /// Present errors, in field enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, FieldError)> + '_ {
        FieldName::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|error| (field, error)))
    }

    fn slot(&self, field: FieldName) -> &Option<FieldError> {
        match field {
            FieldName::Username => &self.username,
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
            FieldName::ConfirmPassword => &self.confirm_password,
        }
    }

    fn slot_mut(&mut self, field: FieldName) -> &mut Option<FieldError> {
        match field {
            FieldName::Username => &mut self.username,
            FieldName::Email => &mut self.email,
            FieldName::Password => &mut self.password,
            FieldName::ConfirmPassword => &mut self.confirm_password,
        }
    }
}

/// Serializes to the shape the presentation layer renders from:
/// a map of control name to message, valid fields omitted.
impl Serialize for FormErrors {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.error_count()))?;
        for (field, error) in self.iter() {
            map.serialize_entry(field.as_str(), error.message())?;
        }
        map.end()
    }
}
