//! Type-safe enumeration of the registration-form fields.
//!
//! The form has a fixed, closed set of fields. Making the set an enum turns
//! "unknown field name" into a compile error instead of a runtime condition:
//! every operation that takes a `FieldName` is total.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseFieldNameError;

/// One named input in the registration form.
///
/// Serializes to the form-control names the presentation layer uses
/// (`"username"`, `"email"`, `"password"`, `"confirmPassword"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

impl FieldName {
    /// All fields in enumeration order.
    ///
    /// This order is the contract for aggregate validation and for any
    /// iteration over the form: username, email, password, confirmPassword.
    pub const ALL: [FieldName; 4] = [
        FieldName::Username,
        FieldName::Email,
        FieldName::Password,
        FieldName::ConfirmPassword,
    ];

    /// Returns the form-control name as the presentation layer knows it.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Username => "username",
            FieldName::Email => "email",
            FieldName::Password => "password",
            FieldName::ConfirmPassword => "confirmPassword",
        }
    }

    /// Human-readable label for display next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            FieldName::Username => "Username",
            FieldName::Email => "Email",
            FieldName::Password => "Password",
            FieldName::ConfirmPassword => "Confirm password",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = ParseFieldNameError;

    /// Parse a form-control name into a `FieldName`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "username" => Ok(FieldName::Username),
            "email" => Ok(FieldName::Email),
            "password" => Ok(FieldName::Password),
            "confirmPassword" => Ok(FieldName::ConfirmPassword),
            other => Err(ParseFieldNameError(other.to_string())),
        }
    }
}
