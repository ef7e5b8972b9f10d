//! Current values of every form field.

use serde::{Deserialize, Serialize};

use crate::field::FieldName;

/// The current value of each field, all initialized to the empty string.
///
/// One struct field per form field keeps the shape compile-time checked;
/// [`get`](FormValues::get) and [`set`](FormValues::set) provide the keyed
/// access the validation engine and the session store work through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormValues {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl FormValues {
    /// Create an all-empty value set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a field.
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Username => &self.username,
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
            FieldName::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Replace the value of a single field.
    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        let value = value.into();
        match field {
            FieldName::Username => self.username = value,
            FieldName::Email => self.email = value,
            FieldName::Password => self.password = value,
            FieldName::ConfirmPassword => self.confirm_password = value,
        }
    }
}
