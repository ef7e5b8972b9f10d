use thiserror::Error;

/// A string did not name one of the form's fields.
///
/// Raised only when parsing control names coming from outside the core
/// (e.g. event payloads keyed by input name); inside the core the field set
/// is the closed [`crate::FieldName`] enum and this error cannot occur.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field name: {0}")]
pub struct ParseFieldNameError(pub String);
