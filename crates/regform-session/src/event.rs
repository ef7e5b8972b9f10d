//! User input events forwarded by the presentation layer.

use regform_model::FieldName;

/// One user interaction with the form.
///
/// The presentation layer translates its own input events into these and
/// feeds them to [`FormSession::handle`](crate::FormSession::handle) in
/// arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The user edited a field (fires per keystroke).
    ValueChanged { field: FieldName, value: String },
    /// A field lost focus, value unchanged.
    FieldBlurred { field: FieldName },
    /// The user asked to submit the form.
    SubmitRequested,
}
