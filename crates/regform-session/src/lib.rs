//! Session state for the registration form.
//!
//! `regform-session` owns the mutable half of the form core: the current
//! values, the current errors, and the triggering policy that decides when
//! the pure rules in `regform-validate` run (on change, on blur, on
//! submit). The presentation layer talks to [`FormSession`] and nothing
//! else.

pub mod event;
pub mod session;

pub use event::FormEvent;
pub use session::FormSession;
