/// Data models
///
/// The waitlist has a single entity, the signup record written to the
/// external store.

pub mod signup;

pub use signup::{SignupError, SignupRecord};
