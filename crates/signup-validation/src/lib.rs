//! Sign-up Validation Core
//!
//! Pure, deterministic validation functions used by the sign-up form schema.
//! Nothing here knows about fields or messages: callers decide what a failed
//! check means for their form.

pub mod email;
pub mod string;

// Re-export all validators
pub use email::*;
pub use string::*;
