//! # signup-form
//!
//! Validation and submission for the account sign-up form: name, email and
//! password are checked against a declarative schema, violations come back as
//! one message per field, and valid values go to a registration backend.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use signup_form::{Collaborators, Field, HttpRegistration, SignUpConfig, SignUpScreen};
//!
//! let config = SignUpConfig::load_default()?;
//! let registration = HttpRegistration::new(&config.api)?;
//! let screen = SignUpScreen::new(
//!     &config,
//!     Collaborators::new(Arc::new(registration), notifier, navigator),
//! );
//!
//! screen.set_value(Field::Name, "Ana");
//! screen.set_value(Field::Email, "ana@gobarber.com");
//! screen.set_value(Field::Password, "123456");
//! let outcome = screen.submit().await?;
//! ```
//!
//! ## Architecture
//!
//! - [`schema`] - per-field rules and the all-violations validation pass
//! - [`translator`] - violations → one message per field
//! - [`orchestrator`] - clear → validate → write errors or register
//! - [`focus`] - `name → email → password → submit` focus chain
//! - [`screen`] - host surface owning values, errors, focus and the in-flight guard

pub mod collaborators;
pub mod config;
pub mod error;
pub mod field;
pub mod focus;
pub mod orchestrator;
pub mod registration;
pub mod registry;
pub mod schema;
pub mod screen;
pub mod translator;

pub use collaborators::{Collaborators, Navigator, Notice, NoticeKind, Notifier};
pub use config::{ApiConfig, MessagesConfig, RulesConfig, SignUpConfig};
pub use error::{RegistrationError, SchemaError, SubmitError, UnknownField};
pub use field::{Field, FormValues};
pub use focus::{FocusSequencer, FocusState, FocusStep};
pub use orchestrator::{SubmissionOrchestrator, SubmissionOutcome};
pub use registration::{DryRunRegistration, HttpRegistration, Registration};
pub use registry::{FieldRegistry, RegistryHandle, SharedRegistry};
pub use schema::{FieldRule, FormatKind, ValidationFailure, ValidationSchema, Violation};
pub use screen::{FieldCompletion, SignUpScreen};
pub use translator::{translate, FieldErrorMap};
