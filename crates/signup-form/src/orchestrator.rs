// File: src/orchestrator.rs
// Purpose: Clear, validate, then either write field errors or register

use crate::collaborators::{Collaborators, Notice};
use crate::config::MessagesConfig;
use crate::field::FormValues;
use crate::registry::RegistryHandle;
use crate::schema::ValidationSchema;
use crate::translator::{translate, FieldErrorMap};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// How a submission attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Registered; the success notice was shown
    Success,
    /// Validation failed; these errors were written to the fields
    ValidationRejected(FieldErrorMap),
    /// Validation passed but the registration backend failed
    ExternalFailure,
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success)
    }

    /// The field errors, if validation rejected the values
    pub fn field_errors(&self) -> Option<&FieldErrorMap> {
        match self {
            SubmissionOutcome::ValidationRejected(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Runs one submission attempt at a time against a field registry
///
/// Cheap to clone; clones share the schema and collaborators. The orchestrator
/// only holds a weak handle to the registry, so if the screen is torn down
/// mid-attempt, error writes, notices and navigation are skipped.
#[derive(Clone)]
pub struct SubmissionOrchestrator {
    schema: Arc<ValidationSchema>,
    messages: Arc<MessagesConfig>,
    collaborators: Collaborators,
    registry: RegistryHandle,
}

impl SubmissionOrchestrator {
    pub fn new(
        schema: ValidationSchema,
        messages: MessagesConfig,
        collaborators: Collaborators,
        registry: RegistryHandle,
    ) -> Self {
        Self {
            schema: Arc::new(schema),
            messages: Arc::new(messages),
            collaborators,
            registry,
        }
    }

    /// Validate `values` and, if they pass, register them
    ///
    /// 1. Clear every field error.
    /// 2. Validate, collecting all violations.
    /// 3. On violations, write one message per field and stop.
    /// 4. Otherwise call the registration backend exactly once and notify
    ///    the user of the result.
    pub async fn submit(&self, values: FormValues) -> SubmissionOutcome {
        self.registry.clear_errors();
        debug!("sign-up submission started");

        if let Err(failure) = self.schema.validate(&values) {
            let errors = translate(&failure);
            info!(
                fields = errors.len(),
                violations = failure.len(),
                "sign-up rejected by validation"
            );
            self.registry.set_errors(errors.clone());
            return SubmissionOutcome::ValidationRejected(errors);
        }

        let registration = &self.collaborators.registration;
        match registration.register(&values).await {
            Ok(()) => {
                info!(backend = registration.name(), "sign-up registered");
                self.notify(Notice::success(
                    &self.messages.success_title,
                    &self.messages.success_description,
                ));
                if self.registry.is_attached() {
                    self.collaborators.navigator.return_to_sign_in();
                }
                SubmissionOutcome::Success
            }
            Err(e) => {
                warn!(backend = registration.name(), error = %e, "sign-up registration failed");
                self.notify(Notice::error(
                    &self.messages.failure_title,
                    &self.messages.failure_description,
                ));
                SubmissionOutcome::ExternalFailure
            }
        }
    }

    fn notify(&self, notice: Notice) {
        if self.registry.is_attached() {
            self.collaborators.notifier.notify(notice);
        } else {
            debug!(title = %notice.title, "form torn down, notice dropped");
        }
    }
}
