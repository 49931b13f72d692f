// File: src/screen.rs
// Purpose: Host surface for the sign-up form: owns fields, focus and the in-flight guard

use crate::collaborators::{Collaborators, Navigator};
use crate::config::SignUpConfig;
use crate::error::SubmitError;
use crate::field::{Field, FormValues};
use crate::focus::{FocusSequencer, FocusState, FocusStep};
use crate::orchestrator::{SubmissionOrchestrator, SubmissionOutcome};
use crate::registry::{lock, FieldRegistry, RegistryHandle, SharedRegistry};
use crate::schema::ValidationSchema;
use crate::translator::FieldErrorMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;
use tracing::debug;

/// Result of completing a field's input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldCompletion {
    /// Focus moved to the next field
    Focused(Field),
    /// The last field was completed and the form was submitted
    Submitted(Result<SubmissionOutcome, SubmitError>),
}

/// Marks a submission as in flight until dropped
struct InFlightGuard {
    flag: Arc<AtomicBool>,
}

impl InFlightGuard {
    fn acquire(flag: &Arc<AtomicBool>) -> Result<Self, SubmitError> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| SubmitError::InFlight)?;
        Ok(Self { flag: flag.clone() })
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// The sign-up screen
///
/// Every submit trigger (keyboard "send" on the last field, the submit
/// button) goes through [`SignUpScreen::submit`] or
/// [`SignUpScreen::spawn_submit`], which refuse to start while another
/// attempt is still running.
pub struct SignUpScreen {
    registry: SharedRegistry,
    focus: FocusSequencer,
    orchestrator: SubmissionOrchestrator,
    navigator: Arc<dyn Navigator>,
    in_flight: Arc<AtomicBool>,
}

impl SignUpScreen {
    /// Mount the screen with empty fields and nothing focused
    pub fn new(config: &SignUpConfig, collaborators: Collaborators) -> Self {
        let registry: SharedRegistry = Arc::new(Mutex::new(FieldRegistry::new()));
        let navigator = collaborators.navigator.clone();
        let orchestrator = SubmissionOrchestrator::new(
            ValidationSchema::sign_up(config),
            config.messages.clone(),
            collaborators,
            RegistryHandle::attach(&registry),
        );

        Self {
            registry,
            focus: FocusSequencer::new(),
            orchestrator,
            navigator,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn set_value(&self, field: Field, value: impl Into<String>) {
        lock(&self.registry).set_value(field, value);
    }

    pub fn value(&self, field: Field) -> String {
        lock(&self.registry).value(field).to_string()
    }

    pub fn values(&self) -> FormValues {
        lock(&self.registry).values()
    }

    pub fn error(&self, field: Field) -> Option<String> {
        lock(&self.registry).error(field).map(str::to_string)
    }

    pub fn errors(&self) -> FieldErrorMap {
        lock(&self.registry).errors().clone()
    }

    pub fn focus(&mut self, field: Field) {
        self.focus.focus(field);
    }

    pub fn focus_state(&self) -> FocusState {
        self.focus.state()
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Complete input on `field`: focus the next one, or submit after the last
    pub async fn complete(&mut self, field: Field) -> FieldCompletion {
        match self.focus.complete(field) {
            FocusStep::Focus(next) => FieldCompletion::Focused(next),
            FocusStep::Submit => FieldCompletion::Submitted(self.submit().await),
        }
    }

    /// Submit the current values and wait for the outcome
    pub async fn submit(&self) -> Result<SubmissionOutcome, SubmitError> {
        let _guard = InFlightGuard::acquire(&self.in_flight)?;
        Ok(self.orchestrator.submit(self.values()).await)
    }

    /// Start a submission on the runtime and return immediately
    ///
    /// The screen may be unmounted while the attempt runs; the attempt then
    /// finishes without touching the form, notifier or navigator.
    pub fn spawn_submit(&self) -> Result<JoinHandle<SubmissionOutcome>, SubmitError> {
        let guard = InFlightGuard::acquire(&self.in_flight)?;
        let orchestrator = self.orchestrator.clone();
        let values = self.values();

        Ok(tokio::spawn(async move {
            let outcome = orchestrator.submit(values).await;
            drop(guard);
            outcome
        }))
    }

    /// The user asked to leave the form
    pub fn go_back(&self) {
        self.navigator.go_back();
    }

    /// Tear the screen down
    pub fn unmount(self) {
        debug!(in_flight = self.is_submitting(), "sign-up screen unmounted");
    }
}
