// Test doubles for the collaborators a sign-up submission talks to

#![allow(dead_code)]

use async_trait::async_trait;
use signup_form::{
    Collaborators, FormValues, Navigator, Notice, Notifier, Registration, RegistrationError,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub back: AtomicUsize,
    pub sign_in: AtomicUsize,
}

impl RecordingNavigator {
    pub fn back_count(&self) -> usize {
        self.back.load(Ordering::SeqCst)
    }

    pub fn sign_in_count(&self) -> usize {
        self.sign_in.load(Ordering::SeqCst)
    }
}

impl Navigator for RecordingNavigator {
    fn go_back(&self) {
        self.back.fetch_add(1, Ordering::SeqCst);
    }

    fn return_to_sign_in(&self) {
        self.sign_in.fetch_add(1, Ordering::SeqCst);
    }
}

/// Registration that answers the same way every time
pub struct StubRegistration {
    accept: bool,
    calls: Mutex<Vec<FormValues>>,
}

impl StubRegistration {
    pub fn accepting() -> Self {
        Self {
            accept: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            accept: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<FormValues> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Registration for StubRegistration {
    async fn register(&self, values: &FormValues) -> Result<(), RegistrationError> {
        self.calls.lock().unwrap().push(values.clone());
        if self.accept {
            Ok(())
        } else {
            Err(RegistrationError::Rejected { status: 503 })
        }
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

/// Registration that parks until the test releases it
#[derive(Default)]
pub struct GatedRegistration {
    pub entered: Notify,
    pub release: Notify,
}

#[async_trait]
impl Registration for GatedRegistration {
    async fn register(&self, _values: &FormValues) -> Result<(), RegistrationError> {
        self.entered.notify_one();
        self.release.notified().await;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "gated"
    }
}

pub struct Harness<R> {
    pub registration: Arc<R>,
    pub notifier: Arc<RecordingNotifier>,
    pub navigator: Arc<RecordingNavigator>,
}

impl<R: Registration + 'static> Harness<R> {
    pub fn new(registration: R) -> Self {
        Self {
            registration: Arc::new(registration),
            notifier: Arc::new(RecordingNotifier::default()),
            navigator: Arc::new(RecordingNavigator::default()),
        }
    }

    pub fn collaborators(&self) -> Collaborators {
        Collaborators::new(
            self.registration.clone(),
            self.notifier.clone(),
            self.navigator.clone(),
        )
    }
}
