// File: src/registry.rs
// Purpose: Field values and error state, plus a detachable handle for writers

use crate::field::{Field, FormValues};
use crate::translator::FieldErrorMap;
use std::sync::{Arc, Mutex, MutexGuard, Weak};

/// Values and current errors of every field
#[derive(Debug, Clone, Default)]
pub struct FieldRegistry {
    values: FormValues,
    errors: FieldErrorMap,
}

impl FieldRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value);
    }

    /// Snapshot of every value
    pub fn values(&self) -> FormValues {
        self.values.clone()
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn errors(&self) -> &FieldErrorMap {
        &self.errors
    }

    /// Replace all errors; an empty map clears them
    pub fn set_errors(&mut self, errors: FieldErrorMap) {
        self.errors = errors;
    }

    pub fn clear_errors(&mut self) {
        self.errors = FieldErrorMap::new();
    }
}

/// A registry shared between a screen and the submissions it starts
pub type SharedRegistry = Arc<Mutex<FieldRegistry>>;

pub(crate) fn lock(registry: &Mutex<FieldRegistry>) -> MutexGuard<'_, FieldRegistry> {
    // writes replace whole fields, so a poisoned registry is still consistent
    registry.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Write access to a registry that does not keep it alive
///
/// Once the owning screen drops its registry, every write through the handle
/// is a no-op.
#[derive(Debug, Clone)]
pub struct RegistryHandle {
    inner: Weak<Mutex<FieldRegistry>>,
}

impl RegistryHandle {
    pub fn attach(registry: &SharedRegistry) -> Self {
        Self {
            inner: Arc::downgrade(registry),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.inner.strong_count() > 0
    }

    /// Write `errors` into the registry; returns `false` if it is gone
    pub fn set_errors(&self, errors: FieldErrorMap) -> bool {
        match self.inner.upgrade() {
            Some(registry) => {
                lock(&registry).set_errors(errors);
                true
            }
            None => false,
        }
    }

    pub fn clear_errors(&self) -> bool {
        self.set_errors(FieldErrorMap::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_and_errors() {
        let mut registry = FieldRegistry::new();
        registry.set_value(Field::Name, "Ana");
        registry.set_errors([(Field::Email, "E-mail obrigatório")].into_iter().collect());

        assert_eq!(registry.value(Field::Name), "Ana");
        assert_eq!(registry.error(Field::Email), Some("E-mail obrigatório"));
        assert_eq!(registry.error(Field::Name), None);

        registry.clear_errors();
        assert!(registry.errors().is_empty());
        assert_eq!(registry.values().name, "Ana", "clearing errors keeps values");
    }

    #[test]
    fn test_handle_writes_while_attached() {
        let registry: SharedRegistry = Arc::new(Mutex::new(FieldRegistry::new()));
        let handle = RegistryHandle::attach(&registry);

        assert!(handle.is_attached());
        assert!(handle.set_errors([(Field::Name, "Nome obrigatório")].into_iter().collect()));
        assert_eq!(lock(&registry).error(Field::Name), Some("Nome obrigatório"));

        assert!(handle.clear_errors());
        assert!(lock(&registry).errors().is_empty());
    }

    #[test]
    fn test_handle_is_noop_after_drop() {
        let registry: SharedRegistry = Arc::new(Mutex::new(FieldRegistry::new()));
        let handle = RegistryHandle::attach(&registry);
        drop(registry);

        assert!(!handle.is_attached());
        assert!(!handle.set_errors([(Field::Name, "Nome obrigatório")].into_iter().collect()));
        assert!(!handle.clear_errors());
    }
}
