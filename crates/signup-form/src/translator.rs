// File: src/translator.rs
// Purpose: Collapse a validation failure into one displayable message per field

use crate::field::Field;
use crate::schema::ValidationFailure;
use std::collections::btree_map::{self, BTreeMap};

/// Field → message for the errors currently shown on the form
///
/// An empty map means "no errors": writing it clears every indicator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrorMap {
    errors: BTreeMap<Field, String>,
}

impl FieldErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Fields with errors, in declaration order
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Field, String> {
        self.errors.iter()
    }
}

impl<'a> IntoIterator for &'a FieldErrorMap {
    type Item = (&'a Field, &'a String);
    type IntoIter = btree_map::Iter<'a, Field, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Collects pairs keeping the first message seen for each field
impl<S: Into<String>> FromIterator<(Field, S)> for FieldErrorMap {
    fn from_iter<I: IntoIterator<Item = (Field, S)>>(iter: I) -> Self {
        let mut errors: BTreeMap<Field, String> = BTreeMap::new();
        for (field, message) in iter {
            errors.entry(field).or_insert_with(|| message.into());
        }
        Self { errors }
    }
}

impl From<&ValidationFailure> for FieldErrorMap {
    fn from(failure: &ValidationFailure) -> Self {
        translate(failure)
    }
}

/// Keep the first message reported for each field
///
/// Violations arrive in schema evaluation order, so the first one for a field
/// is the one from its earliest declared check.
pub fn translate(failure: &ValidationFailure) -> FieldErrorMap {
    failure
        .violations()
        .iter()
        .map(|violation| (violation.field, violation.message.as_str()))
        .collect()
}
