// File: src/field.rs
// Purpose: The closed set of sign-up fields and the values typed into them

use crate::error::UnknownField;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A field of the sign-up form, in declaration (and focus) order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
}

impl Field {
    /// Every field, in declaration order
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Password];

    /// The string key used for this field
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
        }
    }

    /// The field after this one, or `None` for the last field
    pub fn next(self) -> Option<Field> {
        match self {
            Field::Name => Some(Field::Email),
            Field::Email => Some(Field::Password),
            Field::Password => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Current value of every field
///
/// Serializes to the registration request body:
/// `{"name": "...", "email": "...", "password": "..."}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl FormValues {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
        };
        *slot = value.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_keys_round_trip() {
        for field in Field::ALL {
            assert_eq!(field.as_str().parse::<Field>(), Ok(field));
        }
    }

    #[test]
    fn test_unknown_field_key() {
        let err = "phone".parse::<Field>().unwrap_err();
        assert_eq!(err, UnknownField("phone".to_string()));
        assert!("Name".parse::<Field>().is_err(), "keys are case-sensitive");
    }

    #[test]
    fn test_next_follows_declaration_order() {
        assert_eq!(Field::Name.next(), Some(Field::Email));
        assert_eq!(Field::Email.next(), Some(Field::Password));
        assert_eq!(Field::Password.next(), None);
    }

    #[test]
    fn test_values_get_and_set() {
        let mut values = FormValues::default();
        values.set(Field::Email, "ana@gobarber.com");
        assert_eq!(values.get(Field::Email), "ana@gobarber.com");
        assert_eq!(values.get(Field::Name), "");
    }

    #[test]
    fn test_values_serialize_as_request_body() {
        let values = FormValues::new("Ana", "a@b.com", "123456");
        let json = serde_json::to_value(&values).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Ana", "email": "a@b.com", "password": "123456"})
        );
    }
}
