// File: src/schema.rs
// Purpose: Declarative per-field rules and the all-violations validation pass

use crate::config::SignUpConfig;
use crate::error::SchemaError;
use crate::field::{Field, FormValues};
use signup_validation::{is_present, is_valid_email, meets_min_length};

/// What shape a field's value must have
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatKind {
    /// Any text; no format constraint
    Text,
    /// A well-formed email address; `message` is reported otherwise
    Email { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinLength {
    pub chars: usize,
    pub message: String,
}

/// Constraints on a single field
///
/// Checks run in a fixed order: required, format, minimum length. Format and
/// length only apply to non-empty values, so an empty optional field passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRule {
    field: Field,
    required: Option<String>,
    format: FormatKind,
    min_length: Option<MinLength>,
}

impl FieldRule {
    /// An optional plain-text rule with no constraints
    pub fn new(field: Field) -> Self {
        Self {
            field,
            required: None,
            format: FormatKind::Text,
            min_length: None,
        }
    }

    pub fn required(mut self, message: impl Into<String>) -> Self {
        self.required = Some(message.into());
        self
    }

    pub fn email(mut self, message: impl Into<String>) -> Self {
        self.format = FormatKind::Email {
            message: message.into(),
        };
        self
    }

    pub fn format(mut self, format: FormatKind) -> Self {
        self.format = format;
        self
    }

    pub fn min_length(mut self, chars: usize, message: impl Into<String>) -> Self {
        self.min_length = Some(MinLength {
            chars,
            message: message.into(),
        });
        self
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn is_required(&self) -> bool {
        self.required.is_some()
    }

    pub fn format_kind(&self) -> &FormatKind {
        &self.format
    }

    pub fn min_chars(&self) -> Option<usize> {
        self.min_length.as_ref().map(|min| min.chars)
    }

    /// Append every violation of this rule to `violations`
    fn check(&self, value: &str, violations: &mut Vec<Violation>) {
        let mut violate = |message: &str| {
            violations.push(Violation {
                field: self.field,
                message: message.to_string(),
            })
        };

        if !is_present(value) {
            if let Some(message) = &self.required {
                violate(message.as_str());
            }
            return;
        }

        if let FormatKind::Email { message } = &self.format {
            if !is_valid_email(value) {
                violate(message.as_str());
            }
        }

        if let Some(min) = &self.min_length {
            if !meets_min_length(value, min.chars) {
                violate(min.message.as_str());
            }
        }
    }
}

/// One broken rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: Field,
    pub message: String,
}

/// Every violation found in one validation pass, in evaluation order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    violations: Vec<Violation>,
}

impl ValidationFailure {
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Messages for one field, in evaluation order
    pub fn messages_for(&self, field: Field) -> impl Iterator<Item = &str> {
        self.violations
            .iter()
            .filter(move |v| v.field == field)
            .map(|v| v.message.as_str())
    }
}

/// Ordered rule set with exactly one rule per field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationSchema {
    rules: Vec<FieldRule>,
}

impl ValidationSchema {
    /// Build a schema from rules, keeping their order
    pub fn new(rules: Vec<FieldRule>) -> Result<Self, SchemaError> {
        for (i, rule) in rules.iter().enumerate() {
            if rules[..i].iter().any(|earlier| earlier.field == rule.field) {
                return Err(SchemaError::DuplicateRule(rule.field));
            }
        }

        if let Some(missing) = Field::ALL
            .into_iter()
            .find(|field| !rules.iter().any(|rule| rule.field == *field))
        {
            return Err(SchemaError::MissingRule(missing));
        }

        Ok(Self { rules })
    }

    /// The sign-up schema
    ///
    /// - name: required
    /// - email: required, email format
    /// - password: optional, minimum length when given
    pub fn sign_up(config: &SignUpConfig) -> Self {
        let messages = &config.messages;

        Self {
            rules: vec![
                FieldRule::new(Field::Name).required(&messages.name_required),
                FieldRule::new(Field::Email)
                    .required(&messages.email_required)
                    .email(&messages.email_invalid),
                FieldRule::new(Field::Password).min_length(
                    config.rules.password_min_length,
                    &messages.password_too_short,
                ),
            ],
        }
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    pub fn rule(&self, field: Field) -> Option<&FieldRule> {
        self.rules.iter().find(|rule| rule.field == field)
    }

    /// Check every rule against `values`
    ///
    /// Does not stop at the first broken rule: the failure lists every
    /// violation of every field.
    pub fn validate(&self, values: &FormValues) -> Result<(), ValidationFailure> {
        let mut violations = Vec::new();

        for rule in &self.rules {
            rule.check(values.get(rule.field), &mut violations);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationFailure { violations })
        }
    }
}

impl Default for ValidationSchema {
    fn default() -> Self {
        Self::sign_up(&SignUpConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn violations(values: &FormValues) -> Vec<(Field, String)> {
        match ValidationSchema::default().validate(values) {
            Ok(()) => Vec::new(),
            Err(failure) => failure
                .violations()
                .iter()
                .map(|v| (v.field, v.message.clone()))
                .collect(),
        }
    }

    #[test]
    fn test_valid_values_pass() {
        let values = FormValues::new("Ana", "a@b.com", "123456");
        assert!(ValidationSchema::default().validate(&values).is_ok());
    }

    #[rstest]
    #[case("a@b.com", "abcdef")]
    #[case("", "")]
    #[case("not-an-email", "123")]
    fn test_empty_name_always_flagged(#[case] email: &str, #[case] password: &str) {
        let values = FormValues::new("", email, password);
        let found = violations(&values);
        assert!(found.contains(&(Field::Name, "Nome obrigatório".to_string())));
    }

    #[test]
    fn test_empty_email_reports_required_only() {
        let found = violations(&FormValues::new("Ana", "", "123456"));
        assert_eq!(found, vec![(Field::Email, "E-mail obrigatório".to_string())]);
    }

    #[test]
    fn test_malformed_email_reports_format() {
        let found = violations(&FormValues::new("Ana", "not-an-email", "123456"));
        assert_eq!(
            found,
            vec![(Field::Email, "email must be a valid email".to_string())]
        );
    }

    #[rstest]
    #[case("1", true)]
    #[case("12345", true)]
    #[case("123456", false)]
    #[case("", false)]
    fn test_password_min_length(#[case] password: &str, #[case] flagged: bool) {
        let found = violations(&FormValues::new("Ana", "a@b.com", password));
        let expected = (Field::Password, "No mínimo 6 digitos".to_string());
        assert_eq!(found.contains(&expected), flagged);
    }

    #[test]
    fn test_all_violations_collected_in_schema_order() {
        let found = violations(&FormValues::new("", "nope", "123"));
        assert_eq!(
            found,
            vec![
                (Field::Name, "Nome obrigatório".to_string()),
                (Field::Email, "email must be a valid email".to_string()),
                (Field::Password, "No mínimo 6 digitos".to_string()),
            ]
        );
    }

    #[test]
    fn test_rule_reports_every_broken_check() {
        let schema = ValidationSchema::new(vec![
            FieldRule::new(Field::Name).format(FormatKind::Text),
            FieldRule::new(Field::Email)
                .email("bad email")
                .min_length(10, "email too short"),
            FieldRule::new(Field::Password),
        ])
        .unwrap();

        let failure = schema
            .validate(&FormValues::new("", "x@y", ""))
            .unwrap_err();
        let messages: Vec<_> = failure.messages_for(Field::Email).collect();
        assert_eq!(messages, vec!["bad email", "email too short"]);
        assert_eq!(failure.messages_for(Field::Name).count(), 0);
    }

    #[test]
    fn test_text_format_has_no_constraint() {
        let rule = FieldRule::new(Field::Email)
            .email("bad email")
            .format(FormatKind::Text);
        assert_eq!(rule.format_kind(), &FormatKind::Text);

        let mut found = Vec::new();
        rule.check("not-an-email", &mut found);
        assert!(found.is_empty());
    }

    #[test]
    fn test_duplicate_rule_rejected() {
        let result = ValidationSchema::new(vec![
            FieldRule::new(Field::Name),
            FieldRule::new(Field::Email),
            FieldRule::new(Field::Name),
            FieldRule::new(Field::Password),
        ]);
        assert_eq!(result, Err(SchemaError::DuplicateRule(Field::Name)));
    }

    #[test]
    fn test_missing_rule_rejected() {
        let result = ValidationSchema::new(vec![
            FieldRule::new(Field::Name),
            FieldRule::new(Field::Password),
        ]);
        assert_eq!(result, Err(SchemaError::MissingRule(Field::Email)));
    }

    #[test]
    fn test_sign_up_rule_shape() {
        let schema = ValidationSchema::default();
        let password = schema.rule(Field::Password).unwrap();
        assert!(!password.is_required());
        assert_eq!(password.min_chars(), Some(6));
        assert!(matches!(
            schema.rule(Field::Email).unwrap().format_kind(),
            FormatKind::Email { .. }
        ));
        let order: Vec<_> = schema.rules().iter().map(FieldRule::field).collect();
        assert_eq!(order, Field::ALL.to_vec());
    }

    #[test]
    fn test_min_length_follows_config() {
        let mut config = SignUpConfig::default();
        config.rules.password_min_length = 8;
        let schema = ValidationSchema::sign_up(&config);
        assert!(schema
            .validate(&FormValues::new("Ana", "a@b.com", "1234567"))
            .is_err());
        assert!(schema
            .validate(&FormValues::new("Ana", "a@b.com", "12345678"))
            .is_ok());
    }
}
