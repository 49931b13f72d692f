// File: src/config.rs
// Purpose: Configuration parsing from signup.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::warn;

/// Sign-up form configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SignUpConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub rules: RulesConfig,

    #[serde(default)]
    pub messages: MessagesConfig,
}

/// Registration endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path the registration body is POSTed to (default: "/users")
    #[serde(default = "default_users_path")]
    pub users_path: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Tunable validation constraints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RulesConfig {
    #[serde(default = "default_password_min_length")]
    pub password_min_length: usize,
}

/// Every user-visible string the form produces
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessagesConfig {
    #[serde(default = "default_name_required")]
    pub name_required: String,

    #[serde(default = "default_email_required")]
    pub email_required: String,

    #[serde(default = "default_email_invalid")]
    pub email_invalid: String,

    #[serde(default = "default_password_too_short")]
    pub password_too_short: String,

    #[serde(default = "default_success_title")]
    pub success_title: String,

    #[serde(default = "default_success_description")]
    pub success_description: String,

    #[serde(default = "default_failure_title")]
    pub failure_title: String,

    #[serde(default = "default_failure_description")]
    pub failure_description: String,
}

// Default values
fn default_base_url() -> String {
    "http://localhost:3333".to_string()
}

fn default_users_path() -> String {
    "/users".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_password_min_length() -> usize {
    6
}

fn default_name_required() -> String {
    "Nome obrigatório".to_string()
}

fn default_email_required() -> String {
    "E-mail obrigatório".to_string()
}

fn default_email_invalid() -> String {
    "email must be a valid email".to_string()
}

fn default_password_too_short() -> String {
    "No mínimo 6 digitos".to_string()
}

fn default_success_title() -> String {
    "Cadastro realizado".to_string()
}

fn default_success_description() -> String {
    "Você já pode fazer seu logon no GoBarber".to_string()
}

fn default_failure_title() -> String {
    "Erro no cadastro".to_string()
}

fn default_failure_description() -> String {
    "Ocorreu um erro ao realizar o cadastro, tente novamente".to_string()
}

// Default implementations
impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            users_path: default_users_path(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            password_min_length: default_password_min_length(),
        }
    }
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            name_required: default_name_required(),
            email_required: default_email_required(),
            email_invalid: default_email_invalid(),
            password_too_short: default_password_too_short(),
            success_title: default_success_title(),
            success_description: default_success_description(),
            failure_title: default_failure_title(),
            failure_description: default_failure_description(),
        }
    }
}

impl ApiConfig {
    /// Full URL of the registration endpoint
    pub fn users_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.users_path.trim_start_matches('/')
        )
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl SignUpConfig {
    /// Load configuration from a TOML file
    ///
    /// A missing or blank file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_existing(path)
    }

    /// Load configuration from a file the user named; a missing file is an error
    pub fn load_existing(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load configuration from default path (./signup.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("signup.toml")
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = toml::from_str(content)?;

        if config.has_stale_length_message() {
            warn!(
                password_min_length = config.rules.password_min_length,
                "rules.password_min_length changed but messages.password_too_short \
                 still names the default length"
            );
        }

        Ok(config)
    }

    /// The password length rule was changed without changing its message
    ///
    /// `messages.password_too_short` is free text, so it has to be edited
    /// together with `rules.password_min_length`.
    pub fn has_stale_length_message(&self) -> bool {
        self.rules.password_min_length != default_password_min_length()
            && self.messages.password_too_short == default_password_too_short()
    }
}
