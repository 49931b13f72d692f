//! Registration backends
//!
//! The form hands validated values to a [`Registration`] and only cares
//! whether it succeeded. [`HttpRegistration`] posts them to the users
//! endpoint of the API; [`DryRunRegistration`] accepts everything and is used
//! when no backend is reachable.

use crate::config::ApiConfig;
use crate::error::RegistrationError;
use crate::field::FormValues;
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// Trait for account registration backends
#[async_trait]
pub trait Registration: Send + Sync {
    /// Create the account described by `values`
    async fn register(&self, values: &FormValues) -> Result<(), RegistrationError>;

    /// Get backend name
    fn name(&self) -> &'static str;
}

/// Registration over HTTP: `POST {base_url}{users_path}` with a JSON body
#[derive(Debug, Clone)]
pub struct HttpRegistration {
    client: Client,
    url: String,
}

impl HttpRegistration {
    pub fn new(config: &ApiConfig) -> Result<Self, RegistrationError> {
        let client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            client,
            url: config.users_url(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Registration for HttpRegistration {
    async fn register(&self, values: &FormValues) -> Result<(), RegistrationError> {
        debug!(url = %self.url, "posting registration");

        let response = self.client.post(&self.url).json(values).send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            Err(RegistrationError::Rejected {
                status: status.as_u16(),
            })
        }
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

/// Accepts every registration without contacting anything
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunRegistration;

#[async_trait]
impl Registration for DryRunRegistration {
    async fn register(&self, _values: &FormValues) -> Result<(), RegistrationError> {
        debug!("dry-run registration accepted");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "dry-run"
    }
}
