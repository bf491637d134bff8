//! Submission transport.
//!
//! The wizard hands a finished [`SubmissionPayload`] to a [`SubmitTransport`]
//! and only cares whether it was accepted. [`HttpTransport`] posts it as JSON;
//! tests substitute their own implementation.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::{
    error::{Result, WizardError},
    models::SubmissionPayload,
};

/// Endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/rezervasyon";

/// Delivers one submission attempt.
#[async_trait]
pub trait SubmitTransport: Send + Sync {
    /// Send the payload once. Any error means the attempt failed.
    async fn submit(&self, payload: &SubmissionPayload) -> Result<()>;
}

/// Posts the payload as JSON to a fixed endpoint.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    /// Creates a transport for the endpoint. Requests have no timeout unless
    /// one is given.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::Configuration` if the HTTP client cannot be
    /// constructed.
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| WizardError::Configuration {
            message: format!("Failed to create HTTP client: {e}"),
        })?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SubmitTransport for HttpTransport {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<()> {
        debug!("POST {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(WizardError::transport)?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(WizardError::transport(format!(
                "endpoint responded with {status}"
            )))
        }
    }
}
