//! HTTP client shared foundation
//!
//! This module provides a shared HTTP client with:
//! - Bounded per-request timeout and User-Agent
//! - A single attempt per request (no retry, no backoff)
//! - Mapping of transport, status and decoding failures to RegistryError

use crate::error::RegistryError;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Default timeout for HTTP requests (5 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = concat!("pinaudit/", env!("CARGO_PKG_VERSION"));

/// HTTP client wrapper
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, RegistryError> {
        Self::with_config(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(timeout: Duration, user_agent: &str) -> Result<Self, RegistryError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| RegistryError::ClientBuild {
                message: e.to_string(),
            })?;

        Ok(Self { client })
    }

    fn transport_error(e: reqwest::Error, package: &str, registry: &str) -> RegistryError {
        if e.is_timeout() {
            RegistryError::timeout(package, registry)
        } else {
            RegistryError::network_error(package, registry, e.to_string())
        }
    }

    /// Perform a GET request, failing on any non-success status
    pub async fn get_with_context(
        &self,
        url: &str,
        package: &str,
        registry: &str,
    ) -> Result<reqwest::Response, RegistryError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Self::transport_error(e, package, registry))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::package_not_found(package, registry));
        }
        if !status.is_success() {
            return Err(RegistryError::HttpStatus {
                package: package.to_string(),
                registry: registry.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }

    /// Perform a GET request and decode the JSON body
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        package: &str,
        registry: &str,
    ) -> Result<T, RegistryError> {
        let response = self.get_with_context(url, package, registry).await?;
        let body = response
            .bytes()
            .await
            .map_err(|e| Self::transport_error(e, package, registry))?;

        serde_json::from_slice(&body).map_err(|e| {
            RegistryError::invalid_response(package, registry, format!("failed to parse JSON: {}", e))
        })
    }
}
