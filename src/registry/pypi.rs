//! PyPI JSON API resolver
//!
//! Looks up the latest version of a package on PyPI.
//! API endpoint: https://pypi.org/pypi/{package}/json

use crate::domain::LatestVersion;
use crate::error::RegistryError;
use crate::registry::{HttpClient, VersionResolver};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

/// PyPI base URL
pub const PYPI_BASE_URL: &str = "https://pypi.org";

/// PyPI resolver
pub struct PyPIResolver {
    client: HttpClient,
    base_url: String,
}

/// PyPI package metadata response
#[derive(Debug, Deserialize)]
struct PyPIResponse {
    info: PyPIInfo,
}

/// Package information block
#[derive(Debug, Deserialize)]
struct PyPIInfo {
    /// Latest version according to PyPI
    version: String,
}

impl PyPIResolver {
    /// Create a resolver against pypi.org
    pub fn new(client: HttpClient) -> Self {
        Self::with_base_url(client, PYPI_BASE_URL)
    }

    /// Create a resolver against another index exposing the same JSON API
    pub fn with_base_url(client: HttpClient, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build the URL for a package
    fn build_url(&self, package: &str) -> String {
        format!("{}/pypi/{}/json", self.base_url, package)
    }

    /// Fetch the latest version, keeping the failure cause
    pub async fn fetch_latest(&self, package: &str) -> Result<String, RegistryError> {
        let url = self.build_url(package);
        debug!("Fetching PyPI package: {}", url);

        let response: PyPIResponse = self
            .client
            .get_json(&url, package, self.registry_name())
            .await?;

        Ok(response.info.version)
    }
}

#[async_trait]
impl VersionResolver for PyPIResolver {
    fn registry_name(&self) -> &'static str {
        "PyPI"
    }

    async fn latest_version(&self, package: &str) -> LatestVersion {
        let latest = LatestVersion::from(self.fetch_latest(package).await);
        match latest.error() {
            Some(e) => warn!(package, error = %e, "latest version lookup failed"),
            None => debug!(package, version = %latest, "resolved latest version"),
        }
        latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    fn resolver(base_url: String) -> PyPIResolver {
        PyPIResolver::with_base_url(HttpClient::new().unwrap(), base_url)
    }

    #[test]
    fn test_pypi_registry_name() {
        let resolver = PyPIResolver::new(HttpClient::new().unwrap());
        assert_eq!(resolver.registry_name(), "PyPI");
    }

    #[test]
    fn test_build_url() {
        let resolver = PyPIResolver::new(HttpClient::new().unwrap());
        assert_eq!(
            resolver.build_url("requests"),
            "https://pypi.org/pypi/requests/json"
        );
    }

    #[test]
    fn test_build_url_trims_trailing_slash() {
        let resolver = resolver("http://localhost:1234/".to_string());
        assert_eq!(
            resolver.build_url("flask-restful"),
            "http://localhost:1234/pypi/flask-restful/json"
        );
    }

    #[tokio::test]
    async fn test_latest_version_found() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/pypi/flask/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "info": {"name": "Flask", "version": "3.0.0"},
                    "releases": {"2.0.0": [], "3.0.0": []}
                }"#,
            )
            .create_async()
            .await;

        let latest = resolver(server.url()).latest_version("flask").await;

        mock.assert_async().await;
        assert_eq!(latest, LatestVersion::found("3.0.0"));
    }

    #[tokio::test]
    async fn test_latest_version_not_found() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/pypi/nonexistent/json")
            .with_status(404)
            .create_async()
            .await;

        let latest = resolver(server.url()).latest_version("nonexistent").await;

        mock.assert_async().await;
        assert_eq!(latest.to_string(), "Error");
        assert!(matches!(
            latest.error(),
            Some(RegistryError::PackageNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_latest_version_missing_info_version() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/pypi/flask/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"info": {"name": "Flask"}}"#)
            .create_async()
            .await;

        let latest = resolver(server.url()).latest_version("flask").await;

        mock.assert_async().await;
        assert_eq!(latest.to_string(), "Error");
        assert!(matches!(
            latest.error(),
            Some(RegistryError::InvalidResponse { .. })
        ));
    }

    #[tokio::test]
    async fn test_latest_version_network_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let latest = resolver(format!("http://{}", addr))
            .latest_version("requests")
            .await;

        assert_eq!(latest.to_string(), "Error");
        assert!(latest.is_unavailable());
    }

    #[tokio::test]
    async fn test_latest_version_timeout() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let client =
            HttpClient::with_config(std::time::Duration::from_millis(200), "test").unwrap();

        let latest = PyPIResolver::with_base_url(client, format!("http://{}", addr))
            .latest_version("requests")
            .await;

        drop(listener);
        assert_eq!(latest.to_string(), "Error");
        assert!(matches!(latest.error(), Some(RegistryError::Timeout { .. })));
    }

    #[tokio::test]
    async fn test_repeated_lookups_are_not_cached() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/pypi/six/json")
            .with_status(200)
            .with_body(r#"{"info": {"version": "1.16.0"}}"#)
            .expect(3)
            .create_async()
            .await;

        let resolver = resolver(server.url());
        for _ in 0..3 {
            assert_eq!(
                resolver.latest_version("six").await,
                LatestVersion::found("1.16.0")
            );
        }

        mock.assert_async().await;
    }
}
