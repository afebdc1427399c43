//! Registry adapters for looking up the latest published version
//!
//! This module provides:
//! - HTTP client shared foundation
//! - PyPI JSON API resolver
//! - The VersionResolver seam used by the orchestrator

mod client;
mod pypi;

pub use client::{HttpClient, DEFAULT_TIMEOUT};
pub use pypi::{PyPIResolver, PYPI_BASE_URL};

use crate::domain::LatestVersion;
use async_trait::async_trait;

/// Trait for latest version lookups
///
/// Implementations never fail: any problem is reported as
/// [`LatestVersion::Unavailable`] carrying its cause.
#[async_trait]
pub trait VersionResolver: Send + Sync {
    /// Get the registry name
    fn registry_name(&self) -> &'static str;

    /// Look up the latest published version of a package
    async fn latest_version(&self, package: &str) -> LatestVersion;
}
