//! Result of a latest version lookup
//!
//! A lookup either finds the published version or fails for some reason. The
//! failure keeps its cause so callers can tell a failed lookup apart from a
//! package whose published version happens to read `Error`.

use crate::error::RegistryError;
use std::fmt;

/// Text rendered in place of a version when the lookup failed
pub const LOOKUP_FAILED: &str = "Error";

/// Latest published version of a package, or why it could not be determined
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LatestVersion {
    /// The index reported this version as the latest
    Found(String),
    /// The lookup failed
    Unavailable(RegistryError),
}

impl LatestVersion {
    /// Creates a found result
    pub fn found(version: impl Into<String>) -> Self {
        LatestVersion::Found(version.into())
    }

    /// Returns true if the lookup failed
    pub fn is_unavailable(&self) -> bool {
        matches!(self, LatestVersion::Unavailable(_))
    }

    /// Returns the version if the lookup succeeded
    pub fn version(&self) -> Option<&str> {
        match self {
            LatestVersion::Found(v) => Some(v),
            LatestVersion::Unavailable(_) => None,
        }
    }

    /// Returns the failure cause if the lookup failed
    pub fn error(&self) -> Option<&RegistryError> {
        match self {
            LatestVersion::Found(_) => None,
            LatestVersion::Unavailable(e) => Some(e),
        }
    }

    /// Text shown in tables and pin listings
    pub fn display_text(&self) -> &str {
        match self {
            LatestVersion::Found(v) => v,
            LatestVersion::Unavailable(_) => LOOKUP_FAILED,
        }
    }
}

impl From<Result<String, RegistryError>> for LatestVersion {
    fn from(result: Result<String, RegistryError>) -> Self {
        match result {
            Ok(version) => LatestVersion::found(version),
            Err(e) => LatestVersion::Unavailable(e),
        }
    }
}

impl fmt::Display for LatestVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_text())
    }
}
