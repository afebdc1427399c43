//! Exact-pin package declarations

/// A `name==version` line extracted from a requirements manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDeclaration {
    /// Package name as written in the manifest
    pub name: String,
    /// Pinned version as written in the manifest
    pub pinned_version: String,
}

impl PackageDeclaration {
    /// Creates a new declaration
    pub fn new(name: impl Into<String>, pinned_version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pinned_version: pinned_version.into(),
        }
    }

    /// Formats an exact pin of this package at the given version
    pub fn pin_to(&self, version: &str) -> String {
        format!("{}=={}", self.name, version)
    }
}
