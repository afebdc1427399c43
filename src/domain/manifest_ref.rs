//! Discovered manifest references

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

/// A requirements manifest found under the repository root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestRef {
    /// Absolute path to the manifest file
    pub path: PathBuf,
    /// Path of the manifest relative to the repository root
    pub relative: PathBuf,
}

impl ManifestRef {
    /// Create a reference from the manifest path and the repository root.
    ///
    /// Paths outside the root keep their full form as the relative part.
    pub fn new(path: impl Into<PathBuf>, root: &Path) -> Self {
        let path = path.into();
        let relative = path
            .strip_prefix(root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.clone());
        Self { path, relative }
    }

    /// Directory of the manifest relative to the repository root
    ///
    /// A manifest at the root itself reports `.`.
    pub fn app_path(&self) -> String {
        match self.relative.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.display().to_string(),
            _ => ".".to_string(),
        }
    }

    /// File name of the manifest
    pub fn file_name(&self) -> String {
        self.relative
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Lowercased relative path used for app filtering
    pub fn folded_path(&self) -> String {
        self.relative.to_string_lossy().to_lowercase()
    }
}

impl Ord for ManifestRef {
    fn cmp(&self, other: &Self) -> Ordering {
        self.relative
            .cmp(&other.relative)
            .then_with(|| self.path.cmp(&other.path))
    }
}

impl PartialOrd for ManifestRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
