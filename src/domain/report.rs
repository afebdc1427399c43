//! Per-manifest reports and run summary
//!
//! Provides structures tying declarations to their lookup results at the
//! manifest and run levels.

use super::{LatestVersion, ManifestRef, PackageDeclaration};

/// A declaration together with the lookup performed for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPackage {
    /// The declaration from the manifest
    pub declaration: PackageDeclaration,
    /// Latest version lookup result
    pub latest: LatestVersion,
}

impl ResolvedPackage {
    /// Creates a new ResolvedPackage
    pub fn new(declaration: PackageDeclaration, latest: LatestVersion) -> Self {
        Self {
            declaration,
            latest,
        }
    }

    /// Returns true if the pinned version differs from a found latest version
    pub fn is_outdated(&self) -> bool {
        self.latest
            .version()
            .is_some_and(|v| v != self.declaration.pinned_version)
    }
}

/// One row of the comparison table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRow {
    /// Manifest directory relative to the repository root
    pub app_path: String,
    /// Package name
    pub package: String,
    /// Pinned version
    pub current: String,
    /// Latest version or the lookup failure marker
    pub latest: String,
    /// Whether the latest lookup failed
    pub lookup_failed: bool,
}

impl ComparisonRow {
    /// The four displayed cells in column order
    pub fn cells(&self) -> [&str; 4] {
        [&self.app_path, &self.package, &self.current, &self.latest]
    }
}

/// All resolved declarations of one manifest, in declaration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestReport {
    /// The manifest
    pub manifest: ManifestRef,
    /// Resolved declarations
    pub packages: Vec<ResolvedPackage>,
}

impl ManifestReport {
    /// Creates an empty report for a manifest
    pub fn new(manifest: ManifestRef) -> Self {
        Self {
            manifest,
            packages: Vec::new(),
        }
    }

    /// Adds a resolved declaration
    pub fn add(&mut self, package: ResolvedPackage) {
        self.packages.push(package);
    }

    /// Rows of the comparison table for this manifest
    pub fn comparison_rows(&self) -> Vec<ComparisonRow> {
        let app_path = self.manifest.app_path();
        self.packages
            .iter()
            .map(|p| ComparisonRow {
                app_path: app_path.clone(),
                package: p.declaration.name.clone(),
                current: p.declaration.pinned_version.clone(),
                latest: p.latest.display_text().to_string(),
                lookup_failed: p.latest.is_unavailable(),
            })
            .collect()
    }

    /// Number of failed lookups
    pub fn failed_count(&self) -> usize {
        self.packages
            .iter()
            .filter(|p| p.latest.is_unavailable())
            .count()
    }

    /// Number of declarations whose pin is behind the latest version
    pub fn outdated_count(&self) -> usize {
        self.packages.iter().filter(|p| p.is_outdated()).count()
    }
}

/// Counters for a whole run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AuditSummary {
    /// Manifests processed
    pub manifests: usize,
    /// Declarations looked up
    pub packages: usize,
    /// Declarations whose pin differs from the latest version
    pub outdated: usize,
    /// Lookups that failed
    pub failed_lookups: usize,
}

impl AuditSummary {
    /// Accumulates a manifest report into the summary
    pub fn record(&mut self, report: &ManifestReport) {
        self.manifests += 1;
        self.packages += report.packages.len();
        self.outdated += report.outdated_count();
        self.failed_lookups += report.failed_count();
    }
}
