//! Audit orchestrator for coordinating the per-manifest pipeline
//!
//! This module provides:
//! - Workflow coordination: clone → locate → parse → resolve → render
//! - Strictly sequential lookups, one per declaration, no caching
//! - Mode selection fixed for the whole run
//! - Localized lookup failures that never stop the run

use crate::checkout::{Checkout, GitCloner, REPO_NAME};
use crate::cli::CliArgs;
use crate::domain::{AuditSummary, ManifestReport, ResolvedPackage, RunMode};
use crate::error::{AppError, IoError};
use crate::manifest::{locate_manifests, read_requirements};
use crate::output::{create_formatter, NO_MANIFESTS_MESSAGE};
use crate::progress::Progress;
use crate::registry::{HttpClient, PyPIResolver, VersionResolver};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Immutable settings of one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditConfig {
    /// Normalized app filters; empty means every manifest
    pub filters: Vec<String>,
    /// Output mode
    pub mode: RunMode,
    /// Whether the comparison table may use colors
    pub color: bool,
    /// Whether progress bars are drawn on stderr
    pub progress: bool,
}

impl AuditConfig {
    /// Create a configuration with the given filters and mode
    pub fn new(filters: Vec<String>, mode: RunMode) -> Self {
        Self {
            filters,
            mode,
            color: false,
            progress: false,
        }
    }

    /// Create configuration from CLI arguments
    pub fn from_cli(args: &CliArgs) -> Self {
        Self::new(args.app_filters(), args.mode())
    }

    /// Enable or disable colors
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Enable or disable progress display
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditOutcome {
    /// No manifest matched the filters; only the notice was printed
    NoManifests,
    /// Every matching manifest was reported
    Completed(AuditSummary),
}

/// Orchestrator for the audit workflow
pub struct Auditor {
    /// Run configuration
    config: AuditConfig,
    /// Latest version lookups
    resolver: Box<dyn VersionResolver>,
}

impl Auditor {
    /// Create a new auditor
    pub fn new(config: AuditConfig, resolver: Box<dyn VersionResolver>) -> Self {
        Self { config, resolver }
    }

    /// Create an auditor resolving against pypi.org
    pub fn for_pypi(config: AuditConfig) -> Result<Self, AppError> {
        let resolver = PyPIResolver::new(HttpClient::new()?);
        Ok(Self::new(config, Box::new(resolver)))
    }

    /// Clone `url` into a scratch directory and audit the working tree
    ///
    /// The scratch directory is gone by the time this returns, whatever the
    /// outcome.
    pub async fn audit_repository(
        &self,
        cloner: &dyn GitCloner,
        url: &str,
        writer: &mut dyn Write,
    ) -> Result<AuditOutcome, AppError> {
        let mut progress = Progress::new(self.config.progress);
        progress.cloning(REPO_NAME);
        let checkout = Checkout::acquire(cloner, url).await;
        progress.clear();
        let checkout = checkout?;

        self.audit_tree(checkout.path(), writer, &mut progress).await
    }

    /// Audit every matching manifest under `repo_root`, writing to `writer`
    pub async fn run(
        &self,
        repo_root: &Path,
        writer: &mut dyn Write,
    ) -> Result<AuditOutcome, AppError> {
        let mut progress = Progress::new(self.config.progress);
        self.audit_tree(repo_root, writer, &mut progress).await
    }

    async fn audit_tree(
        &self,
        repo_root: &Path,
        writer: &mut dyn Write,
        progress: &mut Progress,
    ) -> Result<AuditOutcome, AppError> {
        let manifests = locate_manifests(repo_root, &self.config.filters)?;
        debug!(mode = %self.config.mode, manifests = manifests.len(), "located manifests");

        if manifests.is_empty() {
            writeln!(writer, "{}", NO_MANIFESTS_MESSAGE).map_err(IoError::from)?;
            return Ok(AuditOutcome::NoManifests);
        }

        let formatter = create_formatter(self.config.mode, self.config.color);
        let mut summary = AuditSummary::default();

        for manifest in manifests {
            let declarations = read_requirements(&manifest.path)?;
            debug!(
                manifest = %manifest.relative.display(),
                packages = declarations.len(),
                "parsed manifest"
            );

            let mut report = ManifestReport::new(manifest);
            progress.lookups(&report.manifest.app_path(), declarations.len());

            for declaration in declarations {
                progress.looking_up(&declaration.name);
                let latest = self.resolver.latest_version(&declaration.name).await;
                report.add(ResolvedPackage::new(declaration, latest));
                progress.looked_up();
            }
            progress.clear();

            formatter
                .format_manifest(&report, writer)
                .map_err(IoError::from)?;
            summary.record(&report);
        }

        writer.flush().map_err(IoError::from)?;
        info!(
            manifests = summary.manifests,
            packages = summary.packages,
            outdated = summary.outdated,
            failed_lookups = summary.failed_lookups,
            registry = self.resolver.registry_name(),
            "audit complete"
        );

        Ok(AuditOutcome::Completed(summary))
    }
}
