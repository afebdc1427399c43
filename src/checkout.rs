//! Shallow checkout of the source repository into a scratch directory
//!
//! This module provides:
//! - The `GitCloner` seam and its system implementation running `git`
//! - The `Checkout` guard owning the scratch directory
//!
//! The scratch directory lives exactly as long as the guard. Dropping it,
//! whether after a normal run, an error or an interrupted future, removes the
//! directory and everything cloned into it.

use crate::error::CheckoutError;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tempfile::TempDir;
use tokio::process::Command;
use tracing::debug;

/// Repository audited by the tool
pub const REPO_URL: &str = "https://github.com/akamai-compute-marketplace/marketplace-apps.git";

/// Directory name of the clone inside the scratch directory
pub const REPO_NAME: &str = "marketplace-apps";

/// Trait for producing a shallow clone of a repository
#[async_trait]
pub trait GitCloner: Send + Sync {
    /// Clone the latest commit of the default branch of `url` into `dest`
    async fn clone_shallow(&self, url: &str, dest: &Path) -> Result<(), CheckoutError>;
}

/// Cloner that runs the `git` executable
#[derive(Debug, Default)]
pub struct SystemGit;

impl SystemGit {
    /// Create a new system git cloner
    pub fn new() -> Self {
        Self
    }

    fn clone_args(url: &str, dest: &Path) -> Vec<std::ffi::OsString> {
        vec![
            "clone".into(),
            "--depth".into(),
            "1".into(),
            "--single-branch".into(),
            "--no-tags".into(),
            "--quiet".into(),
            url.into(),
            dest.as_os_str().to_owned(),
        ]
    }
}

#[async_trait]
impl GitCloner for SystemGit {
    async fn clone_shallow(&self, url: &str, dest: &Path) -> Result<(), CheckoutError> {
        let output = Command::new("git")
            .args(Self::clone_args(url, dest))
            .env("GIT_TERMINAL_PROMPT", "0")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| CheckoutError::GitUnavailable { source })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(CheckoutError::clone_failed(
                url,
                output.status.to_string(),
                stderr,
            ));
        }

        Ok(())
    }
}

/// A cloned working tree inside a scratch directory it owns
#[derive(Debug)]
pub struct Checkout {
    repo_path: PathBuf,
    scratch: TempDir,
}

impl Checkout {
    /// Create a scratch directory and clone `url` into it
    ///
    /// On failure the scratch directory is removed before the error is
    /// returned.
    pub async fn acquire(cloner: &dyn GitCloner, url: &str) -> Result<Self, CheckoutError> {
        let scratch = tempfile::Builder::new()
            .prefix("pinaudit-")
            .tempdir()
            .map_err(|source| CheckoutError::ScratchDir { source })?;
        let repo_path = scratch.path().join(REPO_NAME);

        debug!(url, dest = %repo_path.display(), "cloning repository");
        cloner.clone_shallow(url, &repo_path).await?;

        Ok(Self { repo_path, scratch })
    }

    /// Root of the cloned working tree
    pub fn path(&self) -> &Path {
        &self.repo_path
    }
}

impl Drop for Checkout {
    fn drop(&mut self) {
        debug!(path = %self.scratch.path().display(), "removing scratch directory");
    }
}
