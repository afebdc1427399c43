//! Progress display for the audit run
//!
//! Two displays are drawn on stderr with indicatif:
//! - a spinner while the repository is cloned
//! - one bar per manifest while its packages are looked up, prefixed with the
//!   app path and naming the package in flight
//!
//! indicatif hides both when stderr is not a terminal.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const TICK_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

/// Message of the clone spinner
fn clone_message(repo_name: &str) -> String {
    format!("Cloning {} (latest commit only)...", repo_name)
}

/// Message of the lookup bar while `package` is being resolved
fn lookup_message(package: &str) -> String {
    format!("checking {}", package)
}

/// Progress reporter for the audit workflow
pub struct Progress {
    /// Whether progress display is enabled
    enabled: bool,
    /// Display currently on screen
    bar: Option<ProgressBar>,
}

impl Progress {
    /// Create a new progress reporter
    pub fn new(enabled: bool) -> Self {
        Self { enabled, bar: None }
    }

    /// Show the spinner for cloning `repo_name`
    pub fn cloning(&mut self, repo_name: &str) {
        self.clear();
        if !self.enabled {
            return;
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .tick_chars(TICK_CHARS)
                .template("{spinner:.cyan} {msg}")
                .expect("Invalid template"),
        );
        spinner.set_message(clone_message(repo_name));
        spinner.enable_steady_tick(Duration::from_millis(80));
        self.bar = Some(spinner);
    }

    /// Show the bar for the `total` lookups of the manifest at `app_path`
    pub fn lookups(&mut self, app_path: &str, total: usize) {
        self.clear();
        if !self.enabled {
            return;
        }

        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .tick_chars(TICK_CHARS)
                .template("{spinner:.cyan} {prefix:.bold} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
                .expect("Invalid template")
                .progress_chars("█▓▒░"),
        );
        bar.set_prefix(app_path.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        self.bar = Some(bar);
    }

    /// Name the package whose lookup is starting
    pub fn looking_up(&self, package: &str) {
        if let Some(ref bar) = self.bar {
            bar.set_message(lookup_message(package));
        }
    }

    /// Count one finished lookup
    pub fn looked_up(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Remove whatever is on screen
    pub fn clear(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

impl Drop for Progress {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            clone_message("marketplace-apps"),
            "Cloning marketplace-apps (latest commit only)..."
        );
        assert_eq!(lookup_message("flask"), "checking flask");
    }

    #[test]
    fn test_disabled_draws_nothing() {
        let mut progress = Progress::new(false);
        progress.cloning("marketplace-apps");
        assert!(progress.bar.is_none());

        progress.lookups("apps/linode-marketplace-flask", 2);
        progress.looking_up("flask");
        progress.looked_up();
        assert!(progress.bar.is_none());
    }

    #[test]
    fn test_lookup_bar_tracks_manifest() {
        let mut progress = Progress::new(true);
        progress.lookups("apps/linode-marketplace-flask", 2);

        progress.looking_up("flask");
        progress.looked_up();
        progress.looking_up("requests");

        let bar = progress.bar.as_ref().unwrap();
        assert_eq!(bar.prefix(), "apps/linode-marketplace-flask");
        assert_eq!(bar.message(), "checking requests");
        assert_eq!(bar.length(), Some(2));
        assert_eq!(bar.position(), 1);
    }

    #[test]
    fn test_next_manifest_replaces_bar() {
        let mut progress = Progress::new(true);
        progress.cloning("marketplace-apps");
        progress.lookups("apps/a", 3);
        progress.looked_up();
        progress.lookups("apps/b", 1);

        let bar = progress.bar.as_ref().unwrap();
        assert_eq!(bar.prefix(), "apps/b");
        assert_eq!(bar.position(), 0);

        progress.clear();
        assert!(progress.bar.is_none());
    }
}
