//! Progress display for discovery scans

use std::path::Path;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while walking a project tree
///
/// The message tracks the path currently being visited, so long scans of
/// `_build` trees stay legible.
pub struct ScanProgress {
    spinner: ProgressBar,
}

impl ScanProgress {
    /// Create and start the spinner
    pub fn new() -> Self {
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.cyan} Scanning {wide_msg}")
            .unwrap();

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(style);
        spinner.enable_steady_tick(Duration::from_millis(80));

        Self { spinner }
    }

    /// Update the spinner with the entry currently being visited
    pub fn visit(&self, path: &Path) {
        self.spinner.set_message(path.display().to_string());
    }

    /// Stop the spinner and clear its line
    pub fn finish(&self) {
        self.spinner.finish_and_clear();
    }
}

impl Default for ScanProgress {
    fn default() -> Self {
        Self::new()
    }
}
