//! Copy progress display for gap-fill runs

use crate::io::configuration::MIN_PROGRESS_COPIES;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static COPY_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress display for the copy loop
///
/// Stays silent for small plans to avoid terminal noise; fills with many
/// copies get a single bar advanced per written file.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl ProgressManager {
    /// Create a progress manager sized to the planned copy count
    pub fn new(copy_count: usize) -> Self {
        let bar = (copy_count >= MIN_PROGRESS_COPIES).then(|| {
            let bar = ProgressBar::new(copy_count as u64);
            bar.set_style(COPY_STYLE.clone());
            bar
        });
        Self { bar }
    }

    /// Show the target currently being written
    pub fn start_copy(&self, target: &Path) {
        if let Some(ref bar) = self.bar {
            let display_name = target
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            bar.set_message(display_name);
        }
    }

    /// Advance the bar past a completed copy
    pub fn complete_copy(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Clear the progress display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
