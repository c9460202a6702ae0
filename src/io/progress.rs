//! Batch progress display for tileset validation

use std::path::Path;
use std::sync::LazyLock;

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;

static FILE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Tilesets: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates progress display for batch validation runs
///
/// Small batches get a single bar tracking the active file's resolution
/// passes; larger batches add an overall tileset counter above it.
pub struct ValidationProgress {
    multi: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bar: ProgressBar,
}

impl ValidationProgress {
    /// Create a progress display for a batch of the given size
    pub fn new(file_count: usize) -> Self {
        let multi = MultiProgress::new();

        let batch_bar = (file_count > MAX_INDIVIDUAL_PROGRESS_BARS).then(|| {
            let bar = ProgressBar::new(file_count as u64);
            bar.set_style(BATCH_STYLE.clone());
            multi.add(bar)
        });

        let file_bar = {
            let bar = ProgressBar::new(0);
            bar.set_style(FILE_STYLE.clone());
            multi.add(bar)
        };

        Self {
            multi,
            batch_bar,
            file_bar,
        }
    }

    /// Point the file bar at a new asset with the given number of passes
    pub fn begin_file(&self, path: &Path, passes: usize) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.file_bar.set_length(passes as u64);
        self.file_bar.set_position(0);
        self.file_bar.set_message(display_name);
    }

    /// Record one completed resolution pass on the active file
    pub fn advance(&self) {
        self.file_bar.inc(1);
    }

    /// Mark the active file as done and update the batch counter
    pub fn complete_file(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All tilesets validated");
        }
        self.file_bar.finish_and_clear();
        let _ = self.multi.clear();
    }
}
