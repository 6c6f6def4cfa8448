pub mod config;
pub mod errors;
pub mod imageops;
pub mod outline;
pub mod progress_tracker;
pub mod traits;

pub mod mocks;

use image::ImageFormat;
use std::path::{Path, PathBuf};
use tracing::warn;

pub use config::{Config, DEFAULT_SUFFIX};
pub use errors::{OutlineError, Result};
pub use outline::{CannyOutliner, OutlineParams};
pub use progress_tracker::ProgressTracker;
pub use traits::*;

/// Names that mark a file as the output of an earlier run.
pub const PROCESSED_MARKERS: [&str; 2] = ["-outline.png", "-template.png"];

/// What happened to each candidate of one batch run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    /// Output files written.
    pub saved: Vec<PathBuf>,
    /// Inputs left alone because they look like earlier outputs.
    pub skipped: Vec<PathBuf>,
    /// Inputs that could not be read, converted, or written.
    pub failed: Vec<PathBuf>,
}

impl BatchSummary {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Whether `name` is an output of a previous run and must not be reprocessed.
pub fn is_already_processed(name: &str) -> bool {
    PROCESSED_MARKERS.iter().any(|marker| name.ends_with(marker))
}

/// Runs an [`EdgeOutliner`] over every PNG of one folder, writing the
/// outlines next to their sources.
pub struct OutlineProcessor<O: EdgeOutliner> {
    outliner: O,
    dir: PathBuf,
    suffix: String,
}

impl<O: EdgeOutliner> OutlineProcessor<O> {
    pub fn new(outliner: O, dir: impl Into<PathBuf>, suffix: impl Into<String>) -> Self {
        Self {
            outliner,
            dir: dir.into(),
            suffix: suffix.into(),
        }
    }

    pub fn from_config(outliner: O, config: &Config) -> Self {
        Self::new(outliner, &config.dir, &config.suffix)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub const fn outliner(&self) -> &O {
        &self.outliner
    }

    /// Processes the folder sequentially. Per-file failures are reported and
    /// skipped; only an unreadable folder is an error.
    pub fn process_directory(&self) -> Result<BatchSummary> {
        let tracker = ProgressTracker::scan(&self.dir)?;
        let mut summary = BatchSummary::default();

        if tracker.image_paths().is_empty() {
            tracker.finish();
            tracker.report(NO_FILES_MESSAGE);
            return Ok(summary);
        }

        for path in tracker.image_paths() {
            let name = file_name(path);
            if is_already_processed(&name) {
                tracker.report(already_processed_message(&name));
                summary.skipped.push(path.clone());
            } else {
                match self.process_file(path, &tracker) {
                    Ok(output) => summary.saved.push(output),
                    Err(e) if e.is_recoverable() => {
                        warn!(path = %path.display(), error = ?e, "skipping file");
                        tracker.report(skip_message(path, &e));
                        summary.failed.push(path.clone());
                    }
                    Err(e) => {
                        tracker.finish();
                        return Err(e);
                    }
                }
            }
            tracker.advance();
        }

        tracker.finish();
        tracker.report(summary_message(&summary));
        Ok(summary)
    }

    /// Reads one image, outlines it and saves `<stem><suffix>.png` in the
    /// target folder, replacing any earlier output.
    pub fn process_single_image(&self, input: &Path) -> Result<PathBuf> {
        self.process_file(input, &ProgressTracker::for_paths(vec![input.to_path_buf()]))
    }

    fn process_file(&self, input: &Path, tracker: &ProgressTracker) -> Result<PathBuf> {
        let img = image::open(input).map_err(|e| OutlineError::Read {
            path: input.to_path_buf(),
            source: e,
        })?;
        tracker.report(processing_message(input));

        let outline = self.outliner.outline(input, &img)?;

        let output = self.output_path(input);
        outline
            .save_with_format(&output, ImageFormat::Png)
            .map_err(|e| OutlineError::Write {
                path: output.clone(),
                source: e,
            })?;
        tracker.report(saved_message(&output));

        Ok(output)
    }

    /// `dir/<input stem><suffix>.png`.
    pub fn output_path(&self, input: &Path) -> PathBuf {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.dir.join(format!("{}{}.png", stem, self.suffix))
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

const NO_FILES_MESSAGE: &str = "No PNG files found in this folder.";

fn already_processed_message(name: &str) -> String {
    format!("Skipping already-processed file: {}", name)
}

fn processing_message(input: &Path) -> String {
    format!("Processing: {}", input.display())
}

fn saved_message(output: &Path) -> String {
    format!("Saved: {}", file_name(output))
}

fn summary_message(summary: &BatchSummary) -> String {
    format!(
        "Done: {} saved, {} skipped, {} failed.",
        summary.saved.len(),
        summary.skipped.len(),
        summary.failed.len()
    )
}

fn skip_message(path: &Path, err: &OutlineError) -> String {
    match err {
        OutlineError::Read { .. } => format!("Could not read {}, skipping.", path.display()),
        OutlineError::UnsupportedChannels { channels, .. } => format!(
            "Unsupported channel count {} in {}, skipping.",
            channels,
            path.display()
        ),
        OutlineError::Write { path: output, .. } => {
            format!("Could not write {}, skipping.", output.display())
        }
        other => format!("Could not process {}: {}, skipping.", path.display(), other),
    }
}
