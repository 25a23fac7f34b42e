//! Code metrics extraction
//!
//! Walks the source tree, classifies every surviving file line by
//! line, and reduces the per-file records into project-wide totals.
//! The reduction is order-independent, so file order never affects
//! the outcome.

pub mod classify;
pub mod languages;
pub mod walker;

pub use classify::classify_file;
pub use languages::{descriptor_for_extension, LanguageDescriptor, LANGUAGES, OTHER_LANGUAGE};
pub use walker::SourceWalker;

use anyhow::Result;
use std::path::Path;
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::models::ProjectMetrics;

/// Scan a project directory into [`ProjectMetrics`].
///
/// A project with no countable files yields a valid all-zero result;
/// the caller decides how to report it.
pub fn scan_project(root: &Path, config: &AnalysisConfig) -> Result<ProjectMetrics> {
    let walker = SourceWalker::new(root, &config.exclude_patterns)?;

    let mut metrics = ProjectMetrics::default();
    for path in walker.files() {
        // Unreadable files are dropped; empty ones still count.
        if let Some(record) = classify_file(&path) {
            metrics.add_file(&record);
        }
    }

    debug!(
        "Scanned {} files: {} code / {} comment / {} blank lines",
        metrics.files_count, metrics.code_lines, metrics.comment_lines, metrics.blank_lines
    );

    Ok(metrics)
}
