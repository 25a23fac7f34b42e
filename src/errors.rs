//! Error types for costwise analyses
//!
//! File-level and per-commit anomalies are absorbed where they occur
//! (logged, counted as zero); only path-level and repository-level
//! problems surface as errors. A failed git path must never take the
//! COCOMO path down with it — callers match on `NotAGitRepository` and
//! continue without history-derived output.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort an analysis path.
#[derive(Debug, Error)]
pub enum CostwiseError {
    /// The target path does not exist. Fatal to the whole analysis.
    #[error("path not found: {0}")]
    PathNotFound(PathBuf),

    /// The target path exists but is not a directory. Fatal.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// No version-control metadata under the target. Fatal only to the
    /// git-derived path.
    #[error("not a git repository: {0}")]
    NotAGitRepository(PathBuf),

    /// Monthly salary must be a finite, strictly positive number.
    #[error("invalid monthly salary {0}: must be a positive, finite number")]
    InvalidSalary(f64),

    /// Underlying libgit2 failure while reading history.
    #[error("git error: {0}")]
    Git(#[from] git2::Error),
}
