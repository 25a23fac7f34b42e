//! Analysis pipeline
//!
//! Orchestrates one full analysis run:
//! 1. Validate the target path
//! 2. Scan the source tree and compute the COCOMO II estimate
//! 3. Extract git history and reduce it (tolerated to fail)
//! 4. Correlate both paths into integrated metrics
//!
//! The git path failing — no repository, or an empty history — never
//! fails the run; the bundle simply omits the git-derived sections.

use anyhow::Result;
use std::path::Path;
use tracing::{debug, info};

use crate::cocomo;
use crate::config::AnalysisConfig;
use crate::correlate;
use crate::errors::CostwiseError;
use crate::git::{GitHistory, HistorySource};
use crate::models::{AnalysisBundle, GitMetrics};
use crate::scan;

/// One configured analysis run.
pub struct Analyzer {
    config: AnalysisConfig,
    /// Whether to attempt the git-history path
    enable_git: bool,
}

impl Analyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config,
            enable_git: true,
        }
    }

    /// Skip the git-history path entirely.
    pub fn without_git(mut self) -> Self {
        self.enable_git = false;
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Run the full analysis against `root`.
    pub fn analyze(&self, root: &Path) -> Result<AnalysisBundle> {
        if !root.exists() {
            return Err(CostwiseError::PathNotFound(root.to_path_buf()).into());
        }
        if !root.is_dir() {
            return Err(CostwiseError::NotADirectory(root.to_path_buf()).into());
        }

        let metrics = scan::scan_project(root, &self.config)?;
        if metrics.files_count == 0 {
            info!("No code files found under {:?}", root);
        }
        let cocomo = cocomo::estimate(&metrics, &self.config)?;

        let git = if self.enable_git {
            self.git_metrics(root)
        } else {
            None
        };

        let integrated = git
            .as_ref()
            .and_then(|g| correlate::integrate(&metrics, &cocomo, g));

        Ok(AnalysisBundle {
            metrics,
            cocomo,
            git,
            integrated,
        })
    }

    /// Extract and reduce git history; any failure here is demoted to
    /// a debug log and an absent result.
    fn git_metrics(&self, root: &Path) -> Option<GitMetrics> {
        let history = match GitHistory::open(root) {
            Ok(history) => history,
            Err(e) => {
                debug!("Git path skipped: {}", e);
                return None;
            }
        };
        match history.commits() {
            Ok(commits) => GitMetrics::from_commits(&commits),
            Err(e) => {
                debug!("Git history extraction failed: {}", e);
                None
            }
        }
    }
}
