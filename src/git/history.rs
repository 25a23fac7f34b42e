//! Git history extraction using libgit2
//!
//! Produces the chronological commit sequence with per-commit diff
//! statistics. Access goes through the [`HistorySource`] trait so a
//! log-parsing backend could replace the libgit2 one without touching
//! the correlator.

use chrono::{DateTime, Utc};
use git2::{DiffOptions, Repository, Sort};
use std::path::Path;
use tracing::{debug, warn};

use crate::errors::CostwiseError;
use crate::models::CommitRecord;

/// Capability interface: given a repository, produce its commit
/// history in chronological ascending order.
pub trait HistorySource {
    /// Extract the full commit sequence. An empty history is a valid,
    /// non-fatal outcome (`Ok(vec![])`).
    fn commits(&self) -> Result<Vec<CommitRecord>, CostwiseError>;
}

/// libgit2-backed history source.
pub struct GitHistory {
    repo: Repository,
}

impl GitHistory {
    /// Open the repository containing `path`.
    ///
    /// Fails with [`CostwiseError::NotAGitRepository`] when no
    /// version-control metadata is found.
    pub fn open(path: &Path) -> Result<Self, CostwiseError> {
        let repo = Repository::discover(path)
            .map_err(|_| CostwiseError::NotAGitRepository(path.to_path_buf()))?;
        debug!("Opened git repository at {:?}", repo.path());
        Ok(Self { repo })
    }

    /// Check if a path is inside a git repository.
    pub fn is_git_repo(path: &Path) -> bool {
        Repository::discover(path).is_ok()
    }

    /// Extract one commit's record, diffing against its first parent
    /// (or the empty tree for root commits, so an initial commit
    /// counts every line it introduced as an insertion).
    fn extract_record(&self, commit: &git2::Commit) -> Result<CommitRecord, git2::Error> {
        let author = commit.author();
        let message = commit
            .message()
            .unwrap_or("")
            .lines()
            .next()
            .unwrap_or("")
            .to_string();

        let parent = commit.parent(0).ok();
        let tree = commit.tree()?;
        let parent_tree = parent.as_ref().map(|p| p.tree()).transpose()?;

        let mut diff_opts = DiffOptions::new();
        diff_opts.include_untracked(false);
        let diff = self.repo.diff_tree_to_tree(
            parent_tree.as_ref(),
            Some(&tree),
            Some(&mut diff_opts),
        )?;
        let stats = diff.stats()?;

        Ok(CommitRecord {
            hash: commit.id().to_string(),
            author: author.name().unwrap_or("Unknown").to_string(),
            author_email: author.email().unwrap_or("").to_string(),
            timestamp: commit_time(commit),
            message,
            files_changed: stats.files_changed(),
            insertions: stats.insertions(),
            deletions: stats.deletions(),
        })
    }
}

impl HistorySource for GitHistory {
    fn commits(&self) -> Result<Vec<CommitRecord>, CostwiseError> {
        // An unborn HEAD (fresh `git init`) means zero commits, which
        // downstream handles by omitting git-derived output.
        if self.repo.head().is_err() {
            debug!("Repository has no commits yet");
            return Ok(Vec::new());
        }

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TIME | Sort::REVERSE)?;
        revwalk.push_head()?;

        let mut commits = Vec::new();
        for oid_result in revwalk {
            let oid = match oid_result {
                Ok(oid) => oid,
                Err(e) => {
                    warn!("Skipping unreadable revwalk entry: {}", e);
                    continue;
                }
            };

            let commit = match self.repo.find_commit(oid) {
                Ok(commit) => commit,
                Err(e) => {
                    warn!("Skipping commit {}: {}", oid, e);
                    continue;
                }
            };

            match self.extract_record(&commit) {
                Ok(record) => commits.push(record),
                Err(e) => {
                    warn!("Skipping commit {} with broken diff: {}", oid, e);
                }
            }
        }

        debug!("Extracted {} commits", commits.len());
        Ok(commits)
    }
}

/// Commit timestamp as UTC; falls back to the epoch for timestamps
/// libgit2 cannot represent.
fn commit_time(commit: &git2::Commit) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(commit.time().seconds(), 0)
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}
