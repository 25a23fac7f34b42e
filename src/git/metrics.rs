//! Reduction of commit history into repository metrics

use std::collections::HashMap;

use crate::models::{CommitRecord, GitMetrics};

/// Number of contributors kept in the ranking.
const TOP_AUTHORS: usize = 10;

impl GitMetrics {
    /// Reduce a chronological commit sequence into repository metrics.
    ///
    /// Returns None for an empty history so downstream components omit
    /// git-derived output instead of reporting zeros as facts.
    pub fn from_commits(commits: &[CommitRecord]) -> Option<GitMetrics> {
        let (first, last) = (commits.first()?, commits.last()?);

        let total_commits = commits.len();
        let mut authors_commits: HashMap<String, usize> = HashMap::new();
        let mut first_seen: Vec<String> = Vec::new();
        let mut total_insertions = 0;
        let mut total_deletions = 0;
        let mut total_files = 0;
        let mut total_changes = 0;

        for commit in commits {
            let count = authors_commits.entry(commit.author.clone()).or_insert(0);
            if *count == 0 {
                first_seen.push(commit.author.clone());
            }
            *count += 1;
            total_insertions += commit.insertions;
            total_deletions += commit.deletions;
            total_files += commit.files_changed;
            total_changes += commit.total_changes();
        }

        // Whole days between first and last commit. A same-day history
        // has age 0; every division below guards with max(age, 1).
        let repository_age_days = (last.timestamp - first.timestamp).num_days().max(0);
        let age_for_division = repository_age_days.max(1) as f64;

        // Rank by commit count; ties keep first appearance in history.
        let mut top_authors: Vec<(String, usize)> = first_seen
            .iter()
            .map(|author| (author.clone(), authors_commits[author]))
            .collect();
        top_authors.sort_by(|a, b| b.1.cmp(&a.1));
        top_authors.truncate(TOP_AUTHORS);

        Some(GitMetrics {
            total_commits,
            total_authors: authors_commits.len(),
            authors_commits,
            total_insertions,
            total_deletions,
            avg_changes_per_commit: total_changes as f64 / total_commits as f64,
            avg_files_per_commit: total_files as f64 / total_commits as f64,
            commits_per_day: total_commits as f64 / age_for_division,
            first_commit_date: first.timestamp,
            last_commit_date: last.timestamp,
            repository_age_days,
            top_authors,
        })
    }
}
