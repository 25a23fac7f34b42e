//! Core data models for costwise
//!
//! These are the stable structures the pipeline produces and the
//! reporters consume: per-file line counts, project-wide aggregates,
//! COCOMO II estimates, git history metrics, and the integrated
//! velocity/productivity indicators.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Line counts for a single scanned file.
///
/// Invariant: `total_lines == code_lines + comment_lines + blank_lines`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRecord {
    pub path: PathBuf,
    /// Detected language name, or "Other" for unmapped extensions
    pub language: String,
    pub total_lines: usize,
    pub code_lines: usize,
    pub comment_lines: usize,
    pub blank_lines: usize,
}

/// Project-wide line metrics aggregated over all scanned files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectMetrics {
    pub files_count: usize,
    pub total_lines: usize,
    pub code_lines: usize,
    pub comment_lines: usize,
    pub blank_lines: usize,
    /// Code lines per language; values sum to `code_lines`
    pub languages: HashMap<String, usize>,
}

impl ProjectMetrics {
    /// Fold one file into the totals. Addition is commutative, so the
    /// reduction is order-independent.
    pub fn add_file(&mut self, record: &FileRecord) {
        self.files_count += 1;
        self.total_lines += record.total_lines;
        self.code_lines += record.code_lines;
        self.comment_lines += record.comment_lines;
        self.blank_lines += record.blank_lines;
        *self.languages.entry(record.language.clone()).or_insert(0) += record.code_lines;
    }

    /// Share of total code lines for one language, in percent.
    /// Defined as 0 when the project has no code lines.
    pub fn language_percentage(&self, language: &str) -> f64 {
        if self.code_lines == 0 {
            return 0.0;
        }
        let lines = self.languages.get(language).copied().unwrap_or(0);
        lines as f64 / self.code_lines as f64 * 100.0
    }

    /// Languages sorted by code lines, descending.
    pub fn languages_ranked(&self) -> Vec<(String, usize)> {
        let mut ranked: Vec<(String, usize)> = self
            .languages
            .iter()
            .map(|(name, lines)| (name.clone(), *lines))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked
    }
}

/// COCOMO II complexity tier, selected by fixed KLOC thresholds.
/// Serialized names match the `Display` rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplexityTier {
    Organic,
    #[serde(rename = "Semi-detached")]
    SemiDetached,
    Embedded,
}

impl std::fmt::Display for ComplexityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComplexityTier::Organic => write!(f, "Organic"),
            ComplexityTier::SemiDetached => write!(f, "Semi-detached"),
            ComplexityTier::Embedded => write!(f, "Embedded"),
        }
    }
}

/// Result of the COCOMO II cost model.
///
/// Derived entirely from [`ProjectMetrics`] plus the monthly salary;
/// recomputed fresh on every analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CocomoEstimate {
    pub kloc: f64,
    pub effort_person_months: f64,
    pub time_months: f64,
    pub people_required: f64,
    pub maintenance_people: f64,
    pub expansion_people: f64,
    /// Code lines per person-month (0 when effort is 0)
    pub productivity: f64,
    pub cost_estimate: f64,
    pub complexity_level: ComplexityTier,
}

/// One commit extracted from history. Sequences are chronological
/// ascending and immutable once extracted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitRecord {
    pub hash: String,
    pub author: String,
    pub author_email: String,
    pub timestamp: DateTime<Utc>,
    /// First line of the commit message
    pub message: String,
    pub files_changed: usize,
    pub insertions: usize,
    pub deletions: usize,
}

impl CommitRecord {
    /// Churn contributed by this commit.
    pub fn total_changes(&self) -> usize {
        self.insertions + self.deletions
    }
}

/// Aggregated metrics over a repository's commit history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitMetrics {
    pub total_commits: usize,
    pub total_authors: usize,
    /// Commit count per author name
    pub authors_commits: HashMap<String, usize>,
    pub total_insertions: usize,
    pub total_deletions: usize,
    pub avg_changes_per_commit: f64,
    pub avg_files_per_commit: f64,
    pub commits_per_day: f64,
    pub first_commit_date: DateTime<Utc>,
    pub last_commit_date: DateTime<Utc>,
    /// Whole days between first and last commit, floored at 0.
    /// Divisions downstream use `max(repository_age_days, 1)`.
    pub repository_age_days: i64,
    /// Authors ranked by commit count, ties broken by first
    /// appearance in history
    pub top_authors: Vec<(String, usize)>,
}

/// Indicators combining the COCOMO estimate with git history.
/// Only produced when the history has at least one commit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegratedMetrics {
    pub lines_per_commit: f64,
    /// Commits it would take to rebuild the codebase at the current
    /// commit granularity
    pub commits_needed_to_rebuild: f64,
    pub commits_per_month: f64,
    /// Lines per day realized over the repository's lifetime
    pub actual_velocity: f64,
    /// Lines per day the cost model predicts for the estimated schedule
    pub estimated_velocity: f64,
    /// actual / estimated; absent when the estimated velocity is 0
    #[serde(skip_serializing_if = "Option::is_none")]
    pub velocity_ratio: Option<f64>,
    /// Surviving code vs total churn, in percent. May exceed 100 when
    /// history undercounts deletions; not clamped.
    pub commit_efficiency: f64,
    pub change_percentage_per_commit: f64,
    /// Composite score in [0, 100]
    pub developer_productivity_score: f64,
}

/// Everything one analysis run produces.
///
/// `git` is None when the target is not a repository; `integrated` is
/// None whenever `git` is (or the history is empty).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisBundle {
    pub metrics: ProjectMetrics,
    pub cocomo: CocomoEstimate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git: Option<GitMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integrated: Option<IntegratedMetrics>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(language: &str, code: usize, comment: usize, blank: usize) -> FileRecord {
        FileRecord {
            path: PathBuf::from("x"),
            language: language.to_string(),
            total_lines: code + comment + blank,
            code_lines: code,
            comment_lines: comment,
            blank_lines: blank,
        }
    }

    #[test]
    fn aggregation_is_order_independent() {
        let records = vec![
            record("Rust", 100, 20, 10),
            record("Python", 50, 5, 5),
            record("Rust", 30, 0, 2),
        ];

        let mut forward = ProjectMetrics::default();
        for r in &records {
            forward.add_file(r);
        }
        let mut backward = ProjectMetrics::default();
        for r in records.iter().rev() {
            backward.add_file(r);
        }

        assert_eq!(forward.code_lines, backward.code_lines);
        assert_eq!(forward.total_lines, backward.total_lines);
        assert_eq!(forward.languages, backward.languages);
    }

    #[test]
    fn language_lines_sum_to_code_lines() {
        let mut metrics = ProjectMetrics::default();
        metrics.add_file(&record("Rust", 100, 20, 10));
        metrics.add_file(&record("Python", 50, 5, 5));
        metrics.add_file(&record("Other", 7, 0, 1));

        let sum: usize = metrics.languages.values().sum();
        assert_eq!(sum, metrics.code_lines);
    }

    #[test]
    fn percentage_is_zero_for_empty_project() {
        let metrics = ProjectMetrics::default();
        assert_eq!(metrics.language_percentage("Rust"), 0.0);
    }

    #[test]
    fn percentage_of_total_code() {
        let mut metrics = ProjectMetrics::default();
        metrics.add_file(&record("Rust", 75, 0, 0));
        metrics.add_file(&record("Python", 25, 0, 0));
        assert_eq!(metrics.language_percentage("Rust"), 75.0);
        assert_eq!(metrics.language_percentage("Python"), 25.0);
        assert_eq!(metrics.language_percentage("Go"), 0.0);
    }

    #[test]
    fn tier_display_names() {
        assert_eq!(ComplexityTier::Organic.to_string(), "Organic");
        assert_eq!(ComplexityTier::SemiDetached.to_string(), "Semi-detached");
        assert_eq!(ComplexityTier::Embedded.to_string(), "Embedded");
    }

    #[test]
    fn tier_serializes_like_display() {
        for tier in [
            ComplexityTier::Organic,
            ComplexityTier::SemiDetached,
            ComplexityTier::Embedded,
        ] {
            let json = serde_json::to_value(tier).expect("serialize");
            assert_eq!(json, serde_json::Value::String(tier.to_string()));
            let back: ComplexityTier = serde_json::from_value(json).expect("deserialize");
            assert_eq!(back, tier);
        }
    }
}
