//! Productivity correlator
//!
//! Combines the COCOMO estimate with git history metrics into the
//! integrated velocity/efficiency indicators and the composite
//! developer productivity score.
//!
//! The score is 50 base points plus three capped, monotonically
//! increasing sub-scores, clamped to [0, 100]. The piecewise-linear
//! knots interpolate the documented interpretation bands
//! (velocity ratio 0.8/1.2, efficiency 30%/50%); see DESIGN.md.

use crate::models::{CocomoEstimate, ComplexityTier, GitMetrics, IntegratedMetrics, ProjectMetrics};

/// Base score before any sub-score is added.
const BASE_SCORE: f64 = 50.0;
/// Cap for the velocity-ratio sub-score.
const MAX_VELOCITY_POINTS: f64 = 25.0;
/// Cap for the commit-efficiency sub-score.
const MAX_EFFICIENCY_POINTS: f64 = 15.0;
/// Days per month used when converting the estimated schedule to a
/// daily velocity.
const DAYS_PER_MONTH: f64 = 30.0;

/// Derive [`IntegratedMetrics`] from both analysis paths.
///
/// Returns None when the history has no commits; every indicator here
/// would otherwise divide by zero or report noise as fact.
pub fn integrate(
    metrics: &ProjectMetrics,
    cocomo: &CocomoEstimate,
    git: &GitMetrics,
) -> Option<IntegratedMetrics> {
    if git.total_commits == 0 {
        return None;
    }

    let code_lines = metrics.code_lines as f64;
    let age_days = git.repository_age_days.max(1) as f64;

    let lines_per_commit = code_lines / git.total_commits as f64;
    // At the current commit granularity, rebuilding the codebase takes
    // exactly the commits that built it.
    let commits_needed_to_rebuild = git.total_commits as f64;
    let commits_per_month = git.total_commits as f64 / (age_days / DAYS_PER_MONTH);

    let actual_velocity = code_lines / age_days;
    let estimated_velocity = if cocomo.time_months > 0.0 {
        code_lines / (cocomo.time_months * DAYS_PER_MONTH)
    } else {
        0.0
    };
    let velocity_ratio = if estimated_velocity > 0.0 {
        Some(actual_velocity / estimated_velocity)
    } else {
        None
    };

    let total_churn = (git.total_insertions + git.total_deletions) as f64;
    let commit_efficiency = if total_churn > 0.0 {
        code_lines / total_churn * 100.0
    } else {
        0.0
    };

    let change_percentage_per_commit = if code_lines > 0.0 {
        git.avg_changes_per_commit / code_lines * 100.0
    } else {
        0.0
    };

    let score = productivity_score(
        velocity_ratio.unwrap_or(0.0),
        commit_efficiency,
        cocomo.complexity_level,
    );

    Some(IntegratedMetrics {
        lines_per_commit,
        commits_needed_to_rebuild,
        commits_per_month,
        actual_velocity,
        estimated_velocity,
        velocity_ratio,
        commit_efficiency,
        change_percentage_per_commit,
        developer_productivity_score: score,
    })
}

/// Composite score in [0, 100].
fn productivity_score(velocity_ratio: f64, commit_efficiency: f64, tier: ComplexityTier) -> f64 {
    let total = BASE_SCORE
        + velocity_points(velocity_ratio)
        + efficiency_points(commit_efficiency)
        + complexity_points(tier);
    total.clamp(0.0, 100.0)
}

/// Velocity sub-score, capped at 25 points.
/// Knots: (0, 0) → (0.8, 5) → (1.2, 20) → (2.0, 25).
fn velocity_points(ratio: f64) -> f64 {
    piecewise(ratio, &[(0.0, 0.0), (0.8, 5.0), (1.2, 20.0), (2.0, MAX_VELOCITY_POINTS)])
}

/// Efficiency sub-score, capped at 15 points. Input is a percentage.
/// Knots: (0, 0) → (30, 3) → (50, 12) → (100, 15).
fn efficiency_points(efficiency: f64) -> f64 {
    piecewise(
        efficiency,
        &[(0.0, 0.0), (30.0, 3.0), (50.0, 12.0), (100.0, MAX_EFFICIENCY_POINTS)],
    )
}

/// Higher tiers earn more points: sustaining velocity on a complex
/// project is worth more than on a small one.
fn complexity_points(tier: ComplexityTier) -> f64 {
    match tier {
        ComplexityTier::Organic => 0.0,
        ComplexityTier::SemiDetached => 5.0,
        ComplexityTier::Embedded => 10.0,
    }
}

/// Monotonic piecewise-linear interpolation over ascending knots,
/// clamped to the first/last knot values outside the range.
fn piecewise(x: f64, knots: &[(f64, f64)]) -> f64 {
    let (first_x, first_y) = knots[0];
    if x <= first_x {
        return first_y;
    }
    for pair in knots.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if x <= x1 {
            return y0 + (y1 - y0) * (x - x0) / (x1 - x0);
        }
    }
    knots[knots.len() - 1].1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cocomo;
    use crate::config::AnalysisConfig;
    use crate::models::CommitRecord;
    use chrono::{DateTime, Duration, Utc};

    fn project(code_lines: usize) -> ProjectMetrics {
        let mut metrics = ProjectMetrics::default();
        metrics.files_count = 10;
        metrics.total_lines = code_lines;
        metrics.code_lines = code_lines;
        metrics.languages.insert("Rust".to_string(), code_lines);
        metrics
    }

    fn history(commit_count: usize, insertions_each: usize, span_days: i64) -> GitMetrics {
        let base = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).expect("timestamp");
        let commits: Vec<CommitRecord> = (0..commit_count)
            .map(|i| CommitRecord {
                hash: i.to_string(),
                author: "Alice".to_string(),
                author_email: "alice@example.com".to_string(),
                timestamp: base
                    + Duration::days(span_days * i as i64 / commit_count.max(2) as i64),
                message: String::new(),
                files_changed: 1,
                insertions: insertions_each,
                deletions: 0,
            })
            .collect();
        GitMetrics::from_commits(&commits).expect("metrics")
    }

    fn estimate(metrics: &ProjectMetrics) -> CocomoEstimate {
        cocomo::estimate(metrics, &AnalysisConfig::default()).expect("estimate")
    }

    #[test]
    fn lines_per_commit_and_rebuild_count() {
        let metrics = project(1000);
        let git = history(10, 100, 100);
        let integrated = integrate(&metrics, &estimate(&metrics), &git).expect("integrated");

        assert!((integrated.lines_per_commit - 100.0).abs() < 1e-9);
        assert_eq!(integrated.commits_needed_to_rebuild, 10.0);
    }

    #[test]
    fn velocity_ratio_is_one_when_velocities_match() {
        let metrics = project(9000);
        let cocomo = estimate(&metrics);

        // Construct a history whose age reproduces the estimated
        // schedule exactly.
        let span_days = (cocomo.time_months * DAYS_PER_MONTH).round() as i64;
        let base = DateTime::<Utc>::from_timestamp(1_600_000_000, 0).expect("timestamp");
        let commits = vec![
            CommitRecord {
                hash: "a".into(),
                author: "Alice".into(),
                author_email: "a@example.com".into(),
                timestamp: base,
                message: String::new(),
                files_changed: 1,
                insertions: 9000,
                deletions: 0,
            },
            CommitRecord {
                hash: "b".into(),
                author: "Alice".into(),
                author_email: "a@example.com".into(),
                timestamp: base + Duration::days(span_days),
                message: String::new(),
                files_changed: 1,
                insertions: 1,
                deletions: 0,
            },
        ];
        let git = GitMetrics::from_commits(&commits).expect("metrics");

        let actual = metrics.code_lines as f64 / span_days as f64;
        let estimated = metrics.code_lines as f64 / (cocomo.time_months * DAYS_PER_MONTH);
        let integrated = integrate(&metrics, &cocomo, &git).expect("integrated");

        let expected = actual / estimated;
        let ratio = integrated.velocity_ratio.expect("ratio");
        assert!((ratio - expected).abs() < 1e-12);
        // With the age rounded to the schedule, the ratio is ~1.
        assert!((ratio - 1.0).abs() < 0.05);
    }

    #[test]
    fn zero_commits_yields_none() {
        let metrics = project(1000);
        let cocomo = estimate(&metrics);
        let git = GitMetrics {
            total_commits: 0,
            ..history(1, 1, 1)
        };
        assert!(integrate(&metrics, &cocomo, &git).is_none());
    }

    #[test]
    fn single_commit_repository_is_scored_in_bounds() {
        // Scenario: one commit inserting every current line, age 0.
        let metrics = project(5000);
        let git = history(1, 5000, 0);
        let integrated = integrate(&metrics, &estimate(&metrics), &git).expect("integrated");

        assert_eq!(git.repository_age_days, 0);
        // Age floored to 1 day for velocity math.
        assert!((integrated.actual_velocity - 5000.0).abs() < 1e-9);
        assert!((0.0..=100.0).contains(&integrated.developer_productivity_score));
        // All churn survived as code.
        assert!((integrated.commit_efficiency - 100.0).abs() < 1e-9);
    }

    #[test]
    fn commit_efficiency_reflects_churn() {
        let metrics = project(1000);
        // 10 commits x 300 insertions = 3000 churned lines for 1000
        // surviving ones.
        let git = history(10, 300, 30);
        let integrated = integrate(&metrics, &estimate(&metrics), &git).expect("integrated");
        assert!((integrated.commit_efficiency - 33.333_333).abs() < 1e-3);
    }

    #[test]
    fn velocity_points_follow_the_bands() {
        assert_eq!(velocity_points(0.0), 0.0);
        assert!(velocity_points(0.5) < 5.0);
        assert_eq!(velocity_points(0.8), 5.0);
        assert_eq!(velocity_points(1.2), 20.0);
        assert!(velocity_points(1.5) > 20.0);
        assert_eq!(velocity_points(2.0), MAX_VELOCITY_POINTS);
        assert_eq!(velocity_points(10.0), MAX_VELOCITY_POINTS);
    }

    #[test]
    fn efficiency_points_follow_the_bands() {
        assert_eq!(efficiency_points(0.0), 0.0);
        assert!(efficiency_points(20.0) < 3.0);
        assert_eq!(efficiency_points(30.0), 3.0);
        assert_eq!(efficiency_points(50.0), 12.0);
        assert_eq!(efficiency_points(100.0), MAX_EFFICIENCY_POINTS);
        assert_eq!(efficiency_points(250.0), MAX_EFFICIENCY_POINTS);
    }

    #[test]
    fn sub_scores_are_monotonic() {
        let mut last = -1.0;
        for i in 0..=40 {
            let v = velocity_points(i as f64 * 0.1);
            assert!(v >= last);
            last = v;
        }
        let mut last = -1.0;
        for i in 0..=30 {
            let e = efficiency_points(i as f64 * 5.0);
            assert!(e >= last);
            last = e;
        }
        assert!(complexity_points(ComplexityTier::Organic)
            < complexity_points(ComplexityTier::SemiDetached));
        assert!(complexity_points(ComplexityTier::SemiDetached)
            < complexity_points(ComplexityTier::Embedded));
    }

    #[test]
    fn score_is_clamped_to_valid_range() {
        for ratio in [0.0, 0.5, 1.0, 2.0, 50.0] {
            for efficiency in [0.0, 25.0, 60.0, 150.0] {
                for tier in [
                    ComplexityTier::Organic,
                    ComplexityTier::SemiDetached,
                    ComplexityTier::Embedded,
                ] {
                    let score = productivity_score(ratio, efficiency, tier);
                    assert!((0.0..=100.0).contains(&score));
                }
            }
        }
    }
}
