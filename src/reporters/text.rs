//! Text (terminal) reporter with colors and formatting

use crate::models::{AnalysisBundle, ComplexityTier, GitMetrics, IntegratedMetrics};
use anyhow::Result;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";

fn score_color(score: f64) -> &'static str {
    if score >= 75.0 {
        GREEN
    } else if score >= 50.0 {
        YELLOW
    } else {
        RED
    }
}

fn tier_color(tier: ComplexityTier) -> &'static str {
    match tier {
        ComplexityTier::Organic => GREEN,
        ComplexityTier::SemiDetached => YELLOW,
        ComplexityTier::Embedded => RED,
    }
}

/// Render the analysis bundle as formatted terminal output.
pub fn render(bundle: &AnalysisBundle) -> Result<String> {
    let mut out = String::new();

    out.push_str(&format!("\n{BOLD}Costwise Analysis{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));

    let m = &bundle.metrics;
    out.push_str(&format!("{BOLD}CODE{RESET}\n"));
    out.push_str(&format!(
        "  Files: {}  Lines: {}  Code: {}  Comments: {}  Blank: {}\n",
        m.files_count, m.total_lines, m.code_lines, m.comment_lines, m.blank_lines
    ));

    if !m.languages.is_empty() {
        out.push_str(&format!("\n{BOLD}LANGUAGES{RESET}\n"));
        for (language, lines) in m.languages_ranked() {
            out.push_str(&format!(
                "  {:<12} {:>9} lines  {:>5.1}%\n",
                language,
                lines,
                m.language_percentage(&language)
            ));
        }
    }

    let c = &bundle.cocomo;
    let tc = tier_color(c.complexity_level);
    out.push_str(&format!("\n{BOLD}COCOMO II{RESET}\n"));
    out.push_str(&format!(
        "  KLOC: {:.2}  Complexity: {tc}{}{RESET}\n",
        c.kloc, c.complexity_level
    ));
    out.push_str(&format!(
        "  Effort: {:.2} person-months  Schedule: {:.2} months\n",
        c.effort_person_months, c.time_months
    ));
    out.push_str(&format!(
        "  Team: {:.2}  Maintenance: {:.2}  Expansion: {:.2}\n",
        c.people_required, c.maintenance_people, c.expansion_people
    ));
    out.push_str(&format!(
        "  Productivity: {:.0} lines/person-month  Cost: {:.2}\n",
        c.productivity, c.cost_estimate
    ));

    if let Some(git) = &bundle.git {
        out.push_str(&render_git(git));
    } else {
        out.push_str(&format!(
            "\n{DIM}No git history available; velocity correlation skipped.{RESET}\n"
        ));
    }

    if let Some(integrated) = &bundle.integrated {
        out.push_str(&render_integrated(integrated));
        out.push_str(&render_insights(integrated));
    }

    Ok(out)
}

fn render_git(git: &GitMetrics) -> String {
    let mut out = String::new();

    out.push_str(&format!("\n{BOLD}GIT HISTORY{RESET}\n"));
    out.push_str(&format!(
        "  Commits: {}  Authors: {}  Age: {} days  Cadence: {:.2}/day\n",
        git.total_commits, git.total_authors, git.repository_age_days, git.commits_per_day
    ));
    out.push_str(&format!(
        "  Insertions: {}  Deletions: {}  Changes/commit: {:.1}  Files/commit: {:.1}\n",
        git.total_insertions,
        git.total_deletions,
        git.avg_changes_per_commit,
        git.avg_files_per_commit
    ));

    if !git.top_authors.is_empty() {
        out.push_str(&format!("\n{BOLD}TOP CONTRIBUTORS{RESET}\n"));
        for (author, count) in &git.top_authors {
            let share = *count as f64 / git.total_commits as f64 * 100.0;
            out.push_str(&format!("  {author:<24} {count:>6} commits  {share:>5.1}%\n"));
        }
    }

    out
}

fn render_integrated(i: &IntegratedMetrics) -> String {
    let mut out = String::new();

    out.push_str(&format!("\n{BOLD}VELOCITY{RESET}\n"));
    out.push_str(&format!(
        "  Lines/commit: {:.1}  Commits to rebuild: {:.0}  Commits/month: {:.1}\n",
        i.lines_per_commit, i.commits_needed_to_rebuild, i.commits_per_month
    ));
    out.push_str(&format!(
        "  Actual: {:.1} lines/day  Estimated: {:.1} lines/day",
        i.actual_velocity, i.estimated_velocity
    ));
    match i.velocity_ratio {
        Some(ratio) => out.push_str(&format!("  Ratio: {ratio:.2}x\n")),
        None => out.push_str(&format!("  Ratio: {DIM}n/a{RESET}\n")),
    }
    out.push_str(&format!(
        "  Commit efficiency: {:.1}%  Change/commit: {:.2}%\n",
        i.commit_efficiency, i.change_percentage_per_commit
    ));

    let score = i.developer_productivity_score;
    let sc = score_color(score);
    out.push_str(&format!(
        "\n{BOLD}PRODUCTIVITY SCORE{RESET}  {sc}{BOLD}{score:.1}/100{RESET}\n"
    ));

    out
}

/// Interpretation lines for the integrated indicators, one per band.
fn render_insights(i: &IntegratedMetrics) -> String {
    let mut lines: Vec<&str> = Vec::new();

    match i.velocity_ratio {
        Some(r) if r > 1.2 => lines.push("Velocity above estimate: team is outpacing the model"),
        Some(r) if r > 0.8 => lines.push("Velocity within the estimated range"),
        Some(_) => lines.push("Velocity below estimate: review impediments"),
        None => {}
    }

    if i.commit_efficiency > 50.0 {
        lines.push("High commit efficiency: low rework");
    } else if i.commit_efficiency > 30.0 {
        lines.push("Moderate commit efficiency: some rework present");
    } else {
        lines.push("Low commit efficiency: high churn");
    }

    if i.change_percentage_per_commit < 1.0 {
        lines.push("Small incremental commits");
    } else if i.change_percentage_per_commit < 5.0 {
        lines.push("Moderate commit size");
    } else {
        lines.push("Very large commits: consider committing smaller units");
    }

    if i.commits_per_month > 40.0 {
        lines.push("High commit frequency: active development");
    } else if i.commits_per_month > 20.0 {
        lines.push("Moderate commit frequency");
    } else {
        lines.push("Low commit frequency");
    }

    let mut out = format!("\n{BOLD}INSIGHTS{RESET}\n");
    for line in lines {
        out.push_str(&format!("  - {line}\n"));
    }
    out
}
