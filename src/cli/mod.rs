//! CLI definition and command handler

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

use crate::config::AnalysisConfig;
use crate::pipeline::Analyzer;
use crate::reporters::{self, OutputFormat};

/// Parse and validate a monthly salary value.
fn parse_salary(s: &str) -> Result<f64, String> {
    let salary: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if !salary.is_finite() || salary <= 0.0 {
        Err("salary must be a positive, finite number".to_string())
    } else {
        Ok(salary)
    }
}

/// Costwise - COCOMO II cost estimation with git velocity correlation
#[derive(Parser, Debug)]
#[command(name = "costwise")]
#[command(
    version,
    about = "Estimate development cost, effort, and team size from a source tree — and check the estimate against real git history",
    long_about = "Costwise scans a source tree, classifies every line as code, comment, or \
blank, and runs the COCOMO II parametric cost model over the result.\n\n\
When the target is a git repository, it also extracts the commit history and \
correlates estimated velocity against the velocity the team actually achieved.",
    after_help = "\
Examples:
  costwise .                           Analyze current directory
  costwise /path/to/repo               Analyze a specific project
  costwise . --format json             JSON output for scripting
  costwise . --salary 12000            Override the monthly salary
  costwise . --export report.json      Persist the results
  costwise . --no-git                  Skip history correlation"
)]
pub struct Cli {
    /// Path to the project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Monthly salary per person used by the cost model
    #[arg(long, value_parser = parse_salary)]
    pub salary: Option<f64>,

    /// Output format: text, json
    #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
    pub format: String,

    /// Export results as JSON to a file
    #[arg(long, short = 'e')]
    pub export: Option<PathBuf>,

    /// Skip git history extraction and correlation
    #[arg(long)]
    pub no_git: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,
}

/// Run one analysis according to the parsed arguments.
pub fn run(cli: Cli) -> Result<()> {
    let mut config = AnalysisConfig::load(&cli.path);
    if let Some(salary) = cli.salary {
        config = config.with_monthly_salary(salary);
    }

    let mut analyzer = Analyzer::new(config);
    if cli.no_git {
        analyzer = analyzer.without_git();
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Analyzing {}...", cli.path.display()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let bundle = analyzer.analyze(&cli.path);
    spinner.finish_and_clear();
    let bundle = bundle?;

    if bundle.metrics.files_count == 0 {
        eprintln!(
            "{} no code files found under {}",
            style("warning:").yellow().bold(),
            cli.path.display()
        );
    }

    let format: OutputFormat = cli.format.parse()?;
    println!("{}", reporters::render(&bundle, format)?);

    if let Some(export_path) = cli.export {
        let json = reporters::json::render(&bundle)?;
        std::fs::write(&export_path, json)
            .with_context(|| format!("Failed to write export file {:?}", export_path))?;
        eprintln!(
            "{} results exported to {}",
            style("✓").green(),
            export_path.display()
        );
    }

    Ok(())
}
