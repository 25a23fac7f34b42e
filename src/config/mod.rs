//! Analysis configuration
//!
//! Loads per-project configuration from an optional `costwise.toml`
//! in the target directory and merges it over built-in defaults. The
//! merged [`AnalysisConfig`] is immutable and threaded through the
//! pipeline, so batch analyses of several projects cannot interfere
//! with one another.
//!
//! # Configuration Format
//!
//! ```toml
//! # costwise.toml
//!
//! [cost]
//! monthly_salary = 12000.0
//!
//! [exclude]
//! patterns = ["generated/", "*.pb.go"]
//! ```

use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

/// Default monthly salary per person, in the caller's currency.
pub const DEFAULT_MONTHLY_SALARY: f64 = 15_000.0;

/// Gitignore-style patterns excluded from every scan: VCS internals,
/// dependency caches, build output, compiled artifacts, minified
/// bundles, and lockfiles.
pub const DEFAULT_EXCLUDE_PATTERNS: &[&str] = &[
    ".git/",
    ".svn/",
    ".hg/",
    "__pycache__/",
    "node_modules/",
    ".venv/",
    "venv/",
    "env/",
    "vendor/",
    "dist/",
    "build/",
    "target/",
    "out/",
    ".idea/",
    ".vscode/",
    ".vs/",
    "bin/",
    "obj/",
    ".gradle/",
    ".next/",
    ".pytest_cache/",
    ".mypy_cache/",
    ".tox/",
    ".eggs/",
    "*.egg-info/",
    ".nyc_output/",
    "coverage/",
    ".cache/",
    "*.pyc",
    "*.pyo",
    "*.so",
    "*.dll",
    "*.dylib",
    "*.exe",
    "*.o",
    "*.class",
    "*.jar",
    "*.war",
    "*.min.js",
    "*.min.css",
    "*.map",
    "*.lock",
    "package-lock.json",
    "yarn.lock",
    "poetry.lock",
    "Pipfile.lock",
    "composer.lock",
    "Gemfile.lock",
];

/// Immutable configuration for one analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Exclusion patterns: defaults plus any project additions
    pub exclude_patterns: Vec<String>,
    /// Monthly salary per person used by the cost model
    pub monthly_salary: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            exclude_patterns: DEFAULT_EXCLUDE_PATTERNS
                .iter()
                .map(|p| p.to_string())
                .collect(),
            monthly_salary: DEFAULT_MONTHLY_SALARY,
        }
    }
}

impl AnalysisConfig {
    /// Load configuration for a project: built-in defaults merged with
    /// `costwise.toml` if one exists at the project root.
    pub fn load(project_root: &Path) -> Self {
        let mut config = Self::default();

        let toml_path = project_root.join("costwise.toml");
        if !toml_path.exists() {
            debug!("No costwise.toml at {:?}, using defaults", project_root);
            return config;
        }

        match std::fs::read_to_string(&toml_path) {
            Ok(content) => match toml::from_str::<ProjectFile>(&content) {
                Ok(file) => {
                    debug!("Loaded config from {:?}", toml_path);
                    config.apply(file);
                }
                Err(e) => {
                    warn!("Failed to parse {:?}: {}", toml_path, e);
                }
            },
            Err(e) => {
                warn!("Failed to read {:?}: {}", toml_path, e);
            }
        }

        config
    }

    /// Override the monthly salary (e.g. from a CLI flag).
    pub fn with_monthly_salary(mut self, salary: f64) -> Self {
        self.monthly_salary = salary;
        self
    }

    fn apply(&mut self, file: ProjectFile) {
        if let Some(cost) = file.cost {
            if let Some(salary) = cost.monthly_salary {
                self.monthly_salary = salary;
            }
        }
        if let Some(exclude) = file.exclude {
            self.exclude_patterns.extend(exclude.patterns);
        }
    }
}

/// On-disk shape of `costwise.toml`.
#[derive(Debug, Default, Deserialize)]
struct ProjectFile {
    cost: Option<CostSection>,
    exclude: Option<ExcludeSection>,
}

#[derive(Debug, Default, Deserialize)]
struct CostSection {
    monthly_salary: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct ExcludeSection {
    #[serde(default)]
    patterns: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_without_config_file() {
        let dir = tempdir().expect("tempdir");
        let config = AnalysisConfig::load(dir.path());
        assert_eq!(config.monthly_salary, DEFAULT_MONTHLY_SALARY);
        assert!(config.exclude_patterns.iter().any(|p| p == "node_modules/"));
    }

    #[test]
    fn toml_overrides_salary_and_extends_excludes() {
        let dir = tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join("costwise.toml"),
            r#"
[cost]
monthly_salary = 9000.0

[exclude]
patterns = ["generated/"]
"#,
        )
        .expect("write config");

        let config = AnalysisConfig::load(dir.path());
        assert_eq!(config.monthly_salary, 9000.0);
        assert!(config.exclude_patterns.iter().any(|p| p == "generated/"));
        // Defaults are kept, not replaced
        assert!(config.exclude_patterns.iter().any(|p| p == "target/"));
    }

    #[test]
    fn malformed_toml_falls_back_to_defaults() {
        let dir = tempdir().expect("tempdir");
        std::fs::write(dir.path().join("costwise.toml"), "not [valid toml").expect("write");
        let config = AnalysisConfig::load(dir.path());
        assert_eq!(config.monthly_salary, DEFAULT_MONTHLY_SALARY);
    }

    #[test]
    fn cli_salary_override_wins() {
        let config = AnalysisConfig::default().with_monthly_salary(20_000.0);
        assert_eq!(config.monthly_salary, 20_000.0);
    }
}
