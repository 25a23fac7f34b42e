//! JSON reporter
//!
//! Serializes the full analysis bundle plus a generation timestamp.
//! The export carries numeric summaries only; no source text ever
//! crosses this boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{AnalysisBundle, CocomoEstimate, GitMetrics, IntegratedMetrics, ProjectMetrics};
use anyhow::Result;

/// On-disk export envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonReport {
    pub code: ProjectMetrics,
    pub cocomo: CocomoEstimate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git: Option<GitMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integrated: Option<IntegratedMetrics>,
    pub generated_at: DateTime<Utc>,
}

impl JsonReport {
    pub fn new(bundle: &AnalysisBundle) -> Self {
        Self {
            code: bundle.metrics.clone(),
            cocomo: bundle.cocomo.clone(),
            git: bundle.git.clone(),
            integrated: bundle.integrated.clone(),
            generated_at: Utc::now(),
        }
    }
}

/// Render a bundle as pretty-printed JSON.
pub fn render(bundle: &AnalysisBundle) -> Result<String> {
    Ok(serde_json::to_string_pretty(&JsonReport::new(bundle))?)
}

/// Render as compact JSON (single line).
pub fn render_compact(bundle: &AnalysisBundle) -> Result<String> {
    Ok(serde_json::to_string(&JsonReport::new(bundle))?)
}
