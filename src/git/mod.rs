//! Git history analysis module
//!
//! Extracts the chronological commit sequence (with per-commit diff
//! statistics) and reduces it into repository-level metrics: totals,
//! author ranking, cadence, and repository age.

pub mod history;
pub mod metrics;

pub use history::{GitHistory, HistorySource};
