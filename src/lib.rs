//! Costwise - COCOMO II cost estimation with git velocity correlation
//!
//! Scans a source tree, classifies lines as code/comment/blank, runs the
//! COCOMO II parametric cost model, and - when the target is a git
//! repository - correlates the model's estimated velocity against the
//! velocity observable in the commit history.

pub mod cli;
pub mod cocomo;
pub mod config;
pub mod correlate;
pub mod errors;
pub mod git;
pub mod models;
pub mod pipeline;
pub mod reporters;
pub mod scan;

pub use config::AnalysisConfig;
pub use errors::CostwiseError;
pub use models::{AnalysisBundle, CocomoEstimate, GitMetrics, IntegratedMetrics, ProjectMetrics};
pub use pipeline::Analyzer;
