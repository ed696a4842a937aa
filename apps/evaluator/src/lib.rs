//! Heuristic resume evaluator: extracts text from an uploaded resume, scores
//! it against a target job role, and produces a downloadable report.

pub mod config;
pub mod errors;
pub mod extract;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod scoring;
pub mod validation;

pub use errors::AppError;
pub use models::{AnalysisResult, Category, CategoryScoreSet, Grade, ResumeSubmission, UserInfo};
pub use scoring::analyze;
