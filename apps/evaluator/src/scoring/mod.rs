//! Rule-based resume scoring engine.
//!
//! `analyze` is pure and total: no I/O, no clock, no randomness, and every
//! string input (including the empty string) produces a result.

pub mod categories;
pub mod feedback;
pub mod keywords;

pub use categories::{tiered_points, Tier};
pub use keywords::{keywords_for_role, resolve_role, RoleKeywords, DEFAULT_KEYWORDS, ROLE_KEYWORDS};

use crate::models::{AnalysisResult, CategoryScoreSet, Grade};

use categories::{
    score_achievements, score_contact_info, score_education, score_keywords, score_skills,
    score_work_experience,
};
use feedback::{generate_improvement_tips, generate_strengths, generate_weaknesses};

/// Scores resume text against a target job role.
pub fn analyze(resume_text: &str, job_role: &str) -> AnalysisResult {
    let scores = score_categories(resume_text, job_role);
    let total_score = scores.total();

    AnalysisResult {
        total_score,
        grade: Grade::from_score(total_score),
        scores,
        strengths: generate_strengths(&scores, job_role),
        weaknesses: generate_weaknesses(&scores),
        improvement_tips: generate_improvement_tips(&scores),
    }
}

/// Computes the six sub-scores. The text is lower-cased once up front.
pub fn score_categories(resume_text: &str, job_role: &str) -> CategoryScoreSet {
    let text = resume_text.to_lowercase();
    CategoryScoreSet {
        contact_info: score_contact_info(&text),
        education: score_education(&text),
        work_experience: score_work_experience(&text),
        skills: score_skills(&text),
        achievements: score_achievements(&text),
        keywords: score_keywords(&text, job_role),
    }
}
