//! Downloadable analysis report: a flat JSON record of who was analysed,
//! when, and what the engine concluded.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use tracing::info;

use crate::errors::AppError;
use crate::models::{AnalysisResult, Category, CategoryScoreSet, Grade, ResumeSubmission};

static NON_SLUG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("slug pattern is valid"));

const FALLBACK_SLUG: &str = "resume";

/// Each sub-score rendered as "points/max".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedScores {
    pub contact_information: String,
    pub education: String,
    pub work_experience: String,
    pub skills: String,
    pub achievements: String,
    pub job_role_keywords: String,
}

impl DetailedScores {
    pub fn from_scores(scores: &CategoryScoreSet) -> Self {
        let render = |category: Category| {
            format!("{}/{}", scores.get(category), category.max_points())
        };
        DetailedScores {
            contact_information: render(Category::ContactInfo),
            education: render(Category::Education),
            work_experience: render(Category::WorkExperience),
            skills: render(Category::Skills),
            achievements: render(Category::Achievements),
            job_role_keywords: render(Category::Keywords),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub name: String,
    pub email: String,
    pub role: String,
    pub file_name: String,
    #[serde(serialize_with = "serialize_iso_millis")]
    pub analysis_date: DateTime<Utc>,
    pub score: u32,
    pub grade: Grade,
    pub detailed_scores: DetailedScores,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub improvement_tips: Vec<String>,
    pub summary: String,
}

/// `2024-03-05T14:07:09.123Z`
fn serialize_iso_millis<S: Serializer>(at: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Millis, true))
}

pub fn build_report(
    submission: &ResumeSubmission,
    analysis: &AnalysisResult,
    analyzed_at: DateTime<Utc>,
) -> AnalysisReport {
    let user = &submission.user_info;
    AnalysisReport {
        name: user.name.clone(),
        email: user.email.clone(),
        role: user.job_role.clone(),
        file_name: submission.file_name.clone(),
        analysis_date: analyzed_at,
        score: analysis.total_score,
        grade: analysis.grade,
        detailed_scores: DetailedScores::from_scores(&analysis.scores),
        strengths: analysis.strengths.clone(),
        weaknesses: analysis.weaknesses.clone(),
        improvement_tips: analysis.improvement_tips.clone(),
        summary: build_summary(analysis.total_score, &user.job_role),
    }
}

/// One-sentence verdict. Grade and closing remark both come from `total_score`.
pub fn build_summary(total_score: u32, job_role: &str) -> String {
    let grade = Grade::from_score(total_score);
    let verdict = match grade {
        Grade::A => "Excellent work! Your resume is well-structured and comprehensive.",
        Grade::B => "Good foundation with room for improvement in key areas.",
        Grade::C => "Your resume needs significant improvements to be competitive.",
        Grade::D => "Major revisions needed to improve your resume's effectiveness.",
    };
    format!("Your resume scored {total_score}/100 (Grade {grade}) for the {job_role} role. {verdict}")
}

/// `resume-analysis-{name-slug}-{epoch millis}.json`
///
/// The slug keeps only `[a-z0-9-]`, so the name never leaves the report directory.
pub fn report_file_name(name: &str, analyzed_at: DateTime<Utc>) -> String {
    let lowered = name.to_lowercase();
    let slug = NON_SLUG_RE.replace_all(&lowered, "-");
    let slug = match slug.trim_matches('-') {
        "" => FALLBACK_SLUG,
        s => s,
    };
    format!(
        "resume-analysis-{slug}-{}.json",
        analyzed_at.timestamp_millis()
    )
}

/// Plain-text rendering of an analysis for the terminal.
pub fn render_text(analysis: &AnalysisResult, job_role: &str) -> String {
    let mut out = format!(
        "Resume score: {}/100 (Grade {})\n",
        analysis.total_score, analysis.grade
    );
    out.push_str(&build_summary(analysis.total_score, job_role));
    out.push_str("\n\nBreakdown:\n");
    for category in Category::ALL {
        out.push_str(&format!(
            "  {:<22}{:>3}/{}\n",
            category.label(),
            analysis.scores.get(category),
            category.max_points()
        ));
    }

    for (heading, items) in [
        ("Strengths", &analysis.strengths),
        ("Weaknesses", &analysis.weaknesses),
        ("Improvement tips", &analysis.improvement_tips),
    ] {
        if items.is_empty() {
            continue;
        }
        out.push_str(&format!("\n{heading}:\n"));
        for item in items {
            out.push_str(&format!("  - {item}\n"));
        }
    }
    out
}

pub fn to_json(report: &AnalysisReport) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Writes the report into `dir`, creating it if needed, and returns the path.
pub fn write_report(dir: &Path, report: &AnalysisReport) -> Result<PathBuf, AppError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(report_file_name(&report.name, report.analysis_date));

    let mut body = to_json(report)?;
    body.push('\n');
    fs::write(&path, body)?;

    info!(path = %path.display(), score = report.score, "report written");
    Ok(path)
}
