//! Per-category scorers. Each takes the lower-cased resume text and returns
//! points in `[0, Category::max_points]`.
//!
//! Point grants are cumulative: every tier whose threshold is met adds its
//! bonus, and the category total is capped at its maximum.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::Category;
use crate::scoring::keywords::keywords_for_role;

/// A cumulative grant: `points` are added once `at_least` terms have matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tier {
    pub at_least: usize,
    pub points: u32,
}

const fn tier(at_least: usize, points: u32) -> Tier {
    Tier { at_least, points }
}

/// Sums the bonus of every tier whose threshold `count` reaches.
pub fn tiered_points(count: usize, tiers: &[Tier]) -> u32 {
    tiers
        .iter()
        .filter(|t| count >= t.at_least)
        .map(|t| t.points)
        .sum()
}

/// Number of distinct terms that occur anywhere in `text`.
pub fn count_matches(text: &str, terms: &[&str]) -> usize {
    terms.iter().filter(|&&term| text.contains(term)).count()
}

fn capped(points: u32, category: Category) -> u32 {
    points.min(category.max_points())
}

// Digits are ASCII only; the regex crate's `\d` would also accept other scripts.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9]{3}[-\s]?[0-9]{3}[-\s]?[0-9]{4}|\([0-9]{3}\)\s?[0-9]{3}[-\s]?[0-9]{4}")
        .expect("phone pattern is valid")
});

static YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]{4}").expect("year pattern is valid"));

static DATE_OR_DURATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9]{4}|[0-9]+\s*(year|month|yr|mo)").expect("duration pattern is valid")
});

// ── Contact ─────────────────────────────────────────────────────────────────

const EMAIL_POINTS: u32 = 4;
const PHONE_POINTS: u32 = 3;
const LENGTH_POINTS: u32 = 3;
/// Text longer than this is taken as more than a bare name.
const MIN_CONTENT_CHARS: usize = 50;

pub fn score_contact_info(text: &str) -> u32 {
    let mut points = 0;
    if text.contains('@') {
        points += EMAIL_POINTS;
    }
    if PHONE_RE.is_match(text) {
        points += PHONE_POINTS;
    }
    if text.chars().count() > MIN_CONTENT_CHARS {
        points += LENGTH_POINTS;
    }
    capped(points, Category::ContactInfo)
}

// ── Education ───────────────────────────────────────────────────────────────

pub const EDUCATION_TERMS: &[&str] = &[
    "university",
    "college",
    "degree",
    "bachelor",
    "master",
    "phd",
    "doctorate",
    "education",
    "graduated",
    "gpa",
    "major",
    "minor",
    "school",
    "institute",
    "b.s.",
    "b.a.",
    "m.s.",
    "m.a.",
    "bs",
    "ba",
    "ms",
    "ma",
];

pub const EDUCATION_TIERS: &[Tier] = &[tier(1, 8), tier(3, 4)];
const YEAR_POINTS: u32 = 3;

pub fn score_education(text: &str) -> u32 {
    let mut points = tiered_points(count_matches(text, EDUCATION_TERMS), EDUCATION_TIERS);
    if YEAR_RE.is_match(text) {
        points += YEAR_POINTS;
    }
    capped(points, Category::Education)
}

// ── Work experience ─────────────────────────────────────────────────────────

pub const EXPERIENCE_TERMS: &[&str] = &[
    "experience",
    "work",
    "job",
    "position",
    "role",
    "company",
    "employer",
    "developed",
    "managed",
    "led",
    "created",
    "implemented",
    "achieved",
    "responsible",
    "responsibilities",
    "projects",
    "project",
];

pub const EXPERIENCE_TIERS: &[Tier] = &[tier(2, 10), tier(5, 8), tier(8, 7)];
const TIMELINE_POINTS: u32 = 5;

pub fn score_work_experience(text: &str) -> u32 {
    let mut points = tiered_points(count_matches(text, EXPERIENCE_TERMS), EXPERIENCE_TIERS);
    if DATE_OR_DURATION_RE.is_match(text) {
        points += TIMELINE_POINTS;
    }
    capped(points, Category::WorkExperience)
}

// ── Skills ──────────────────────────────────────────────────────────────────

/// Words that signal a skills section exists.
pub const SKILL_SECTION_TERMS: &[&str] = &[
    "skills",
    "skill",
    "technologies",
    "technology",
    "programming",
    "software",
    "tools",
    "languages",
    "frameworks",
    "database",
    "technical",
    "proficient",
];

/// Concrete technical and soft skills.
pub const COMMON_SKILLS: &[&str] = &[
    "javascript",
    "python",
    "java",
    "react",
    "node",
    "sql",
    "html",
    "css",
    "git",
    "aws",
    "docker",
    "kubernetes",
    "excel",
    "powerpoint",
    "word",
    "communication",
    "leadership",
    "teamwork",
    "problem solving",
];

pub const SKILL_SECTION_TIERS: &[Tier] = &[tier(1, 8)];
pub const COMMON_SKILL_TIERS: &[Tier] = &[tier(3, 6), tier(6, 6)];

pub fn score_skills(text: &str) -> u32 {
    let points = tiered_points(count_matches(text, SKILL_SECTION_TERMS), SKILL_SECTION_TIERS)
        + tiered_points(count_matches(text, COMMON_SKILLS), COMMON_SKILL_TIERS);
    capped(points, Category::Skills)
}

// ── Achievements ────────────────────────────────────────────────────────────

pub const ACHIEVEMENT_TERMS: &[&str] = &[
    "achievement",
    "award",
    "recognition",
    "certification",
    "certificate",
    "honor",
    "accomplishment",
    "published",
    "patent",
    "increased",
    "improved",
    "reduced",
    "saved",
    "%",
    "percent",
];

pub const ACHIEVEMENT_TIERS: &[Tier] = &[tier(1, 5), tier(3, 3), tier(5, 2)];

pub fn score_achievements(text: &str) -> u32 {
    let points = tiered_points(count_matches(text, ACHIEVEMENT_TERMS), ACHIEVEMENT_TIERS);
    capped(points, Category::Achievements)
}

// ── Keywords ────────────────────────────────────────────────────────────────

/// Proportion of the role's keyword list present in the text, scaled to 20.
///
/// Not capped: the ratio never exceeds 1, so the result never exceeds 20.
pub fn score_keywords(text: &str, job_role: &str) -> u32 {
    let keywords = keywords_for_role(job_role);
    if keywords.is_empty() {
        return 0;
    }
    let matched = count_matches(text, keywords);
    let ratio = matched as f64 / keywords.len() as f64;
    (ratio * Category::Keywords.max_points() as f64).round() as u32
}
