//! Narrative feedback derived from a score breakdown.

use crate::models::{Category, CategoryScoreSet};

/// Thresholds and wording attached to one category.
#[derive(Debug, Clone, Copy)]
struct FeedbackRule {
    category: Category,
    /// A sub-score at or above this earns the strength sentence.
    strength_at: u32,
    /// A sub-score below this earns the weakness sentence and the tip.
    weakness_below: u32,
    strength: &'static str,
    weakness: &'static str,
    tip: &'static str,
}

/// `{role}` in a strength sentence is replaced by the supplied job role.
const FEEDBACK_RULES: &[FeedbackRule] = &[
    FeedbackRule {
        category: Category::ContactInfo,
        strength_at: 8,
        weakness_below: 8,
        strength: "Complete contact information provided",
        weakness: "Contact information section needs improvement",
        tip: "Ensure your resume includes email, phone number, and optionally LinkedIn profile or portfolio URL",
    },
    FeedbackRule {
        category: Category::Education,
        strength_at: 12,
        weakness_below: 10,
        strength: "Strong educational background clearly presented",
        weakness: "Education section could be more detailed",
        tip: "Add your degree, institution, graduation year, and relevant coursework or GPA if strong",
    },
    FeedbackRule {
        category: Category::WorkExperience,
        strength_at: 20,
        weakness_below: 15,
        strength: "Excellent work experience section with detailed descriptions",
        weakness: "Work experience section lacks depth or detail",
        tip: "Use action verbs and quantify your achievements (e.g., \"Increased sales by 25%\" instead of \"Helped with sales\")",
    },
    FeedbackRule {
        category: Category::Skills,
        strength_at: 16,
        weakness_below: 12,
        strength: "Comprehensive skills section relevant to your field",
        weakness: "Skills section needs expansion or better organization",
        tip: "Create a dedicated skills section with both technical and soft skills relevant to your target role",
    },
    FeedbackRule {
        category: Category::Achievements,
        strength_at: 7,
        weakness_below: 5,
        strength: "Good inclusion of achievements and measurable results",
        weakness: "Missing achievements, certifications, or quantifiable results",
        tip: "Add a certifications section and include measurable accomplishments throughout your experience",
    },
    FeedbackRule {
        category: Category::Keywords,
        strength_at: 15,
        weakness_below: 10,
        strength: "Strong keyword alignment with {role} role requirements",
        weakness: "Limited job-relevant keywords and terminology",
        tip: "Review the job description and incorporate relevant industry keywords and terminology naturally",
    },
];

pub const FALLBACK_STRENGTH: &str = "Resume structure is present and readable";

/// Appended to every tip list regardless of scores.
pub const GENERAL_TIPS: [&str; 2] = [
    "Keep your resume to 1-2 pages and use consistent formatting throughout",
    "Proofread carefully for spelling and grammar errors",
];

/// Strength sentences for every category at or above its bar. Never empty.
pub fn generate_strengths(scores: &CategoryScoreSet, job_role: &str) -> Vec<String> {
    let mut strengths: Vec<String> = FEEDBACK_RULES
        .iter()
        .filter(|rule| scores.get(rule.category) >= rule.strength_at)
        .map(|rule| rule.strength.replace("{role}", job_role))
        .collect();

    if strengths.is_empty() {
        strengths.push(FALLBACK_STRENGTH.to_string());
    }
    strengths
}

/// Weakness sentences for every category below its bar. May be empty.
pub fn generate_weaknesses(scores: &CategoryScoreSet) -> Vec<String> {
    weak_rules(scores)
        .map(|rule| rule.weakness.to_string())
        .collect()
}

/// One targeted tip per weak category followed by the general tips.
pub fn generate_improvement_tips(scores: &CategoryScoreSet) -> Vec<String> {
    weak_rules(scores)
        .map(|rule| rule.tip.to_string())
        .chain(GENERAL_TIPS.iter().map(|tip| tip.to_string()))
        .collect()
}

fn weak_rules(scores: &CategoryScoreSet) -> impl Iterator<Item = &'static FeedbackRule> + '_ {
    FEEDBACK_RULES
        .iter()
        .filter(move |rule| scores.get(rule.category) < rule.weakness_below)
}
