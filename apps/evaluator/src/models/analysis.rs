use std::fmt;

use serde::{Deserialize, Serialize};

/// The six scored dimensions of a resume, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    ContactInfo,
    Education,
    WorkExperience,
    Skills,
    Achievements,
    Keywords,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::ContactInfo,
        Category::Education,
        Category::WorkExperience,
        Category::Skills,
        Category::Achievements,
        Category::Keywords,
    ];

    /// Upper bound for this category's sub-score. The six maxima sum to 100.
    pub fn max_points(self) -> u32 {
        match self {
            Category::ContactInfo => 10,
            Category::Education => 15,
            Category::WorkExperience => 25,
            Category::Skills => 20,
            Category::Achievements => 10,
            Category::Keywords => 20,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::ContactInfo => "Contact Information",
            Category::Education => "Education",
            Category::WorkExperience => "Work Experience",
            Category::Skills => "Skills",
            Category::Achievements => "Achievements",
            Category::Keywords => "Job Role Keywords",
        }
    }
}

/// Per-category sub-scores. Each value lies in `[0, Category::max_points]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScoreSet {
    pub contact_info: u32,
    pub education: u32,
    pub work_experience: u32,
    pub skills: u32,
    pub achievements: u32,
    pub keywords: u32,
}

impl CategoryScoreSet {
    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::ContactInfo => self.contact_info,
            Category::Education => self.education,
            Category::WorkExperience => self.work_experience,
            Category::Skills => self.skills,
            Category::Achievements => self.achievements,
            Category::Keywords => self.keywords,
        }
    }

    pub fn total(&self) -> u32 {
        Category::ALL.iter().map(|&c| self.get(c)).sum()
    }
}

/// Letter grade derived from the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
}

impl Grade {
    /// Breakpoints are inclusive lower bounds checked from the top down.
    pub fn from_score(total_score: u32) -> Self {
        match total_score {
            s if s >= 85 => Grade::A,
            s if s >= 70 => Grade::B,
            s if s >= 55 => Grade::C,
            _ => Grade::D,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full output of one analysis: numeric breakdown plus narrative feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub total_score: u32,
    pub grade: Grade,
    pub scores: CategoryScoreSet,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub improvement_tips: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_maxima_sum_to_100() {
        let sum: u32 = Category::ALL.iter().map(|c| c.max_points()).sum();
        assert_eq!(sum, 100);
    }

    #[test]
    fn test_grade_breakpoints() {
        for (score, expected) in [
            (100, Grade::A),
            (85, Grade::A),
            (84, Grade::B),
            (70, Grade::B),
            (69, Grade::C),
            (55, Grade::C),
            (54, Grade::D),
            (0, Grade::D),
        ] {
            assert_eq!(Grade::from_score(score), expected, "score {score}");
        }
    }

    #[test]
    fn test_grade_is_monotonic() {
        let mut previous = Grade::from_score(0);
        for score in 1..=100 {
            let grade = Grade::from_score(score);
            // Letters only ever improve as the score rises.
            assert!(grade.as_str() <= previous.as_str(), "score {score}");
            previous = grade;
        }
    }

    #[test]
    fn test_total_sums_all_categories() {
        let scores = CategoryScoreSet {
            contact_info: 10,
            education: 12,
            work_experience: 20,
            skills: 14,
            achievements: 5,
            keywords: 9,
        };
        assert_eq!(scores.total(), 70);
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = AnalysisResult {
            total_score: 7,
            grade: Grade::D,
            scores: CategoryScoreSet {
                contact_info: 7,
                ..Default::default()
            },
            strengths: vec!["Resume structure is present and readable".to_string()],
            weaknesses: vec![],
            improvement_tips: vec![],
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["totalScore"], 7);
        assert_eq!(json["grade"], "D");
        assert_eq!(json["scores"]["contactInfo"], 7);
        assert_eq!(json["scores"]["workExperience"], 0);
        assert!(json["improvementTips"].is_array());
    }
}
