//! Job-role keyword table: canonical role names mapped to the terms a resume
//! for that role is expected to mention, plus a generic fallback list.

/// One canonical role and its ordered keyword list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleKeywords {
    pub role: &'static str,
    pub keywords: &'static [&'static str],
}

/// Canonical roles in match priority order. The first role that contains,
/// or is contained in, the supplied role wins.
pub const ROLE_KEYWORDS: &[RoleKeywords] = &[
    RoleKeywords {
        role: "software engineer",
        keywords: &[
            "programming",
            "coding",
            "development",
            "javascript",
            "python",
            "java",
            "react",
            "node",
            "git",
            "database",
            "api",
            "software",
            "algorithm",
        ],
    },
    RoleKeywords {
        role: "marketing manager",
        keywords: &[
            "marketing",
            "campaign",
            "social media",
            "analytics",
            "brand",
            "seo",
            "content",
            "strategy",
            "digital",
            "advertising",
            "promotion",
        ],
    },
    RoleKeywords {
        role: "data scientist",
        keywords: &[
            "data",
            "analysis",
            "python",
            "r",
            "machine learning",
            "statistics",
            "sql",
            "visualization",
            "modeling",
            "analytics",
            "pandas",
            "numpy",
        ],
    },
    RoleKeywords {
        role: "product manager",
        keywords: &[
            "product",
            "roadmap",
            "strategy",
            "stakeholder",
            "requirements",
            "agile",
            "scrum",
            "analytics",
            "user experience",
            "market research",
        ],
    },
    RoleKeywords {
        role: "designer",
        keywords: &[
            "design",
            "ui",
            "ux",
            "photoshop",
            "illustrator",
            "figma",
            "sketch",
            "visual",
            "creative",
            "typography",
            "branding",
            "wireframe",
        ],
    },
];

/// Used when the supplied role matches no canonical role.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "experience",
    "skills",
    "team",
    "project",
    "management",
    "communication",
    "leadership",
    "problem solving",
    "collaboration",
    "innovation",
];

/// Returns the canonical entry the supplied role resolves to, if any.
///
/// Matching is case-insensitive substring containment in either direction,
/// so "Senior Software Engineer" and "engineer" both resolve to
/// `software engineer`. The role is lower-cased but not trimmed, so
/// surrounding spaces take part in the match. A blank role never matches.
pub fn resolve_role(job_role: &str) -> Option<&'static RoleKeywords> {
    if job_role.trim().is_empty() {
        return None;
    }
    let role = job_role.to_lowercase();
    ROLE_KEYWORDS
        .iter()
        .find(|entry| role.contains(entry.role) || entry.role.contains(role.as_str()))
}

/// Keyword list for the supplied role, falling back to `DEFAULT_KEYWORDS`.
pub fn keywords_for_role(job_role: &str) -> &'static [&'static str] {
    resolve_role(job_role)
        .map(|entry| entry.keywords)
        .unwrap_or(DEFAULT_KEYWORDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_canonical_roles_in_order() {
        let roles: Vec<_> = ROLE_KEYWORDS.iter().map(|r| r.role).collect();
        assert_eq!(
            roles,
            vec![
                "software engineer",
                "marketing manager",
                "data scientist",
                "product manager",
                "designer"
            ]
        );
    }

    #[test]
    fn test_default_list_has_ten_terms() {
        assert_eq!(DEFAULT_KEYWORDS.len(), 10);
    }

    #[test]
    fn test_table_terms_are_lowercase() {
        for entry in ROLE_KEYWORDS {
            assert_eq!(entry.role, entry.role.to_lowercase());
            for kw in entry.keywords {
                assert_eq!(*kw, kw.to_lowercase(), "{} in {}", kw, entry.role);
            }
        }
    }

    #[test]
    fn test_exact_role_case_insensitive() {
        let entry = resolve_role("Software Engineer").unwrap();
        assert_eq!(entry.role, "software engineer");
        assert_eq!(entry.keywords.len(), 13);
    }

    #[test]
    fn test_supplied_role_contains_canonical() {
        let entry = resolve_role("Senior Data Scientist, ML Platform").unwrap();
        assert_eq!(entry.role, "data scientist");
    }

    #[test]
    fn test_canonical_contains_supplied_role() {
        assert_eq!(resolve_role("Design").unwrap().role, "designer");
        assert_eq!(resolve_role("engineer").unwrap().role, "software engineer");
    }

    #[test]
    fn test_first_match_wins() {
        // "manager" is contained in both marketing and product manager.
        assert_eq!(resolve_role("Manager").unwrap().role, "marketing manager");
    }

    #[test]
    fn test_unknown_role_falls_back() {
        assert!(resolve_role("Astronaut").is_none());
        assert_eq!(keywords_for_role("Astronaut"), DEFAULT_KEYWORDS);
    }

    #[test]
    fn test_blank_role_falls_back() {
        assert!(resolve_role("").is_none());
        assert!(resolve_role("   ").is_none());
        assert_eq!(keywords_for_role(""), DEFAULT_KEYWORDS);
    }

    #[test]
    fn test_surrounding_spaces_take_part_in_match() {
        // " eng" is a substring of "software engineer", space included.
        assert_eq!(resolve_role(" eng").unwrap().role, "software engineer");
        // "engineer " is neither inside nor around any canonical role.
        assert!(resolve_role("engineer ").is_none());
        assert_eq!(keywords_for_role("engineer "), DEFAULT_KEYWORDS);
        // A padded full role still contains the canonical one.
        assert_eq!(resolve_role("  Designer  ").unwrap().role, "designer");
    }
}
