//! Fixed keyword vocabularies for entity extraction and intent rules.
//!
//! All terms are lowercase and matched by plain substring containment
//! against the lowercased query, so overlapping terms ("design" and
//! "graphic design", "react" and "react native") both match.

/// Skill terms.
pub const SKILLS: &[&str] = &[
    "graphic design",
    "design",
    "logo",
    "social media",
    "marketing",
    "content creation",
    "software engineer",
    "developer",
    "mobile",
    "react native",
    "ios",
    "android",
    "full stack",
    "web dev",
    "no code",
    "postgresql",
    "react",
    "node.js",
    "startup",
    "founder",
    "mvp",
    "dashboard",
    "pitch",
    "business strategy",
    "fintech",
    "blockchain",
    "financial services",
    "venture capital",
    "data analysis",
    "market research",
    "user research",
    "growth hacking",
    "brand strategy",
    "customer acquisition",
    "event planning",
    "networking",
    "presentations",
    "soft skills",
    "math",
    "engineering",
    "foreign languages",
    "music",
    "video editing",
    "cad",
    "teaching",
    "mentoring",
    "essay review",
];

/// City terms.
pub const LOCATIONS: &[&str] = &[
    "boston",
    "toronto",
    "san francisco",
    "new york",
    "seattle",
    "austin",
    "los angeles",
    "chicago",
    "denver",
];

/// Company / organization terms.
pub const COMPANIES: &[&str] = &[
    "rove",
    "nyx ventures",
    "touchpoint legal",
    "stripe",
    "zoom",
    "google",
    "microsoft",
    "fintech nexus",
];

/// Keywords that mark a query as looking for people.
pub const PERSON_KEYWORDS: &[&str] = &["who", "anyone", "people"];

/// Keywords that mark a query as looking for ventures.
pub const PROJECT_KEYWORDS: &[&str] = &["startup", "project", "nonprofit"];

/// Keywords that mark a query as looking for organizations.
pub const ORGANIZATION_KEYWORDS: &[&str] = &["company", "organization", "pod"];

/// Collect every term of `vocabulary` contained in `normalized`, in
/// vocabulary order.
#[must_use]
pub fn matches_in(normalized: &str, vocabulary: &[&str]) -> Vec<String> {
    vocabulary
        .iter()
        .filter(|term| normalized.contains(*term))
        .map(|term| (*term).to_string())
        .collect()
}

/// True when `normalized` contains any of `keywords`.
#[must_use]
pub fn contains_any(normalized: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| normalized.contains(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabularies_are_lowercase_and_distinct() {
        for list in [SKILLS, LOCATIONS, COMPANIES] {
            let mut seen = std::collections::HashSet::new();
            for term in list {
                assert_eq!(*term, term.to_lowercase(), "term {term} not lowercase");
                assert!(seen.insert(*term), "duplicate term {term}");
            }
        }
    }

    #[test]
    fn overlapping_terms_both_match() {
        let found = matches_in("need a logo design and graphic design", SKILLS);
        assert!(found.contains(&"graphic design".to_string()));
        assert!(found.contains(&"design".to_string()));
        assert!(found.contains(&"logo".to_string()));
    }

    #[test]
    fn matches_keep_vocabulary_order() {
        let found = matches_in("denver or boston", LOCATIONS);
        assert_eq!(found, vec!["boston".to_string(), "denver".to_string()]);
    }

    #[test]
    fn substring_matching_has_no_word_boundaries() {
        // "who" inside "whole" still counts
        assert!(contains_any("the whole team", PERSON_KEYWORDS));
        // "math" inside "mathematics"
        assert_eq!(matches_in("mathematics tutor", SKILLS), vec!["math".to_string()]);
    }
}
