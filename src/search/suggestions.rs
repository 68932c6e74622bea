//! Canned query suggestions for the search box.

/// Maximum number of suggestions returned.
pub const MAX_SUGGESTIONS: usize = 5;

struct SuggestionGroup {
    triggers: &'static [&'static str],
    suggestions: &'static [&'static str],
}

const SUGGESTION_GROUPS: &[SuggestionGroup] = &[
    SuggestionGroup {
        triggers: &["design"],
        suggestions: &[
            "do you know any people who are really good with graphic design?",
            "looking for designers for logo and social media work",
            "need someone with UI/UX design skills",
        ],
    },
    SuggestionGroup {
        triggers: &["startup"],
        suggestions: &[
            "I've been thinking about a startup idea and want to see if anyone here might be interested in joining!",
            "looking for startup founders to collaborate with",
            "need developers for my startup project",
        ],
    },
    SuggestionGroup {
        triggers: &["location", "boston", "toronto", "new york"],
        suggestions: &[
            "Anyone in Boston rn?",
            "looking for people in Toronto for coffee meetings",
            "need local collaborators in New York",
        ],
    },
    SuggestionGroup {
        triggers: &["developer", "engineer"],
        suggestions: &[
            "Does anyone know of a software engineer familiar with mobile apps for a startup?",
            "looking for full stack developers",
            "need React developers for a project",
        ],
    },
    SuggestionGroup {
        triggers: &["marketing"],
        suggestions: &[
            "Who would likely be interested in a marketing gig for a startup?",
            "looking for CMO for our startup",
            "need content creators and social media experts",
        ],
    },
];

/// Suggestions for a partial query, grouped by topic and capped at
/// [`MAX_SUGGESTIONS`]. Blank input yields nothing.
#[must_use]
pub fn suggestions_for(partial: &str) -> Vec<String> {
    let normalized = partial.trim().to_lowercase();
    if normalized.is_empty() {
        return Vec::new();
    }
    SUGGESTION_GROUPS
        .iter()
        .filter(|group| group.triggers.iter().any(|t| normalized.contains(t)))
        .flat_map(|group| group.suggestions.iter())
        .take(MAX_SUGGESTIONS)
        .map(|s| (*s).to_string())
        .collect()
}
