//! Query understanding: entity extraction and intent classification.
//!
//! ```text
//! "Who is in Boston?"
//!        │ lowercase
//!        ▼
//! "who is in boston?" ──► extract ──► skills {} locations {boston} companies {}
//!        │                                     │
//!        └──────────────► INTENT_RULES ◄───────┘  (first match wins)
//!                               │
//!                               ▼
//!                         find_person
//! ```

use serde::{Deserialize, Serialize};

use crate::directory::CandidateKind;

use super::vocabulary::{
    self, COMPANIES, LOCATIONS, ORGANIZATION_KEYWORDS, PERSON_KEYWORDS, PROJECT_KEYWORDS, SKILLS,
};

/// The classified purpose of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentKind {
    FindPerson,
    FindOrganization,
    FindProject,
    LocationBased,
    SkillBased,
    CompanyBased,
    General,
}

impl IntentKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FindPerson => "find_person",
            Self::FindOrganization => "find_organization",
            Self::FindProject => "find_project",
            Self::LocationBased => "location_based",
            Self::SkillBased => "skill_based",
            Self::CompanyBased => "company_based",
            Self::General => "general",
        }
    }

    /// Candidate kinds scored for this intent, in output order.
    ///
    /// `company_based` fans out to both projects and organizations;
    /// `location_based` and `general` score nothing.
    #[must_use]
    pub const fn target_kinds(&self) -> &'static [CandidateKind] {
        match self {
            Self::FindPerson | Self::SkillBased => &[CandidateKind::Member],
            Self::FindProject => &[CandidateKind::Project],
            Self::FindOrganization => &[CandidateKind::Organization],
            Self::CompanyBased => &[CandidateKind::Project, CandidateKind::Organization],
            Self::LocationBased | Self::General => &[],
        }
    }

    #[must_use]
    pub fn targets(&self, kind: CandidateKind) -> bool {
        self.target_kinds().contains(&kind)
    }
}

impl std::fmt::Display for IntentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vocabulary terms found in a query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entities {
    pub skills: Vec<String>,
    pub locations: Vec<String>,
    pub companies: Vec<String>,
}

impl Entities {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty() && self.locations.is_empty() && self.companies.is_empty()
    }
}

/// Extract skills, locations and companies from an already-lowercased query.
#[must_use]
pub fn extract_entities(normalized: &str) -> Entities {
    Entities {
        skills: vocabulary::matches_in(normalized, SKILLS),
        locations: vocabulary::matches_in(normalized, LOCATIONS),
        companies: vocabulary::matches_in(normalized, COMPANIES),
    }
}

/// One entry of the intent decision list.
#[derive(Debug, Clone, Copy)]
pub struct IntentRule {
    pub name: &'static str,
    pub intent: IntentKind,
    pub matches: fn(&str, &Entities) -> bool,
}

fn mentions_people(normalized: &str, _: &Entities) -> bool {
    vocabulary::contains_any(normalized, PERSON_KEYWORDS)
}

fn mentions_projects(normalized: &str, _: &Entities) -> bool {
    vocabulary::contains_any(normalized, PROJECT_KEYWORDS)
}

fn mentions_organizations(normalized: &str, _: &Entities) -> bool {
    vocabulary::contains_any(normalized, ORGANIZATION_KEYWORDS)
}

fn has_location(_: &str, entities: &Entities) -> bool {
    !entities.locations.is_empty()
}

fn has_skill(_: &str, entities: &Entities) -> bool {
    !entities.skills.is_empty()
}

fn has_company(_: &str, entities: &Entities) -> bool {
    !entities.companies.is_empty()
}

/// Priority-ordered intent rules. Order is significant.
pub const INTENT_RULES: &[IntentRule] = &[
    IntentRule {
        name: "person_keywords",
        intent: IntentKind::FindPerson,
        matches: mentions_people,
    },
    IntentRule {
        name: "project_keywords",
        intent: IntentKind::FindProject,
        matches: mentions_projects,
    },
    IntentRule {
        name: "organization_keywords",
        intent: IntentKind::FindOrganization,
        matches: mentions_organizations,
    },
    IntentRule {
        name: "location_entity",
        intent: IntentKind::LocationBased,
        matches: has_location,
    },
    IntentRule {
        name: "skill_entity",
        intent: IntentKind::SkillBased,
        matches: has_skill,
    },
    IntentRule {
        name: "company_entity",
        intent: IntentKind::CompanyBased,
        matches: has_company,
    },
];

/// Pick the intent of the first matching rule, or `General`.
#[must_use]
pub fn classify_intent(normalized: &str, entities: &Entities) -> IntentKind {
    INTENT_RULES
        .iter()
        .find(|rule| (rule.matches)(normalized, entities))
        .map_or(IntentKind::General, |rule| rule.intent)
}

/// A classified search query. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub original: String,
    #[serde(rename = "processed", alias = "normalized")]
    pub normalized: String,
    pub intent: IntentKind,
    pub skills: Vec<String>,
    pub locations: Vec<String>,
    pub companies: Vec<String>,
}

impl Query {
    #[must_use]
    pub fn entities(&self) -> Entities {
        Entities {
            skills: self.skills.clone(),
            locations: self.locations.clone(),
            companies: self.companies.clone(),
        }
    }
}

/// Parse free text into a [`Query`].
///
/// Callers reject empty input before getting here; an empty string simply
/// classifies as `General`.
#[must_use]
pub fn classify(text: &str) -> Query {
    let normalized = text.to_lowercase();
    let entities = extract_entities(&normalized);
    let intent = classify_intent(&normalized, &entities);
    tracing::debug!(
        intent = intent.as_str(),
        skills = entities.skills.len(),
        locations = entities.locations.len(),
        companies = entities.companies.len(),
        "classified query"
    );
    Query {
        original: text.to_string(),
        normalized,
        intent,
        skills: entities.skills,
        locations: entities.locations,
        companies: entities.companies,
    }
}
