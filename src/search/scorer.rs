//! Relevance scoring for classified queries.
//!
//! Every signal adds a fixed weight and a reason string. Scores are sums of
//! non-negative contributions, so a candidate either matched something or
//! is dropped.
//!
//! | Kind         | Signal                                       | Weight |
//! |--------------|----------------------------------------------|--------|
//! | member       | skill term in `skills`                       | 0.3    |
//! | member       | location term in `location`                  | 0.4    |
//! | member       | company term in `pod`                        | 0.5    |
//! | member       | company term in `additional_info`            | 0.5    |
//! | project      | skill term in looking-for + additional info  | 0.3    |
//! | organization | company term in `name`                       | 0.8    |
//! | organization | company term in `description`                | 0.8    |
//!
//! The two member company checks (and the two organization checks) are
//! independent: a term present in both fields counts twice.

use std::cmp::Ordering;

use serde::de::Error as _;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::directory::{
    Candidate, CandidateKind, CandidatePool, Member, Organization, Project,
};

use super::query::Query;

/// Maximum number of results returned by [`score`].
pub const MAX_RESULTS: usize = 10;

pub const MEMBER_SKILL_WEIGHT: f64 = 0.3;
pub const MEMBER_LOCATION_WEIGHT: f64 = 0.4;
pub const MEMBER_COMPANY_WEIGHT: f64 = 0.5;
pub const PROJECT_SKILL_WEIGHT: f64 = 0.3;
pub const ORGANIZATION_COMPANY_WEIGHT: f64 = 0.8;

/// A candidate with its relevance score and match explanations.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredResult {
    pub candidate: Candidate,
    pub relevance_score: f64,
    pub match_reasons: Vec<String>,
}

impl ScoredResult {
    #[must_use]
    pub const fn kind(&self) -> CandidateKind {
        self.candidate.kind()
    }

    /// Reasons joined the way the API has always rendered them.
    #[must_use]
    pub fn match_reason(&self) -> String {
        self.match_reasons.join(", ")
    }
}

impl Serialize for ScoredResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ScoredResult", 5)?;
        state.serialize_field("type", &self.kind())?;
        match &self.candidate {
            Candidate::Member(m) => state.serialize_field("data", m)?,
            Candidate::Project(p) => state.serialize_field("data", p)?,
            Candidate::Organization(o) => state.serialize_field("data", o)?,
        }
        state.serialize_field("relevance_score", &self.relevance_score)?;
        state.serialize_field("match_reason", &self.match_reason())?;
        state.serialize_field("match_reasons", &self.match_reasons)?;
        state.end()
    }
}

/// Backend payloads may omit scores and reasons, or only carry the joined
/// `match_reason` string.
#[derive(Deserialize)]
struct RawScoredResult {
    #[serde(rename = "type")]
    kind: CandidateKind,
    data: serde_json::Value,
    #[serde(default)]
    relevance_score: Option<f64>,
    #[serde(default)]
    match_reason: Option<String>,
    #[serde(default)]
    match_reasons: Option<Vec<String>>,
}

impl<'de> Deserialize<'de> for ScoredResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawScoredResult::deserialize(deserializer)?;
        let candidate = match raw.kind {
            CandidateKind::Member => serde_json::from_value(raw.data).map(Candidate::Member),
            CandidateKind::Project => serde_json::from_value(raw.data).map(Candidate::Project),
            CandidateKind::Organization => {
                serde_json::from_value(raw.data).map(Candidate::Organization)
            }
        }
        .map_err(D::Error::custom)?;

        let match_reasons = raw.match_reasons.unwrap_or_else(|| {
            raw.match_reason
                .map(|joined| {
                    joined
                        .split(", ")
                        .filter(|r| !r.is_empty())
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_default()
        });

        Ok(Self {
            candidate,
            relevance_score: raw.relevance_score.unwrap_or(0.0).max(0.0),
            match_reasons,
        })
    }
}

/// Running score for one candidate.
#[derive(Debug, Default)]
struct Tally {
    score: f64,
    reasons: Vec<String>,
}

impl Tally {
    fn add(&mut self, weight: f64, reason: String) {
        self.score += weight;
        self.reasons.push(reason);
    }

    fn finish(self, candidate: Candidate) -> Option<ScoredResult> {
        (self.score > 0.0).then(|| ScoredResult {
            candidate,
            relevance_score: self.score,
            match_reasons: self.reasons,
        })
    }
}

fn score_member(query: &Query, member: &Member) -> Option<ScoredResult> {
    let mut tally = Tally::default();

    let skills = member.skills.to_lowercase();
    for skill in &query.skills {
        if skills.contains(skill.as_str()) {
            tally.add(MEMBER_SKILL_WEIGHT, format!("Has {skill} skills"));
        }
    }

    let location = member.location.to_lowercase();
    for place in &query.locations {
        if location.contains(place.as_str()) {
            tally.add(MEMBER_LOCATION_WEIGHT, format!("Located in {place}"));
        }
    }

    let pod = member.pod.to_lowercase();
    let bio = member.additional_info.to_lowercase();
    for company in &query.companies {
        if pod.contains(company.as_str()) {
            tally.add(MEMBER_COMPANY_WEIGHT, format!("Connected to {company}"));
        }
        if bio.contains(company.as_str()) {
            tally.add(MEMBER_COMPANY_WEIGHT, format!("Connected to {company}"));
        }
    }

    tally.finish(Candidate::Member(member.clone()))
}

fn score_project(query: &Query, project: &Project) -> Option<ScoredResult> {
    let mut tally = Tally::default();

    let text = format!(
        "{} {}",
        project.what_are_they_looking_for, project.additional_info
    )
    .to_lowercase();
    for skill in &query.skills {
        if text.contains(skill.as_str()) {
            tally.add(PROJECT_SKILL_WEIGHT, format!("Looking for {skill} skills"));
        }
    }

    tally.finish(Candidate::Project(project.clone()))
}

fn score_organization(query: &Query, org: &Organization) -> Option<ScoredResult> {
    let mut tally = Tally::default();

    let name = org.name.to_lowercase();
    let description = org.description.to_lowercase();
    for company in &query.companies {
        if name.contains(company.as_str()) {
            tally.add(ORGANIZATION_COMPANY_WEIGHT, format!("Matches {company}"));
        }
        if description.contains(company.as_str()) {
            tally.add(ORGANIZATION_COMPANY_WEIGHT, format!("Matches {company}"));
        }
    }

    tally.finish(Candidate::Organization(org.clone()))
}

/// Sort descending by score, keeping input order for ties.
pub fn rank(results: &mut [ScoredResult]) {
    results.sort_by(|a, b| {
        b.relevance_score
            .partial_cmp(&a.relevance_score)
            .unwrap_or(Ordering::Equal)
    });
}

/// Score the pool against a classified query, returning the top
/// [`MAX_RESULTS`].
#[must_use]
pub fn score(query: &Query, pool: &CandidatePool) -> Vec<ScoredResult> {
    score_with_limit(query, pool, MAX_RESULTS)
}

/// Like [`score`] with an explicit result limit.
#[must_use]
pub fn score_with_limit(query: &Query, pool: &CandidatePool, limit: usize) -> Vec<ScoredResult> {
    let mut results = Vec::new();

    for kind in query.intent.target_kinds() {
        match kind {
            CandidateKind::Member => results.extend(
                pool.members
                    .iter()
                    .filter_map(|member| score_member(query, member)),
            ),
            CandidateKind::Project => results.extend(
                pool.projects
                    .iter()
                    .filter_map(|project| score_project(query, project)),
            ),
            CandidateKind::Organization => results.extend(
                pool.organizations
                    .iter()
                    .filter_map(|org| score_organization(query, org)),
            ),
        }
    }

    rank(&mut results);
    results.truncate(limit);

    tracing::debug!(
        intent = query.intent.as_str(),
        pool = pool.len(),
        matched = results.len(),
        "scored candidates"
    );
    results
}
