//! Directory records: members, projects and organizations.
//!
//! Records are plain read-only values. They arrive either from the
//! directory backend (JSON) or from [`fixtures`], and the scorer only ever
//! borrows them.

pub mod fixtures;

use serde::{Deserialize, Deserializer, Serialize};

/// A network member (alumnus).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    /// Region code (NA, SA, EU, AS, AF, OC, AN).
    #[serde(default)]
    pub region: String,
    /// Free-text city/country.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub location: String,
    #[serde(default)]
    pub session: String,
    /// Sponsoring company the member was grouped under.
    #[serde(default)]
    pub pod: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internship: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub skills: String,
    /// Free-text bio.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub additional_info: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl Member {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Founder reference embedded in a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Founder {
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Venture type. The backend sends short codes, older payloads send the
/// display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectType {
    #[serde(rename = "ST", alias = "Startup", alias = "startup")]
    Startup,
    #[serde(
        rename = "NP",
        alias = "Non Profit",
        alias = "Non-Profit",
        alias = "nonprofit"
    )]
    NonProfit,
}

impl ProjectType {
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "st" | "startup" => Some(Self::Startup),
            "np" | "non profit" | "non-profit" | "nonprofit" => Some(Self::NonProfit),
            _ => None,
        }
    }

    /// Backend short code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Startup => "ST",
            Self::NonProfit => "NP",
        }
    }
}

/// Venture stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStage {
    /// Just an idea
    #[serde(rename = "J", alias = "Idea", alias = "idea")]
    Idea,
    /// Research / MVP / early development
    #[serde(rename = "MVP", alias = "mvp")]
    Mvp,
    #[serde(rename = "L", alias = "Launched", alias = "launched")]
    Launched,
}

impl ProjectStage {
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "j" | "idea" => Some(Self::Idea),
            "mvp" => Some(Self::Mvp),
            "l" | "launched" => Some(Self::Launched),
            _ => None,
        }
    }

    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Idea => "J",
            Self::Mvp => "MVP",
            Self::Launched => "L",
        }
    }
}

/// A startup or non-profit venture run by members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub title: String,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub stage: ProjectStage,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub what_are_they_looking_for: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub additional_info: String,
    #[serde(default)]
    pub founders: Vec<Founder>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

/// A company, community, event or other organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub org_type: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// Candidate kind tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateKind {
    Member,
    Project,
    Organization,
}

impl CandidateKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Project => "project",
            Self::Organization => "organization",
        }
    }
}

/// A scored candidate, tagged by kind.
///
/// Serializes adjacently tagged as `{"type": "member", "data": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Candidate {
    Member(Member),
    Project(Project),
    Organization(Organization),
}

impl Candidate {
    #[must_use]
    pub const fn kind(&self) -> CandidateKind {
        match self {
            Self::Member(_) => CandidateKind::Member,
            Self::Project(_) => CandidateKind::Project,
            Self::Organization(_) => CandidateKind::Organization,
        }
    }

    /// Display label: member full name, project title or organization name.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Member(m) => m.full_name(),
            Self::Project(p) => p.title.clone(),
            Self::Organization(o) => o.name.clone(),
        }
    }
}

/// The candidate set a search is scored against, partitioned by kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidatePool {
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub organizations: Vec<Organization>,
}

impl CandidatePool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty() && self.projects.is_empty() && self.organizations.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len() + self.projects.len() + self.organizations.len()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn member_deserializes_with_null_location() {
        let member: Member = serde_json::from_value(json!({
            "id": 7,
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@example.com",
            "region": "EU",
            "location": null,
            "session": "S2",
            "pod": "Google",
            "skills": "Math, Engineering",
            "additional_info": "Analytical engines"
        }))
        .unwrap();
        assert_eq!(member.location, "");
        assert!(member.internship.is_none());
        assert_eq!(member.full_name(), "Ada Lovelace");
    }

    #[test]
    fn project_accepts_codes_and_display_names() {
        let coded: Project = serde_json::from_value(json!({
            "id": 1, "title": "A", "type": "ST", "stage": "MVP",
            "what_are_they_looking_for": "", "additional_info": ""
        }))
        .unwrap();
        let named: Project = serde_json::from_value(json!({
            "id": 2, "title": "B", "type": "Startup", "stage": "Launched",
            "what_are_they_looking_for": "", "additional_info": ""
        }))
        .unwrap();
        assert_eq!(coded.project_type, ProjectType::Startup);
        assert_eq!(coded.stage, ProjectStage::Mvp);
        assert_eq!(named.project_type, ProjectType::Startup);
        assert_eq!(named.stage, ProjectStage::Launched);
    }

    #[test]
    fn project_serializes_short_codes() {
        let project = &fixtures::default_pool().projects[2];
        let value = serde_json::to_value(project).unwrap();
        assert_eq!(value["type"], "NP");
        assert_eq!(value["stage"], "J");
    }

    #[test]
    fn type_and_stage_parse_is_case_insensitive() {
        assert_eq!(ProjectType::parse("np"), Some(ProjectType::NonProfit));
        assert_eq!(ProjectType::parse(" Startup "), Some(ProjectType::Startup));
        assert_eq!(ProjectType::parse("cooperative"), None);
        assert_eq!(ProjectStage::parse("j"), Some(ProjectStage::Idea));
        assert_eq!(ProjectStage::parse("MVP"), Some(ProjectStage::Mvp));
        assert_eq!(ProjectStage::parse("later"), None);
    }

    #[test]
    fn candidate_is_adjacently_tagged() {
        let org = fixtures::default_pool().organizations[0].clone();
        let value = serde_json::to_value(Candidate::Organization(org)).unwrap();
        assert_eq!(value["type"], "organization");
        assert_eq!(value["data"]["name"], "FinTech Nexus");

        let back: Candidate = serde_json::from_value(value).unwrap();
        assert_eq!(back.kind(), CandidateKind::Organization);
        assert_eq!(back.label(), "FinTech Nexus");
    }

    #[test]
    fn empty_pool_reports_empty() {
        let pool = CandidatePool::new();
        assert!(pool.is_empty());
        assert_eq!(pool.len(), 0);
        assert_eq!(fixtures::default_pool().len(), 14);
    }
}
