//! Keyword search over projects.
//!
//! Used by project search when the backend is down. Unlike the smart-search
//! scorer this works on the raw query text: each rule fires when the query
//! mentions a keyword and the project has the matching trait.

use crate::directory::{Candidate, Project, ProjectStage, ProjectType};

use super::filters::ProjectFilters;
use super::scorer::{ScoredResult, rank};

/// Maximum number of results returned by [`search_projects`].
pub const MAX_PROJECT_RESULTS: usize = 5;

const TEXT_WEIGHT: f64 = 0.3;
const TRAIT_WEIGHT: f64 = 0.2;

/// What a project rule inspects.
#[derive(Debug, Clone, Copy)]
enum ProjectSignal {
    /// Project text (title, looking-for, info) contains the term.
    Text(&'static str),
    Type(ProjectType),
    Stage(ProjectStage),
}

#[derive(Debug, Clone, Copy)]
struct ProjectRule {
    keyword: &'static str,
    signal: ProjectSignal,
    weight: f64,
    reason: &'static str,
}

const PROJECT_RULES: &[ProjectRule] = &[
    ProjectRule {
        keyword: "marketing",
        signal: ProjectSignal::Text("marketing"),
        weight: TEXT_WEIGHT,
        reason: "Looking for marketing help",
    },
    ProjectRule {
        keyword: "developer",
        signal: ProjectSignal::Text("developer"),
        weight: TEXT_WEIGHT,
        reason: "Looking for developers",
    },
    ProjectRule {
        keyword: "design",
        signal: ProjectSignal::Text("design"),
        weight: TEXT_WEIGHT,
        reason: "Looking for design talent",
    },
    ProjectRule {
        keyword: "startup",
        signal: ProjectSignal::Type(ProjectType::Startup),
        weight: TRAIT_WEIGHT,
        reason: "Startup project",
    },
    ProjectRule {
        keyword: "mvp",
        signal: ProjectSignal::Stage(ProjectStage::Mvp),
        weight: TRAIT_WEIGHT,
        reason: "MVP stage project",
    },
    ProjectRule {
        keyword: "non-profit",
        signal: ProjectSignal::Type(ProjectType::NonProfit),
        weight: TRAIT_WEIGHT,
        reason: "Non-profit project",
    },
];

fn project_text(project: &Project) -> String {
    format!(
        "{} {} {}",
        project.title, project.what_are_they_looking_for, project.additional_info
    )
    .to_lowercase()
}

fn score_project(normalized: &str, project: &Project) -> Option<ScoredResult> {
    let text = project_text(project);
    let mut score = 0.0;
    let mut reasons = Vec::new();

    for rule in PROJECT_RULES {
        if !normalized.contains(rule.keyword) {
            continue;
        }
        let hit = match rule.signal {
            ProjectSignal::Text(term) => text.contains(term),
            ProjectSignal::Type(project_type) => project.project_type == project_type,
            ProjectSignal::Stage(stage) => project.stage == stage,
        };
        if hit {
            score += rule.weight;
            reasons.push(rule.reason.to_string());
        }
    }

    (score > 0.0).then(|| ScoredResult {
        candidate: Candidate::Project(project.clone()),
        relevance_score: score,
        match_reasons: reasons,
    })
}

/// Rank `projects` against free text, after applying `filters`.
#[must_use]
pub fn search_projects(
    text: &str,
    projects: &[Project],
    filters: &ProjectFilters,
) -> Vec<ScoredResult> {
    search_projects_with_limit(text, projects, filters, MAX_PROJECT_RESULTS)
}

#[must_use]
pub fn search_projects_with_limit(
    text: &str,
    projects: &[Project],
    filters: &ProjectFilters,
    limit: usize,
) -> Vec<ScoredResult> {
    let normalized = text.to_lowercase();
    let mut results: Vec<ScoredResult> = filters
        .apply(projects)
        .into_iter()
        .filter_map(|project| score_project(&normalized, project))
        .collect();
    rank(&mut results);
    results.truncate(limit);
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::fixtures::default_pool;

    fn titles(results: &[ScoredResult]) -> Vec<String> {
        results.iter().map(|r| r.candidate.label()).collect()
    }

    #[test]
    fn developer_and_design_match_two_projects() {
        let pool = default_pool();
        let results = search_projects(
            "need a developer and design help",
            &pool.projects,
            &ProjectFilters::new(),
        );
        // TeachShare mentions neither developers nor design
        assert_eq!(
            titles(&results),
            vec!["Founder Dashboard".to_string(), "EcoConnect".to_string()]
        );
        assert_eq!(
            results[0].match_reasons,
            vec![
                "Looking for developers".to_string(),
                "Looking for design talent".to_string()
            ]
        );
    }

    #[test]
    fn startup_mvp_rewards_type_and_stage() {
        let pool = default_pool();
        let results = search_projects("startup at mvp", &pool.projects, &ProjectFilters::new());
        assert_eq!(results[0].candidate.label(), "Founder Dashboard");
        assert!((results[0].relevance_score - 0.4).abs() < 1e-9);
        assert_eq!(results[1].candidate.label(), "TeachShare");
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn non_profit_keyword_needs_hyphen() {
        let pool = default_pool();
        let hyphen = search_projects("non-profit", &pool.projects, &ProjectFilters::new());
        assert_eq!(titles(&hyphen), vec!["EcoConnect".to_string()]);
        assert!(search_projects("nonprofit", &pool.projects, &ProjectFilters::new()).is_empty());
    }

    #[test]
    fn filters_apply_before_scoring() {
        let pool = default_pool();
        let filters = ProjectFilters::new().with_type(ProjectType::NonProfit);
        let results = search_projects("developer", &pool.projects, &filters);
        assert_eq!(titles(&results), vec!["EcoConnect".to_string()]);
    }

    #[test]
    fn limit_truncates_after_ranking() {
        let pool = default_pool();
        let results =
            search_projects_with_limit("developer design", &pool.projects, &ProjectFilters::new(), 1);
        assert_eq!(titles(&results), vec!["Founder Dashboard".to_string()]);
    }

    #[test]
    fn unrelated_query_yields_nothing() {
        let pool = default_pool();
        assert!(search_projects("gardening", &pool.projects, &ProjectFilters::new()).is_empty());
    }
}
