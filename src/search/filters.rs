//! Request filters.
//!
//! Member filters (region, session, pod) are forwarded to the backend and
//! echoed into analytics untouched; the local scorer does not consume them.
//! Project filters (type, stage) narrow the pool before project keyword
//! search.

use serde::{Deserialize, Serialize};

use crate::directory::{Project, ProjectStage, ProjectType};

/// Pass-through member filters for smart search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub session: String,
    #[serde(default)]
    pub pod: String,
}

impl SearchFilters {
    /// Create new empty filters
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    #[must_use]
    pub fn with_session(mut self, session: impl Into<String>) -> Self {
        self.session = session.into();
        self
    }

    #[must_use]
    pub fn with_pod(mut self, pod: impl Into<String>) -> Self {
        self.pod = pod.into();
        self
    }

    /// Check if any filters are set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.region.is_empty() && self.session.is_empty() && self.pod.is_empty()
    }

    /// Non-empty filters as query parameters, in a fixed order.
    #[must_use]
    pub fn as_params(&self) -> Vec<(&'static str, String)> {
        [
            ("region", &self.region),
            ("session", &self.session),
            ("pod", &self.pod),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| (key, value.clone()))
        .collect()
    }
}

/// Filters for project search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFilters {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub project_type: Option<ProjectType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<ProjectStage>,
}

impl ProjectFilters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_type(mut self, project_type: ProjectType) -> Self {
        self.project_type = Some(project_type);
        self
    }

    #[must_use]
    pub const fn with_stage(mut self, stage: ProjectStage) -> Self {
        self.stage = Some(stage);
        self
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.project_type.is_none() && self.stage.is_none()
    }

    /// Set filters as backend query parameters, using the backend codes.
    #[must_use]
    pub fn as_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(project_type) = self.project_type {
            params.push(("projectType", project_type.code().to_string()));
        }
        if let Some(stage) = self.stage {
            params.push(("projectStage", stage.code().to_string()));
        }
        params
    }

    /// Check if a project passes all filters
    #[must_use]
    pub fn matches(&self, project: &Project) -> bool {
        if let Some(project_type) = self.project_type {
            if project.project_type != project_type {
                return false;
            }
        }
        if let Some(stage) = self.stage {
            if project.stage != stage {
                return false;
            }
        }
        true
    }

    /// Filter a project list, keeping order.
    #[must_use]
    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }
}
