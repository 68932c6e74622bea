//! Client for the directory backend.
//!
//! The backend owns the real member/project/organization data and its own
//! search endpoint. Everything here is blocking; async callers hop onto a
//! blocking thread first.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::BackendConfig;
use crate::error::{AlumniError, Result};
use crate::search::{IntentKind, ProjectFilters, Query, ScoredResult, SearchFilters};

const SEARCH_PATH: &str = "/api/search/search/";
const TRACKING_PATH: &str = "/api/search-tracking/";

/// Analytics record sent after every search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEvent {
    pub search_type: String,
    pub query: String,
    pub filters: SearchFilters,
    pub results_count: usize,
}

impl SearchEvent {
    #[must_use]
    pub fn smart(query: &str, filters: &SearchFilters, results_count: usize) -> Self {
        Self {
            search_type: "smart".to_string(),
            query: query.to_string(),
            filters: filters.clone(),
            results_count,
        }
    }

    #[must_use]
    pub fn project(query: &str, results_count: usize) -> Self {
        Self {
            search_type: "project".to_string(),
            query: query.to_string(),
            filters: SearchFilters::default(),
            results_count,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct SearchEnvelope {
    #[serde(default)]
    results: Vec<Value>,
}

pub struct BackendClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl std::fmt::Debug for BackendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl BackendClient {
    /// Build a client from config. Errors when the backend is disabled.
    pub fn from_config(config: &BackendConfig) -> Result<Self> {
        if !config.enabled {
            return Err(AlumniError::Config(
                "backend is disabled; set [backend].enabled=true".to_string(),
            ));
        }
        if config.base_url.trim().is_empty() {
            return Err(AlumniError::MissingConfig(
                "backend base_url is empty; set [backend].base_url".to_string(),
            ));
        }
        Self::new(&config.base_url, config.timeout())
    }

    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout.max(Duration::from_secs(1)))
            .build()
            .map_err(|err| AlumniError::Config(format!("backend http client: {err}")))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Ask the backend to run the search.
    ///
    /// Entries of `results` that do not parse as scored results are skipped.
    pub fn search(&self, query: &Query, filters: &SearchFilters) -> Result<Vec<ScoredResult>> {
        self.fetch(search_params(query, filters))
    }

    /// Ask the backend for projects. Always sent as `find_project`, whatever
    /// the free text classifies as, with the type/stage filters attached.
    pub fn search_projects(
        &self,
        query: &Query,
        filters: &ProjectFilters,
    ) -> Result<Vec<ScoredResult>> {
        self.fetch(project_search_params(query, filters))
    }

    fn fetch(&self, params: Vec<(&'static str, String)>) -> Result<Vec<ScoredResult>> {
        let url = self.url(SEARCH_PATH);
        let request_url = reqwest::Url::parse_with_params(&url, params)
            .map_err(|err| AlumniError::Config(format!("backend url {url}: {err}")))?;

        let response = self
            .client
            .get(request_url)
            .send()
            .map_err(|err| AlumniError::BackendUnavailable(format!("search request failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AlumniError::BackendStatus {
                status: status.as_u16(),
                url,
            });
        }

        let envelope: SearchEnvelope = response
            .json()
            .map_err(|err| AlumniError::InvalidResponse(format!("search response parse: {err}")))?;

        let total = envelope.results.len();
        let results: Vec<ScoredResult> = envelope
            .results
            .into_iter()
            .filter_map(|raw| match serde_json::from_value(raw) {
                Ok(result) => Some(result),
                Err(err) => {
                    tracing::warn!(error = %err, "skipping malformed backend result");
                    None
                }
            })
            .collect();
        tracing::debug!(received = total, kept = results.len(), "backend search");
        Ok(results)
    }

    /// Record a search event.
    pub fn track(&self, event: &SearchEvent) -> Result<()> {
        let url = self.url(TRACKING_PATH);
        let response = self
            .client
            .post(&url)
            .json(event)
            .send()
            .map_err(|err| {
                AlumniError::BackendUnavailable(format!("tracking request failed: {err}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AlumniError::BackendStatus {
                status: status.as_u16(),
                url,
            });
        }
        Ok(())
    }
}

fn search_params(query: &Query, filters: &SearchFilters) -> Vec<(&'static str, String)> {
    let mut params = query_params(query, query.intent);
    params.extend(filters.as_params());
    params
}

fn project_search_params(query: &Query, filters: &ProjectFilters) -> Vec<(&'static str, String)> {
    let mut params = query_params(query, IntentKind::FindProject);
    params.extend(filters.as_params());
    params
}

fn query_params(query: &Query, intent: IntentKind) -> Vec<(&'static str, String)> {
    vec![
        ("q", query.original.clone()),
        ("intent", intent.as_str().to_string()),
        ("skills", query.skills.join(",")),
        ("locations", query.locations.join(",")),
        ("companies", query.companies.join(",")),
    ]
}
