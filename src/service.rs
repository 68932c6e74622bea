//! Request handling shared by the HTTP server and the CLI.
//!
//! The backend is always asked first. Any backend failure is logged and the
//! query is answered locally from the candidate pool instead. Every answered
//! search is reported to a [`SearchTracker`] without waiting on it.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender, TrySendError};
use serde::{Deserialize, Serialize};

use crate::backend::{BackendClient, SearchEvent};
use crate::config::Config;
use crate::directory::{Candidate, CandidatePool, ProjectStage, ProjectType, fixtures};
use crate::error::{AlumniError, Result};
use crate::search::{
    self, MAX_PROJECT_RESULTS, MAX_RESULTS, ProjectFilters, Query, ScoredResult, SearchFilters,
};

/// Where a response's results came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchSource {
    Backend,
    Fallback,
}

impl SearchSource {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Backend => "backend",
            Self::Fallback => "fallback",
        }
    }
}

/// Smart search parameters, as received on the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub session: String,
    #[serde(default)]
    pub pod: String,
}

impl SearchRequest {
    #[must_use]
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: Some(q.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_filters(mut self, filters: &SearchFilters) -> Self {
        self.region.clone_from(&filters.region);
        self.session.clone_from(&filters.session);
        self.pod.clone_from(&filters.pod);
        self
    }

    #[must_use]
    pub fn filters(&self) -> SearchFilters {
        SearchFilters {
            region: self.region.clone(),
            session: self.session.clone(),
            pod: self.pod.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<ScoredResult>,
    pub query: String,
    pub processed_query: Query,
    pub total: usize,
    pub source: SearchSource,
}

/// Project search parameters. Unknown `type`/`stage` values are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSearchRequest {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(rename = "type", default)]
    pub project_type: Option<String>,
    #[serde(default)]
    pub stage: Option<String>,
}

impl ProjectSearchRequest {
    #[must_use]
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: Some(q.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn filters(&self) -> ProjectFilters {
        ProjectFilters {
            project_type: self.project_type.as_deref().and_then(ProjectType::parse),
            stage: self.stage.as_deref().and_then(ProjectStage::parse),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSearchResponse {
    pub results: Vec<ScoredResult>,
    pub query: String,
    pub total: usize,
    pub source: SearchSource,
}

/// How long callers about to exit wait for queued tracking events.
pub const TRACKING_FLUSH_TIMEOUT: Duration = Duration::from_secs(2);

/// Events queued beyond this are dropped with a warning.
const TRACKING_QUEUE_CAPACITY: usize = 256;

/// Receives search analytics. `track` must not block the caller.
pub trait SearchTracker: Send + Sync {
    fn track(&self, event: SearchEvent);

    /// Wait up to `timeout` for already tracked events to be delivered.
    /// Returns false when the wait timed out.
    fn flush(&self, _timeout: Duration) -> bool {
        true
    }
}

/// Drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTracker;

impl SearchTracker for NoopTracker {
    fn track(&self, _event: SearchEvent) {}
}

enum TrackerMessage {
    Event(SearchEvent),
    Flush(Sender<()>),
}

/// Posts events to the backend from a single worker thread.
///
/// Events are delivered in order. The worker exits once the tracker is
/// dropped and the queue is drained.
#[derive(Debug)]
pub struct HttpTracker {
    sender: Sender<TrackerMessage>,
}

impl HttpTracker {
    #[must_use]
    pub fn new(client: Arc<BackendClient>) -> Self {
        let (sender, receiver) = crossbeam_channel::bounded(TRACKING_QUEUE_CAPACITY);
        let spawned = std::thread::Builder::new()
            .name("search-tracking".to_string())
            .spawn(move || run_tracking_worker(&client, &receiver));
        if let Err(err) = spawned {
            tracing::warn!(error = %err, "could not start tracking thread");
        }
        Self { sender }
    }
}

fn run_tracking_worker(client: &BackendClient, receiver: &Receiver<TrackerMessage>) {
    for message in receiver {
        match message {
            TrackerMessage::Event(event) => {
                if let Err(err) = client.track(&event) {
                    tracing::warn!(error = %err, query = %event.query, "search tracking failed");
                }
            }
            TrackerMessage::Flush(done) => {
                let _ = done.send(());
            }
        }
    }
    tracing::trace!("tracking worker stopped");
}

impl SearchTracker for HttpTracker {
    fn track(&self, event: SearchEvent) {
        match self.sender.try_send(TrackerMessage::Event(event)) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                tracing::warn!("tracking queue full, dropping search event");
            }
            Err(TrySendError::Disconnected(_)) => {
                tracing::warn!("tracking worker not running, dropping search event");
            }
        }
    }

    fn flush(&self, timeout: Duration) -> bool {
        let (done, finished) = crossbeam_channel::bounded(1);
        let deadline = Instant::now() + timeout;
        if self
            .sender
            .send_deadline(TrackerMessage::Flush(done), deadline)
            .is_err()
        {
            return false;
        }
        finished.recv_deadline(deadline).is_ok()
    }
}

/// Keeps events in memory.
#[derive(Debug, Default)]
pub struct RecordingTracker {
    events: Mutex<Vec<SearchEvent>>,
}

impl RecordingTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> Vec<SearchEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl SearchTracker for RecordingTracker {
    fn track(&self, event: SearchEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

/// The smart search service.
pub struct SmartSearch {
    backend: Option<Arc<BackendClient>>,
    tracker: Arc<dyn SearchTracker>,
    pool: CandidatePool,
    max_results: usize,
    max_project_results: usize,
}

impl std::fmt::Debug for SmartSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmartSearch")
            .field("backend", &self.backend)
            .field("pool", &self.pool.len())
            .field("max_results", &self.max_results)
            .field("max_project_results", &self.max_project_results)
            .finish_non_exhaustive()
    }
}

impl Default for SmartSearch {
    fn default() -> Self {
        Self::offline()
    }
}

impl SmartSearch {
    /// No backend, no tracking, fixture pool.
    #[must_use]
    pub fn offline() -> Self {
        Self {
            backend: None,
            tracker: Arc::new(NoopTracker),
            pool: fixtures::default_pool(),
            max_results: MAX_RESULTS,
            max_project_results: MAX_PROJECT_RESULTS,
        }
    }

    /// Build the service described by `config`.
    ///
    /// Builds a blocking HTTP client; call from a thread that is not driving
    /// an async runtime.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut service = Self::offline().with_limits(
            config.search.max_results,
            config.search.max_project_results,
        );
        if config.backend.enabled {
            let client = Arc::new(BackendClient::from_config(&config.backend)?);
            if config.tracking.enabled {
                service = service.with_tracker(Arc::new(HttpTracker::new(Arc::clone(&client))));
            }
            service = service.with_backend(client);
        }
        tracing::debug!(service = ?service, "search service ready");
        Ok(service)
    }

    #[must_use]
    pub fn with_backend(mut self, backend: Arc<BackendClient>) -> Self {
        self.backend = Some(backend);
        self
    }

    #[must_use]
    pub fn without_backend(mut self) -> Self {
        self.backend = None;
        self
    }

    #[must_use]
    pub fn with_tracker(mut self, tracker: Arc<dyn SearchTracker>) -> Self {
        self.tracker = tracker;
        self
    }

    #[must_use]
    pub fn with_pool(mut self, pool: CandidatePool) -> Self {
        self.pool = pool;
        self
    }

    /// Limits above [`MAX_RESULTS`] and [`MAX_PROJECT_RESULTS`] are clamped.
    #[must_use]
    pub fn with_limits(mut self, max_results: usize, max_project_results: usize) -> Self {
        self.max_results = max_results.min(MAX_RESULTS);
        self.max_project_results = max_project_results.min(MAX_PROJECT_RESULTS);
        self
    }

    /// Wait up to `timeout` for pending tracking events. Call before the
    /// process exits.
    pub fn flush(&self, timeout: Duration) -> bool {
        let flushed = self.tracker.flush(timeout);
        if !flushed {
            tracing::warn!(?timeout, "tracking events still pending");
        }
        flushed
    }

    #[must_use]
    pub fn has_backend(&self) -> bool {
        self.backend.is_some()
    }

    #[must_use]
    pub const fn pool(&self) -> &CandidatePool {
        &self.pool
    }

    /// Run a smart search.
    pub fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        let text = required_query(request.q.as_deref())?;
        let filters = request.filters();
        let processed = search::classify(text);

        let (results, source) = match self.ask_backend(|backend| backend.search(&processed, &filters)) {
            Some(results) => (results, SearchSource::Backend),
            None => (
                search::score_with_limit(&processed, &self.pool, self.max_results),
                SearchSource::Fallback,
            ),
        };

        tracing::info!(
            intent = processed.intent.as_str(),
            results = results.len(),
            source = source.as_str(),
            "smart search"
        );
        self.tracker
            .track(SearchEvent::smart(text, &filters, results.len()));

        Ok(SearchResponse {
            total: results.len(),
            results,
            query: text.to_string(),
            processed_query: processed,
            source,
        })
    }

    /// Run a project-only search.
    pub fn project_search(&self, request: &ProjectSearchRequest) -> Result<ProjectSearchResponse> {
        let text = required_query(request.q.as_deref())?;
        let filters = request.filters();

        let processed = search::classify(text);
        let backend = self
            .ask_backend(|backend| backend.search_projects(&processed, &filters))
            .map(|results| {
                let mut projects: Vec<ScoredResult> = results
                    .into_iter()
                    .filter(|result| {
                        matches!(&result.candidate, Candidate::Project(project) if filters.matches(project))
                    })
                    .collect();
                projects.truncate(self.max_project_results);
                projects
            });

        let (results, source) = match backend {
            Some(results) => (results, SearchSource::Backend),
            None => (
                search::search_projects_with_limit(
                    text,
                    &self.pool.projects,
                    &filters,
                    self.max_project_results,
                ),
                SearchSource::Fallback,
            ),
        };

        tracing::info!(
            results = results.len(),
            source = source.as_str(),
            "project search"
        );
        self.tracker.track(SearchEvent::project(text, results.len()));

        Ok(ProjectSearchResponse {
            total: results.len(),
            results,
            query: text.to_string(),
            source,
        })
    }

    /// Canned suggestions for a partial query.
    #[must_use]
    pub fn suggestions(&self, partial: &str) -> Vec<String> {
        search::suggestions_for(partial)
    }

    fn ask_backend<F>(&self, search: F) -> Option<Vec<ScoredResult>>
    where
        F: FnOnce(&BackendClient) -> Result<Vec<ScoredResult>>,
    {
        let backend = self.backend.as_ref()?;
        match search(backend) {
            Ok(results) => Some(results),
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    code = %err.code(),
                    "backend search failed, using local fallback"
                );
                None
            }
        }
    }
}

fn required_query(q: Option<&str>) -> Result<&str> {
    match q {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(AlumniError::MissingParameter("q".to_string())),
    }
}
