//! HTTP API.
//!
//! ```text
//! GET /api/search?q=&region=&session=&pod=   smart search
//! GET /api/project-search?q=&type=&stage=    project search
//! GET /api/suggestions?q=                    canned suggestions
//! GET /health                                liveness
//! ```
//!
//! Service calls may block on the directory backend, so handlers run them on
//! the blocking pool.

mod errors;

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{AlumniError, Result};
use crate::service::{
    ProjectSearchRequest, ProjectSearchResponse, SearchRequest, SearchResponse, SmartSearch,
    TRACKING_FLUSH_TIMEOUT,
};

pub use errors::ApiError;

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub service: Arc<SmartSearch>,
}

impl AppState {
    #[must_use]
    pub const fn new(service: Arc<SmartSearch>) -> Self {
        Self { service }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SuggestionsQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub backend: bool,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/search", get(search))
        .route("/api/project-search", get(project_search))
        .route("/api/suggestions", get(suggestions))
        .route("/health", get(health))
        .with_state(state)
}

async fn run_blocking<T, F>(service: Arc<SmartSearch>, f: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce(&SmartSearch) -> Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(move || f(&service))
        .await
        .map_err(|err| AlumniError::Server(format!("search task failed: {err}")))?
}

pub async fn search(
    State(state): State<AppState>,
    Query(request): Query<SearchRequest>,
) -> std::result::Result<Json<SearchResponse>, ApiError> {
    run_blocking(Arc::clone(&state.service), move |service| {
        service.search(&request)
    })
    .await
    .map(Json)
    .map_err(|err| ApiError::from_service(&err, "Search failed"))
}

pub async fn project_search(
    State(state): State<AppState>,
    Query(request): Query<ProjectSearchRequest>,
) -> std::result::Result<Json<ProjectSearchResponse>, ApiError> {
    run_blocking(Arc::clone(&state.service), move |service| {
        service.project_search(&request)
    })
    .await
    .map(Json)
    .map_err(|err| ApiError::from_service(&err, "Project search failed"))
}

pub async fn suggestions(
    State(state): State<AppState>,
    Query(query): Query<SuggestionsQuery>,
) -> Json<SuggestionsResponse> {
    Json(SuggestionsResponse {
        suggestions: state.service.suggestions(&query.q),
    })
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        backend: state.service.has_backend(),
    })
}

/// Serve the API on `config.server.bind` until SIGINT/SIGTERM.
pub fn serve(config: &Config) -> Result<()> {
    // The blocking backend client must be built and dropped outside the runtime.
    let service = Arc::new(SmartSearch::from_config(config)?);
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|err| AlumniError::Server(format!("start runtime: {err}")))?;

    let outcome = runtime.block_on(listen(&config.server.bind, Arc::clone(&service)));
    drop(runtime);
    service.flush(TRACKING_FLUSH_TIMEOUT);
    drop(service);
    outcome
}

async fn listen(bind: &str, service: Arc<SmartSearch>) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .map_err(|err| AlumniError::Server(format!("bind {bind}: {err}")))?;
    tracing::info!(bind, backend = service.has_backend(), "listening");

    axum::serve(listener, router(AppState::new(service)))
        .with_graceful_shutdown(wait_for_signal())
        .await
        .map_err(|err| AlumniError::Server(format!("serve: {err}")))
}

async fn wait_for_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received SIGINT"),
        () = terminate => tracing::info!("Received SIGTERM"),
    }
}
