//! Local smart search.
//!
//! Classifies a query, scores the candidate pool against it and ranks the
//! result. Used directly by the CLI in offline mode and by the service layer
//! whenever the directory backend cannot answer.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                         Query text                             │
//! └────────────────────────────────────────────────────────────────┘
//!                                │
//!                                ▼
//!                ┌───────────────────────────────┐
//!                │  classify (query.rs)          │
//!                │  vocabulary + INTENT_RULES    │
//!                └───────────────────────────────┘
//!                                │ Query { intent, entities }
//!                                ▼
//! ┌──────────────────────────────┐  ┌──────────────────────────────┐
//! │   score (scorer.rs)          │  │   search_projects            │
//! │   members/projects/orgs      │  │   (projects.rs, raw text)    │
//! └──────────────────────────────┘  └──────────────────────────────┘
//!                                │
//!                                ▼
//!                 stable rank by score, truncate
//! ```

pub mod filters;
pub mod projects;
pub mod query;
pub mod scorer;
pub mod suggestions;
pub mod vocabulary;

pub use filters::{ProjectFilters, SearchFilters};
pub use projects::{MAX_PROJECT_RESULTS, search_projects, search_projects_with_limit};
pub use query::{Entities, INTENT_RULES, IntentKind, IntentRule, Query, classify};
pub use scorer::{MAX_RESULTS, ScoredResult, rank, score, score_with_limit};
pub use suggestions::{MAX_SUGGESTIONS, suggestions_for};
