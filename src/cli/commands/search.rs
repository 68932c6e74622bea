//! alumni search - Smart search over the directory
//!
//! Asks the directory backend unless `--offline` is given, and falls back
//! to the bundled sample directory when the backend cannot answer.

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::output::emit_json;
use crate::error::Result;
use crate::search::SearchFilters;
use crate::service::{SearchRequest, SearchSource, TRACKING_FLUSH_TIMEOUT};

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query, e.g. "who is in Boston?"
    pub query: String,

    /// Filter by region code (NA, SA, EU, AS, AF, OC, AN)
    #[arg(long)]
    pub region: Option<String>,

    /// Filter by session
    #[arg(long)]
    pub session: Option<String>,

    /// Filter by pod
    #[arg(long)]
    pub pod: Option<String>,

    /// Skip the backend and search the bundled directory
    #[arg(long)]
    pub offline: bool,
}

impl SearchArgs {
    fn filters(&self) -> SearchFilters {
        let mut filters = SearchFilters::new();
        if let Some(region) = &self.region {
            filters = filters.with_region(region);
        }
        if let Some(session) = &self.session {
            filters = filters.with_session(session);
        }
        if let Some(pod) = &self.pod {
            filters = filters.with_pod(pod);
        }
        filters
    }
}

pub fn run(ctx: &AppContext, args: &SearchArgs) -> Result<()> {
    let service = ctx.search_service(args.offline)?;
    let request = SearchRequest::new(&args.query).with_filters(&args.filters());
    let response = service.search(&request)?;
    service.flush(TRACKING_FLUSH_TIMEOUT);

    if ctx.machine_mode() {
        return emit_json(&response);
    }

    if response.results.is_empty() {
        println!(
            "{} No matches for '{}' (intent: {})",
            "!".yellow(),
            args.query.cyan(),
            response.processed_query.intent
        );
        println!();
        println!("Try:");
        println!("  - Naming a skill, city or company");
        println!("  - Starting with \"who\" to look for people");
        return Ok(());
    }

    let source = match response.source {
        SearchSource::Backend => response.source.as_str().green(),
        SearchSource::Fallback => response.source.as_str().yellow(),
    };
    println!(
        "{} results for '{}' (intent: {}, source: {}):",
        response.total.to_string().bold(),
        args.query.cyan(),
        response.processed_query.intent,
        source
    );
    println!();
    super::print_results(&response.results);
    Ok(())
}
