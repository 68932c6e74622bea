use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::output::emit_json;
use crate::error::{AlumniError, Result};
use crate::service::{ProjectSearchRequest, TRACKING_FLUSH_TIMEOUT};

#[derive(Args, Debug)]
pub struct ProjectsArgs {
    /// What you are looking for, e.g. "startup needing developers"
    pub query: String,

    /// Project type: startup (ST) or non-profit (NP)
    #[arg(long = "type", value_name = "TYPE")]
    pub project_type: Option<String>,

    /// Project stage: idea (J), mvp (MVP) or launched (L)
    #[arg(long)]
    pub stage: Option<String>,

    /// Skip the backend and search the bundled directory
    #[arg(long)]
    pub offline: bool,
}

pub fn run(ctx: &AppContext, args: &ProjectsArgs) -> Result<()> {
    let request = ProjectSearchRequest {
        q: Some(args.query.clone()),
        project_type: args.project_type.clone(),
        stage: args.stage.clone(),
    };
    validate_filters(&request)?;

    let service = ctx.search_service(args.offline)?;
    let response = service.project_search(&request)?;
    service.flush(TRACKING_FLUSH_TIMEOUT);

    if ctx.machine_mode() {
        return emit_json(&response);
    }

    if response.results.is_empty() {
        println!(
            "{} No projects found for '{}'",
            "!".yellow(),
            args.query.cyan()
        );
        return Ok(());
    }

    println!(
        "{} projects for '{}' (source: {}):",
        response.total.to_string().bold(),
        args.query.cyan(),
        response.source.as_str()
    );
    println!();
    super::print_results(&response.results);
    Ok(())
}

/// The HTTP route ignores unknown filter values; on the command line they
/// are almost always typos.
fn validate_filters(request: &ProjectSearchRequest) -> Result<()> {
    let filters = request.filters();
    if request.project_type.is_some() && filters.project_type.is_none() {
        return Err(AlumniError::Config(format!(
            "unknown project type '{}'; use startup or non-profit",
            request.project_type.as_deref().unwrap_or_default()
        )));
    }
    if request.stage.is_some() && filters.stage.is_none() {
        return Err(AlumniError::Config(format!(
            "unknown project stage '{}'; use idea, mvp or launched",
            request.stage.as_deref().unwrap_or_default()
        )));
    }
    Ok(())
}
