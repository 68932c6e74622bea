//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use colored::Colorize;

use crate::app::AppContext;
use crate::cli::Commands;
use crate::cli::output::join_or_dash;
use crate::directory::{Candidate, CandidateKind};
use crate::error::Result;
use crate::search::ScoredResult;

pub mod classify;
pub mod projects;
pub mod search;
pub mod serve;
pub mod suggest;

pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Search(args) => search::run(ctx, args),
        Commands::Classify(args) => classify::run(ctx, args),
        Commands::Projects(args) => projects::run(ctx, args),
        Commands::Suggest(args) => suggest::run(ctx, args),
        Commands::Serve(args) => serve::run(ctx, args),
    }
}

/// Print ranked results in human form.
pub(crate) fn print_results(results: &[ScoredResult]) {
    for (i, result) in results.iter().enumerate() {
        let rank = format!("{}.", i + 1);
        let kind = result.kind().as_str();
        let kind_colored = match result.kind() {
            CandidateKind::Member => kind.blue(),
            CandidateKind::Project => kind.green(),
            CandidateKind::Organization => kind.magenta(),
        };

        println!(
            "{:4} {} {} (score: {:.2})",
            rank.dimmed(),
            result.candidate.label().bold(),
            kind_colored,
            result.relevance_score
        );
        if let Some(detail) = detail_line(&result.candidate) {
            println!("     {}", detail.dimmed());
        }
        println!("     {}", join_or_dash(&result.match_reasons));
    }
}

fn detail_line(candidate: &Candidate) -> Option<String> {
    match candidate {
        Candidate::Member(m) => {
            let parts: Vec<&str> = [m.location.as_str(), m.pod.as_str()]
                .into_iter()
                .filter(|s| !s.is_empty())
                .collect();
            (!parts.is_empty()).then(|| parts.join(" | "))
        }
        Candidate::Project(p) => {
            let founders: Vec<String> = p
                .founders
                .iter()
                .map(|f| format!("{} {}", f.first_name, f.last_name))
                .collect();
            (!founders.is_empty()).then(|| format!("founded by {}", founders.join(", ")))
        }
        Candidate::Organization(o) => o.website.clone(),
    }
}
