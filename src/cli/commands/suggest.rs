use clap::Args;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_json};
use crate::error::Result;
use crate::search::suggestions_for;

#[derive(Args, Debug)]
pub struct SuggestArgs {
    /// Partial query
    pub query: String,
}

pub fn run(ctx: &AppContext, args: &SuggestArgs) -> Result<()> {
    let suggestions = suggestions_for(&args.query);

    if ctx.machine_mode() {
        return emit_json(&serde_json::json!({
            "query": args.query,
            "suggestions": suggestions,
        }));
    }

    let mut layout = HumanLayout::new();
    if suggestions.is_empty() {
        layout.push_line(format!("No suggestions for '{}'", args.query));
    } else {
        layout.title("Try asking:");
        for suggestion in &suggestions {
            layout.bullet(suggestion);
        }
    }
    emit_human(layout);
    Ok(())
}
