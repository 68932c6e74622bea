use clap::Args;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_json, join_or_dash};
use crate::error::{AlumniError, Result};
use crate::search::{INTENT_RULES, classify};

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Query to classify
    pub query: String,

    /// Show which intent rules match
    #[arg(long)]
    pub explain: bool,
}

pub fn run(ctx: &AppContext, args: &ClassifyArgs) -> Result<()> {
    if args.query.trim().is_empty() {
        return Err(AlumniError::MissingParameter("query".to_string()));
    }
    let query = classify(&args.query);

    if ctx.machine_mode() {
        return emit_json(&query);
    }

    let mut layout = HumanLayout::new();
    layout
        .title(&args.query)
        .kv("intent", query.intent.as_str())
        .kv("skills", &join_or_dash(&query.skills))
        .kv("locations", &join_or_dash(&query.locations))
        .kv("companies", &join_or_dash(&query.companies));

    if args.explain {
        let entities = query.entities();
        layout.blank().push_line("rules (first match wins):");
        for rule in INTENT_RULES {
            let mark = if (rule.matches)(&query.normalized, &entities) {
                "x"
            } else {
                " "
            };
            layout.bullet(&format!("[{mark}] {} -> {}", rule.name, rule.intent));
        }
    }

    emit_human(layout);
    Ok(())
}
