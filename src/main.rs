//! alumni - Alumni network smart search
//!
//! Classify natural-language directory queries and rank members, projects
//! and organizations against them.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use alumni_search::Result;
use alumni_search::app::AppContext;
use alumni_search::cli::Cli;
use alumni_search::cli::output::error_json;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.output_format().is_machine_readable() {
                // Machine mode: JSON error output to stdout
                println!(
                    "{}",
                    serde_json::to_string(&error_json(&e)).unwrap_or_default()
                );
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let ctx = AppContext::from_cli(cli)?;
    tracing::debug!(
        root = %ctx.project_root.display(),
        verbosity = ctx.verbosity,
        "starting"
    );
    alumni_search::cli::commands::run(&ctx, &cli.command)
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn,alumni_search=info",
        1 => "info,alumni_search=debug",
        2 => "debug,alumni_search=trace",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if cli.output_format().is_machine_readable() {
        // JSON logging for machine mode
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        // Human-readable logging
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
