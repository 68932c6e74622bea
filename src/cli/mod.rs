//! CLI module - Command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use output::OutputFormat;

pub mod commands;
pub mod output;

/// Alumni network smart search
#[derive(Parser, Debug)]
#[command(name = "alumni")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json)
    #[arg(long, global = true, value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Enable machine-readable JSON output (shorthand for --output-format=json).
    #[arg(long, short = 'm', global = true)]
    pub machine: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file path (default: ~/.config/alumni/config.toml, then ./alumni.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Effective output format. An explicit `--output-format` wins over `-m`.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        if let Some(fmt) = self.output_format {
            return fmt;
        }
        if self.machine {
            return OutputFormat::Json;
        }
        OutputFormat::Human
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search members, projects and organizations
    Search(commands::search::SearchArgs),

    /// Show how a query is understood, without searching
    Classify(commands::classify::ClassifyArgs),

    /// Search projects by what they are looking for
    Projects(commands::projects::ProjectsArgs),

    /// Suggest example queries for a partial query
    Suggest(commands::suggest::SuggestArgs),

    /// Serve the search HTTP API
    Serve(commands::serve::ServeArgs),
}
