use std::path::PathBuf;

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::error::Result;
use crate::service::SmartSearch;

pub struct AppContext {
    /// Directory searched for `alumni.toml`.
    pub project_root: PathBuf,
    pub config: Config,
    pub output_format: OutputFormat,
    pub verbosity: u8,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let project_root = std::env::current_dir()?;
        let config = Config::load(cli.config.as_deref(), &project_root)?;

        Ok(Self {
            project_root,
            config,
            output_format: cli.output_format(),
            verbosity: cli.verbose,
        })
    }

    #[must_use]
    pub const fn machine_mode(&self) -> bool {
        self.output_format.is_machine_readable()
    }

    /// Search service for this invocation. `offline` skips the backend.
    pub fn search_service(&self, offline: bool) -> Result<SmartSearch> {
        if offline {
            return Ok(SmartSearch::offline().with_limits(
                self.config.search.max_results,
                self.config.search.max_project_results,
            ));
        }
        SmartSearch::from_config(&self.config)
    }
}
