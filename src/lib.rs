pub mod app;
pub mod backend;
pub mod cli;
pub mod config;
pub mod directory;
pub mod error;
pub mod search;
pub mod server;
pub mod service;

pub use error::{AlumniError, Result};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
