//! Command-line interface and orchestration for pkgstars
//!
//! # Implementation Model
//!
//! ## Commands
//!
//! - **lookup**: Fetch the statistics of one repository and print them; a failed lookup is
//!   returned as an error
//! - **sweep**: Load a registry checkout, fetch every GitHub repository it declares one at a
//!   time, write the result table, and print a summary; failed lookups are listed but do
//!   not fail the command
//! - **init**: Generate a default configuration file
//!
//! The `run` function parses command-line arguments using clap and routes to the
//! appropriate command handler. The `common` module provides logging setup, color mode
//! handling, configuration loading, and API client creation shared by lookup and sweep.
//!
//! Configuration is an optional `pkgstars.toml` (API endpoint, request delay, output file);
//! command-line flags take precedence over it.

mod common;
mod config;
mod host;
mod init;
mod lookup;
mod progress_reporter;
mod run;
mod sweep;

pub use common::{ColorMode, CommonArgs, LogLevel};
pub use config::Config;
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use lookup::{LookupArgs, lookup_repository};
pub use progress_reporter::ProgressReporter;
pub use run::run;
pub use sweep::{SweepArgs, process_registry, run_sweep, write_csv_file};
