//! Data collection for registry packages
//!
//! This module gathers GitHub repository statistics for the packages of a registry.
//!
//! # Implementation Model
//!
//! - [`RepoSpec`] turns a declared repository URL into an owner and repository name.
//! - [`hosting::Client`] sends one GraphQL query per repository and maps the answer into a
//!   [`RepositoryRecord`], classifying failures as a [`FetchError`].
//! - [`RegistrySnapshot`] holds the (package, URL) pairs of a registry, loaded from a
//!   registry checkout or built in memory.
//! - [`sweep`] derives [`Candidate`]s from a snapshot and fetches them one at a time,
//!   collecting successes into a [`ResultTable`] and failures alongside it.

mod candidate;
pub mod hosting;
mod progress;
pub mod registry;
mod repo_spec;
mod result_table;
pub mod sweep;

pub use candidate::Candidate;
pub use hosting::{FetchError, RepositoryFetcher, RepositoryRecord};
pub use progress::{NoProgress, Progress};
pub use registry::{RegistryEntry, RegistrySnapshot};
pub use repo_spec::RepoSpec;
pub use result_table::{COLUMNS, ResultRow, ResultTable};
pub use sweep::{SweepFailure, SweepOptions, SweepOutcome, collect_candidates};
