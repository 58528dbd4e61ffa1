//! Report generation for sweep and lookup results
//!
//! # Implementation Model
//!
//! Each generator writes into any `core::fmt::Write` sink:
//! - **CSV**: the result table, one row per fetched repository, with RFC escaping
//! - **JSON**: the same table in machine-readable form
//! - **Console**: a single lookup, the run summary, and the list of failures
//!
//! [`RunSummary`] computes the totals printed after a sweep.

mod common;
mod console;
mod csv;
mod json;
mod summary;

pub use console::{generate_failures, generate_record, generate_summary};
pub use csv::generate as generate_csv;
pub use json::generate as generate_json;
pub use summary::RunSummary;
