#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for pkgstars
//!
//! This library consolidates all functionality for the pkgstars tool, which collects GitHub
//! repository statistics (stars, last update, description) for the packages of a registry.
//!
//! # Module Organization
//!
//! - [`commands`]: Command-line interface and orchestration
//! - [`facts`]: URL parsing, repository lookups, registry snapshots, and the sweep
//! - [`reports`]: CSV, JSON, and console output

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod commands;
pub mod facts;
pub mod reports;

pub use crate::commands::{Host, run};
