//! # gdrive-common
//!
//! Shared types, error definitions, configuration models, and constants
//! used across the gdrive workspace.
//!
//! This crate is the leaf of the dependency graph. It depends on no other
//! internal crate and provides the file record model and render option
//! bundles that the formatter and the CLI exchange.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
