//! Priors configuration loading and validation.
//!
//! This crate provides:
//! - Typed Rust structs for the priors (probability table) file
//! - Embedded defaults matching the published model constants
//! - Semantic validation (probability ranges, distribution sums)

pub mod priors;

pub use priors::{GenePrior, Priors, TraitLikelihood, TraitTable};

/// Schema version for priors files.
pub const CONFIG_SCHEMA_VERSION: &str = "1.0.0";
