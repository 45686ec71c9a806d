//! Pedigree inference shared types and errors.
//!
//! This crate provides foundational types shared across the ped-* crates:
//! - The `GeneCount` domain type
//! - Common error types with stable numeric codes
//! - Output format selection
//! - Schema versioning for JSON output

pub mod error;
pub mod genotype;
pub mod output;
pub mod schema;

pub use error::{Error, Result};
pub use genotype::GeneCount;
pub use output::OutputFormat;
pub use schema::SCHEMA_VERSION;
