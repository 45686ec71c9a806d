//! Error types for pedigree inference.

use thiserror::Error;

/// Result type alias for pedigree inference operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the ped-* crates.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors (10-19)
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid priors file: {0}")]
    InvalidPriors(String),

    // Pedigree load errors (20-29)
    #[error("pedigree load failed: {0}")]
    Load(String),

    #[error("person {person} references unknown parent {parent}")]
    UnknownParent { person: String, parent: String },

    #[error("person {person} has exactly one parent recorded; expected both or neither")]
    SingleParent { person: String },

    #[error("duplicate person {name} in pedigree")]
    DuplicatePerson { name: String },

    // Inference errors (30-39)
    #[error("inference failed: {0}")]
    Inference(String),

    #[error("degenerate evidence: every enumerated assignment for {person} has zero probability")]
    DegenerateEvidence { person: String },

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the stable numeric code for this error type.
    /// Used for detailed error reporting and exit-code mapping.
    pub fn code(&self) -> u32 {
        match self {
            Error::Config(_) => 10,
            Error::InvalidPriors(_) => 11,
            Error::Load(_) => 20,
            Error::UnknownParent { .. } => 21,
            Error::SingleParent { .. } => 22,
            Error::DuplicatePerson { .. } => 23,
            Error::Inference(_) => 30,
            Error::DegenerateEvidence { .. } => 31,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
        }
    }
}
