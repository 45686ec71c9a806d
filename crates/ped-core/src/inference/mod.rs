//! Exact posterior inference over a pedigree.

pub mod engine;
pub mod inherit;
pub mod joint;
pub mod posterior;

pub use engine::run_inference;
pub use posterior::{GeneScores, PersonPosterior, PosteriorTable, TraitScores};
