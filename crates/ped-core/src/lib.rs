//! Pedigree gene/trait posterior inference.
//!
//! Exact inference on a fixed-structure discrete Bayesian network: one
//! gene-count node and one trait node per person, with children's
//! gene-count nodes conditioned on both parents' and each trait node
//! conditioned on its owner's gene count. The engine enumerates every
//! assignment consistent with the observed evidence, accumulates joint
//! probabilities into per-person marginals, and normalizes.
//!
//! The core consumes an already-validated [`Population`] plus a
//! [`ped_config::Priors`] value and produces a [`PosteriorTable`]; CSV
//! loading and rendering live at the edges ([`load`], [`output`]).

pub mod exit_codes;
pub mod inference;
pub mod load;
pub mod output;
pub mod pedigree;

pub use inference::engine::run_inference;
pub use inference::posterior::{GeneScores, PersonPosterior, PosteriorTable, TraitScores};
pub use load::{load_pedigree, parse_pedigree};
pub use pedigree::{Parents, Person, Population};
