//! Inference driver: full enumeration, evidence filtering, normalization.
//!
//! Work is exponential by design: up to `2^k` surviving trait assignments
//! (k people with unobserved trait) times `3^n` gene-count partitions,
//! the exact joint over an unconstrained network. The population size is
//! bounded before enumeration so the algorithm stays within its intended
//! scale of small family pedigrees.

use tracing::debug;

use ped_common::{Error, Result};
use ped_config::Priors;
use ped_math::{full_mask, submasks, subset_masks};

use super::joint::{joint_probability, GeneAssignment};
use super::posterior::PosteriorTable;
use crate::pedigree::Population;

/// Hard cap on population size for exact enumeration.
///
/// The assignment count grows as `6^n` in the worst case; at 16 people
/// that is already ~2.8e12 evaluations. The cap guards against feeding
/// the exact algorithm a pedigree it was never meant for.
pub const MAX_EXACT_PEOPLE: usize = 16;

/// Known trait evidence folded into masks for O(1) candidate filtering.
#[derive(Debug, Clone, Copy)]
struct EvidenceMasks {
    /// Bits of people whose trait status is observed.
    known: u64,
    /// Required values on the observed bits.
    required: u64,
}

impl EvidenceMasks {
    fn from_population(population: &Population) -> Self {
        let mut known = 0u64;
        let mut required = 0u64;
        for (i, person) in population.iter().enumerate() {
            if let Some(observed) = person.trait_status {
                known |= 1 << i;
                if observed {
                    required |= 1 << i;
                }
            }
        }
        Self { known, required }
    }

    /// A candidate trait mask is consistent iff it agrees with every
    /// observed value.
    fn accepts(&self, trait_mask: u64) -> bool {
        trait_mask & self.known == self.required
    }
}

/// Run exact inference over `population` under `priors`.
///
/// Enumerates every evidence-consistent trait assignment and, within
/// each, every partition of the population into zero/one/two gene
/// copies; accumulates joint probabilities into per-person marginals and
/// normalizes at the end. Pure apart from the returned table; safe to
/// call repeatedly and across independent populations.
pub fn run_inference(population: &Population, priors: &Priors) -> Result<PosteriorTable> {
    priors.validate()?;

    if population.is_empty() {
        return Err(Error::Inference("empty population".into()));
    }
    let n = population.len();
    if n > MAX_EXACT_PEOPLE {
        return Err(Error::Inference(format!(
            "population of {n} people exceeds the exact-enumeration cap of {MAX_EXACT_PEOPLE}"
        )));
    }

    let evidence = EvidenceMasks::from_population(population);
    let full = full_mask(n);
    let mut table = PosteriorTable::zeroed(population);

    let mut evaluated: u64 = 0;
    let mut rejected: u64 = 0;
    for trait_mask in subset_masks(n) {
        if !evidence.accepts(trait_mask) {
            rejected += 1;
            continue;
        }
        for one in subset_masks(n) {
            for two in submasks(full & !one) {
                let genes = GeneAssignment::new(one, two);
                let p = joint_probability(population, priors, &genes, trait_mask);
                table.record(&genes, trait_mask, p);
                evaluated += 1;
            }
        }
    }
    debug!(people = n, evaluated, rejected, "enumeration complete");

    table.normalize()?;
    Ok(table)
}
