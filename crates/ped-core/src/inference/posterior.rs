//! Marginal accumulation and normalization.
//!
//! A [`PosteriorTable`] starts zeroed, receives every enumerated
//! assignment's joint probability through [`PosteriorTable::record`], is
//! normalized exactly once, and is treated as immutable output after
//! that.

use serde::{Deserialize, Serialize};

use ped_common::{Error, GeneCount, Result};
use ped_math::{contains, normalize_in_place, NormalizeError};

use super::joint::GeneAssignment;
use crate::pedigree::Population;

/// Gene-count distribution for one person.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct GeneScores {
    pub zero: f64,
    pub one: f64,
    pub two: f64,
}

impl GeneScores {
    /// Bucket value for `count`.
    pub fn get(&self, count: GeneCount) -> f64 {
        match count {
            GeneCount::Zero => self.zero,
            GeneCount::One => self.one,
            GeneCount::Two => self.two,
        }
    }

    fn add(&mut self, count: GeneCount, p: f64) {
        match count {
            GeneCount::Zero => self.zero += p,
            GeneCount::One => self.one += p,
            GeneCount::Two => self.two += p,
        }
    }

    /// Buckets as an array in `GeneCount::ALL` order.
    pub fn as_array(&self) -> [f64; 3] {
        [self.zero, self.one, self.two]
    }
}

/// Trait distribution for one person.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TraitScores {
    pub present: f64,
    pub absent: f64,
}

/// Posterior distributions for one person.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonPosterior {
    pub name: String,
    pub gene: GeneScores,
    #[serde(rename = "trait")]
    pub trait_scores: TraitScores,
}

/// Per-person marginal table, accumulated across the full enumeration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PosteriorTable {
    people: Vec<PersonPosterior>,
}

impl PosteriorTable {
    /// Empty table with one zeroed entry per person, in population order.
    pub fn zeroed(population: &Population) -> Self {
        Self {
            people: population
                .iter()
                .map(|person| PersonPosterior {
                    name: person.name.clone(),
                    gene: GeneScores::default(),
                    trait_scores: TraitScores::default(),
                })
                .collect(),
        }
    }

    /// Add one enumerated assignment's joint probability into every
    /// person's gene and trait buckets.
    pub fn record(&mut self, genes: &GeneAssignment, trait_mask: u64, p: f64) {
        for (i, entry) in self.people.iter_mut().enumerate() {
            entry.gene.add(genes.count_for(i), p);
            if contains(trait_mask, i) {
                entry.trait_scores.present += p;
            } else {
                entry.trait_scores.absent += p;
            }
        }
    }

    /// Rescale every person's distributions to sum to 1.
    ///
    /// A zero total means every enumerated assignment had zero joint
    /// probability, which signals contradictory observed evidence; it is
    /// reported as a fault rather than dividing by zero.
    pub fn normalize(&mut self) -> Result<()> {
        for entry in &mut self.people {
            let mut gene = entry.gene.as_array();
            normalize_in_place(&mut gene).map_err(|e| degenerate(&entry.name, e))?;
            entry.gene.zero = gene[0];
            entry.gene.one = gene[1];
            entry.gene.two = gene[2];

            let mut traits = [entry.trait_scores.present, entry.trait_scores.absent];
            normalize_in_place(&mut traits).map_err(|e| degenerate(&entry.name, e))?;
            entry.trait_scores.present = traits[0];
            entry.trait_scores.absent = traits[1];
        }
        Ok(())
    }

    /// Per-person posteriors in population order.
    pub fn people(&self) -> &[PersonPosterior] {
        &self.people
    }

    /// Posterior for `name`, if present.
    pub fn person(&self, name: &str) -> Option<&PersonPosterior> {
        self.people.iter().find(|entry| entry.name == name)
    }
}

fn degenerate(name: &str, err: NormalizeError) -> Error {
    match err {
        NormalizeError::ZeroMass => Error::DegenerateEvidence {
            person: name.to_string(),
        },
        NormalizeError::NonFinite => {
            Error::Inference(format!("non-finite probability mass for {name}"))
        }
    }
}
