//! Bayesian prior configuration types.
//!
//! The priors file fixes the network's conditional probability tables: the
//! unconditional gene-count prior for founders, the trait likelihood per
//! gene count, and the per-copy mutation rate. A `Priors` value is
//! constructed once (from the embedded defaults or a JSON file) and passed
//! by reference into the inference engine; it is never process-global
//! state, so differently-configured runs can coexist in one process.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use ped_common::{Error, GeneCount, Result};

use crate::CONFIG_SCHEMA_VERSION;

/// Tolerance for distribution-sum validation.
const SUM_TOLERANCE: f64 = 1e-9;

/// Complete priors configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Priors {
    #[serde(default)]
    pub schema_version: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Unconditional gene-count prior for people with no recorded parents.
    pub gene: GenePrior,

    /// Trait likelihood conditioned on gene count.
    pub trait_given_gene: TraitTable,

    /// Probability that a transmitted copy flips state during inheritance.
    pub mutation_rate: f64,
}

/// Unconditional gene-count prior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenePrior {
    pub zero: f64,
    pub one: f64,
    pub two: f64,
}

/// Trait likelihood for a single gene count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraitLikelihood {
    pub present: f64,
    pub absent: f64,
}

/// Trait likelihoods for all three gene counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraitTable {
    pub zero: TraitLikelihood,
    pub one: TraitLikelihood,
    pub two: TraitLikelihood,
}

impl Default for Priors {
    fn default() -> Self {
        Self {
            schema_version: Some(CONFIG_SCHEMA_VERSION.to_string()),
            description: Some("Embedded default priors".to_string()),
            gene: GenePrior {
                zero: 0.96,
                one: 0.03,
                two: 0.01,
            },
            trait_given_gene: TraitTable {
                zero: TraitLikelihood {
                    present: 0.01,
                    absent: 0.99,
                },
                one: TraitLikelihood {
                    present: 0.56,
                    absent: 0.44,
                },
                two: TraitLikelihood {
                    present: 0.65,
                    absent: 0.35,
                },
            },
            mutation_rate: 0.01,
        }
    }
}

impl Priors {
    /// Load and validate a priors file (JSON).
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = fs::read_to_string(path.as_ref())?;
        let priors: Priors =
            serde_json::from_str(&raw).map_err(|e| Error::InvalidPriors(e.to_string()))?;
        priors.validate()?;
        Ok(priors)
    }

    /// Prior probability that a founder carries `count` copies.
    pub fn gene_prior(&self, count: GeneCount) -> f64 {
        match count {
            GeneCount::Zero => self.gene.zero,
            GeneCount::One => self.gene.one,
            GeneCount::Two => self.gene.two,
        }
    }

    /// Likelihood of the given trait state for a person with `count` copies.
    pub fn trait_likelihood(&self, count: GeneCount, present: bool) -> f64 {
        let row = match count {
            GeneCount::Zero => &self.trait_given_gene.zero,
            GeneCount::One => &self.trait_given_gene.one,
            GeneCount::Two => &self.trait_given_gene.two,
        };
        if present {
            row.present
        } else {
            row.absent
        }
    }

    /// Semantic validation: every entry is a probability and each
    /// distribution sums to 1 within tolerance.
    pub fn validate(&self) -> Result<()> {
        check_unit("mutation_rate", self.mutation_rate)?;

        for count in GeneCount::ALL {
            check_unit(&format!("gene prior for {count} copies"), self.gene_prior(count))?;
            check_unit(
                &format!("trait likelihood (present) for {count} copies"),
                self.trait_likelihood(count, true),
            )?;
            check_unit(
                &format!("trait likelihood (absent) for {count} copies"),
                self.trait_likelihood(count, false),
            )?;

            let row_sum = self.trait_likelihood(count, true) + self.trait_likelihood(count, false);
            if (row_sum - 1.0).abs() > SUM_TOLERANCE {
                return Err(Error::InvalidPriors(format!(
                    "trait likelihoods for {count} copies sum to {row_sum}, expected 1"
                )));
            }
        }

        let prior_sum = self.gene.zero + self.gene.one + self.gene.two;
        if (prior_sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(Error::InvalidPriors(format!(
                "gene prior sums to {prior_sum}, expected 1"
            )));
        }

        Ok(())
    }
}

fn check_unit(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(Error::InvalidPriors(format!(
            "{name} must be a probability in [0, 1], got {value}"
        )));
    }
    Ok(())
}
