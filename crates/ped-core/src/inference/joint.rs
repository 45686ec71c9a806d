//! Joint probability of one complete assignment.

use ped_common::GeneCount;
use ped_config::Priors;
use ped_math::contains;

use super::inherit::transmission_probability;
use crate::pedigree::Population;

/// A complete gene-count assignment, encoded as two disjoint masks over
/// person indices. Everyone outside both masks carries zero copies.
#[derive(Debug, Clone, Copy)]
pub struct GeneAssignment {
    one: u64,
    two: u64,
}

impl GeneAssignment {
    /// The masks must be disjoint. The enumeration draws `two` from the
    /// complement of `one`, so this holds by construction there.
    pub fn new(one: u64, two: u64) -> Self {
        debug_assert_eq!(one & two, 0, "one-copy and two-copy masks overlap");
        Self { one, two }
    }

    /// Gene count assigned to person index `i`.
    pub fn count_for(&self, i: usize) -> GeneCount {
        if contains(self.one, i) {
            GeneCount::One
        } else if contains(self.two, i) {
            GeneCount::Two
        } else {
            GeneCount::Zero
        }
    }
}

/// Joint probability of a complete gene-count and trait assignment.
///
/// Factorizes over people: each person contributes a gene-count term
/// (a transmission cross-product for children, the unconditional prior
/// for founders) times the trait likelihood for their membership in
/// `trait_mask`. Contradictory assignments are not special-cased here;
/// they simply multiply in small table entries. Evidence filtering
/// happens one level up, in the driver, and gene-count assignments are
/// never filtered at all.
pub fn joint_probability(
    population: &Population,
    priors: &Priors,
    genes: &GeneAssignment,
    trait_mask: u64,
) -> f64 {
    let mut joint = 1.0;
    for i in 0..population.len() {
        let count = genes.count_for(i);

        let gene_term = match population.parent_idx(i) {
            Some(parents) => {
                let from_mother = transmission_probability(
                    genes.count_for(parents.mother),
                    priors.mutation_rate,
                );
                let from_father = transmission_probability(
                    genes.count_for(parents.father),
                    priors.mutation_rate,
                );
                match count {
                    GeneCount::Two => from_mother * from_father,
                    GeneCount::One => {
                        from_mother * (1.0 - from_father) + (1.0 - from_mother) * from_father
                    }
                    GeneCount::Zero => (1.0 - from_mother) * (1.0 - from_father),
                }
            }
            None => priors.gene_prior(count),
        };

        let trait_term = priors.trait_likelihood(count, contains(trait_mask, i));
        joint *= gene_term * trait_term;
    }
    joint
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pedigree::{Parents, Person};

    fn person(name: &str, parents: Option<(&str, &str)>, trait_status: Option<bool>) -> Person {
        Person {
            name: name.to_string(),
            parents: parents.map(|(mother, father)| Parents {
                mother: mother.to_string(),
                father: father.to_string(),
            }),
            trait_status,
        }
    }

    fn reference_family() -> Population {
        Population::build(vec![
            person("Harry", Some(("Lily", "James")), None),
            person("James", None, Some(true)),
            person("Lily", None, Some(false)),
        ])
        .unwrap()
    }

    #[test]
    fn reference_assignment_matches_hand_computation() {
        // Lily zero copies without the trait, James two copies with it,
        // Harry one copy without it:
        //   James: 0.01 * 0.65
        //   Lily:  0.96 * 0.99
        //   Harry: (0.01 * 0.01 + 0.99 * 0.99) * 0.44
        let population = reference_family();
        let priors = Priors::default();
        let harry = 1u64 << population.index_of("Harry").unwrap();
        let james = 1u64 << population.index_of("James").unwrap();

        let p = joint_probability(
            &population,
            &priors,
            &GeneAssignment::new(harry, james),
            james,
        );
        assert!((p - 0.0026643247488).abs() < 1e-12, "got {p}");
    }

    #[test]
    fn founders_only_is_a_prior_product() {
        let population =
            Population::build(vec![person("a", None, None), person("b", None, None)]).unwrap();
        let priors = Priors::default();

        // Both carry zero copies, neither has the trait.
        let p = joint_probability(&population, &priors, &GeneAssignment::new(0, 0), 0);
        let expected = (0.96 * 0.99) * (0.96 * 0.99);
        assert!((p - expected).abs() < 1e-15);
    }

    #[test]
    fn order_independent() {
        let priors = Priors::default();

        let forward = reference_family();
        let reversed = Population::build(vec![
            person("Lily", None, Some(false)),
            person("James", None, Some(true)),
            person("Harry", Some(("Lily", "James")), None),
        ])
        .unwrap();

        // Same semantic assignment expressed against each ordering.
        let assignment = |population: &Population| {
            let harry = 1u64 << population.index_of("Harry").unwrap();
            let james = 1u64 << population.index_of("James").unwrap();
            (GeneAssignment::new(harry, james), james)
        };

        let (genes_f, traits_f) = assignment(&forward);
        let (genes_r, traits_r) = assignment(&reversed);

        let p_forward = joint_probability(&forward, &priors, &genes_f, traits_f);
        let p_reversed = joint_probability(&reversed, &priors, &genes_r, traits_r);
        assert!((p_forward - p_reversed).abs() < 1e-15);
    }

    #[test]
    fn always_within_unit_interval() {
        let population = reference_family();
        let priors = Priors::default();
        for one in 0..8u64 {
            for two in ped_math::submasks(0b111 & !one) {
                for trait_mask in 0..8u64 {
                    let p = joint_probability(
                        &population,
                        &priors,
                        &GeneAssignment::new(one, two),
                        trait_mask,
                    );
                    assert!((0.0..=1.0).contains(&p));
                }
            }
        }
    }
}
