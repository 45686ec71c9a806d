//! Pedigree data model.
//!
//! A [`Population`] is built once from loader output and is read-only
//! during inference. Construction resolves parent references to stable
//! indices and rejects structurally invalid input; the inference engine
//! assumes a valid population and does not re-check.

use std::collections::BTreeMap;

use ped_common::{Error, Result};

/// Both parents of a person, by name.
///
/// A person has either both parents recorded or neither; a single-parent
/// record is unrepresentable in this model and is rejected by the loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parents {
    pub mother: String,
    pub father: String,
}

/// One pedigree record as supplied by the loader.
#[derive(Debug, Clone)]
pub struct Person {
    pub name: String,
    pub parents: Option<Parents>,
    /// Observed trait status: `Some` if known, `None` if unobserved.
    pub trait_status: Option<bool>,
}

/// Parent indices resolved against the population ordering.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ParentIdx {
    pub mother: usize,
    pub father: usize,
}

/// A validated, index-addressable family pedigree.
///
/// Person ordering (and therefore every bitmask bit position) follows
/// input order and is stable for the lifetime of the value.
#[derive(Debug, Clone)]
pub struct Population {
    people: Vec<Person>,
    parent_idx: Vec<Option<ParentIdx>>,
    index: BTreeMap<String, usize>,
}

impl Population {
    /// Build a population from loader records.
    ///
    /// Rejects duplicate names and parent references that do not resolve
    /// to a person in the same pedigree.
    pub fn build(people: Vec<Person>) -> Result<Self> {
        let mut index = BTreeMap::new();
        for (i, person) in people.iter().enumerate() {
            if index.insert(person.name.clone(), i).is_some() {
                return Err(Error::DuplicatePerson {
                    name: person.name.clone(),
                });
            }
        }

        let mut parent_idx = Vec::with_capacity(people.len());
        for person in &people {
            let resolved = match &person.parents {
                None => None,
                Some(parents) => {
                    let mother = resolve(&index, &person.name, &parents.mother)?;
                    let father = resolve(&index, &person.name, &parents.father)?;
                    Some(ParentIdx { mother, father })
                }
            };
            parent_idx.push(resolved);
        }

        Ok(Self {
            people,
            parent_idx,
            index,
        })
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Person at position `i` in the stable ordering.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    pub fn person(&self, i: usize) -> &Person {
        &self.people[i]
    }

    /// Resolved parent indices for person `i`, if parents are recorded.
    pub(crate) fn parent_idx(&self, i: usize) -> Option<ParentIdx> {
        self.parent_idx[i]
    }

    /// Position of `name` in the stable ordering.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// People in stable order.
    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.people.iter()
    }
}

fn resolve(index: &BTreeMap<String, usize>, person: &str, parent: &str) -> Result<usize> {
    index.get(parent).copied().ok_or_else(|| Error::UnknownParent {
        person: person.to_string(),
        parent: parent.to_string(),
    })
}
