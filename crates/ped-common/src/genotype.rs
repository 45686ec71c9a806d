//! Gene-count domain type.

use serde::{Deserialize, Serialize};

/// Number of copies of the variant allele a person carries.
///
/// This is the complete domain for every probability-table lookup and for
/// the inheritance model; no other values are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneCount {
    Zero,
    One,
    Two,
}

impl GeneCount {
    /// All values, in ascending copy order.
    pub const ALL: [GeneCount; 3] = [GeneCount::Zero, GeneCount::One, GeneCount::Two];

    /// Copy count as an integer.
    pub fn copies(self) -> u8 {
        match self {
            GeneCount::Zero => 0,
            GeneCount::One => 1,
            GeneCount::Two => 2,
        }
    }
}

impl std::fmt::Display for GeneCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.copies())
    }
}
