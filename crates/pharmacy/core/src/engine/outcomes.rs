//! Full enumeration of the formula over both draw ranges.

use crate::config::PharmacyConfig;

use super::formula::{CharacterInputs, evaluate};

/// Every outcome of the formula for one set of inputs.
///
/// Produced by [`enumerate_outcomes`] in `r1`-major order (`r1` outer, `r2`
/// inner). Never mutated after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutcomeSet {
    values: Vec<i32>,
}

impl OutcomeSet {
    /// Wraps an arbitrary list of outcomes (used by tests and offline tools).
    pub fn from_values(values: Vec<i32>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[i32] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.values.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Smallest outcome, `None` for an empty set.
    pub fn min(&self) -> Option<i32> {
        self.values.iter().copied().min()
    }

    /// Largest outcome, `None` for an empty set.
    pub fn max(&self) -> Option<i32> {
        self.values.iter().copied().max()
    }
}

/// Evaluate the formula for every `(r1, r2)` pair.
///
/// Always returns [`PharmacyConfig::TOTAL_COMBOS`] values. Draws come from the
/// fixed ranges, so the evaluator's range guard cannot trigger here.
pub fn enumerate_outcomes(inputs: &CharacterInputs) -> OutcomeSet {
    let mut values = Vec::with_capacity(PharmacyConfig::TOTAL_COMBOS);
    for r1 in PharmacyConfig::R1_MIN..=PharmacyConfig::R1_MAX {
        for r2 in PharmacyConfig::R2_MIN..=PharmacyConfig::R2_MAX {
            values.push(evaluate(inputs, r1, r2));
        }
    }
    OutcomeSet { values }
}
