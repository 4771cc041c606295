//! Formula evaluation and the recompute pipeline.
//!
//! The [`PharmacyEngine`] is the single entry point front-ends call whenever an
//! input changes. It enumerates all outcomes for the current character and
//! classifies them against every craftable item of the loaded [`Rules`].
//! Recomputation is cheap (847 evaluations per call), so nothing is cached.

mod errors;
mod formula;
mod outcomes;

pub use errors::{Draw, FormulaError};
pub use formula::{CharacterInputs, special_pharmacy};
pub use outcomes::{OutcomeSet, enumerate_outcomes};

use crate::catalog::CatalogOracle;
use crate::rules::Rules;
use crate::stats::CharacterProfile;
use crate::summary::{PharmacySnapshot, summarize};

/// Pipeline driver bound to an immutable rules instance.
///
/// Holds only a shared reference, so any number of engines can read the same
/// [`Rules`] concurrently.
#[derive(Clone, Copy, Debug)]
pub struct PharmacyEngine<'a> {
    rules: &'a Rules,
}

impl<'a> PharmacyEngine<'a> {
    /// Creates a new engine over the given rules.
    pub fn new(rules: &'a Rules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'a Rules {
        self.rules
    }

    /// Recompute the per-item summary for a character profile.
    ///
    /// Buffs are applied before enumeration and the profile's Advanced
    /// Pharmacy level selects the difficulty and potion-cap rows.
    pub fn compute(
        &self,
        profile: &CharacterProfile,
        catalog: &(impl CatalogOracle + ?Sized),
    ) -> PharmacySnapshot {
        self.compute_inputs(&profile.inputs(), profile.skills.advanced_pharmacy, catalog)
    }

    /// Recompute the per-item summary for raw formula inputs at `level`.
    pub fn compute_inputs(
        &self,
        inputs: &CharacterInputs,
        level: i32,
        catalog: &(impl CatalogOracle + ?Sized),
    ) -> PharmacySnapshot {
        let outcomes = enumerate_outcomes(inputs);
        tracing::debug!(
            outcomes = outcomes.len(),
            level,
            "enumerated special pharmacy outcomes"
        );
        summarize(self.rules, outcomes, level, catalog)
    }
}
