//! Per-item summary of one recompute.
//!
//! A [`PharmacySnapshot`] is built from scratch every time an input changes and
//! is never patched in place. Every item keeps its own row; the name index
//! exists because the cost table joins on display name.

use std::collections::BTreeMap;

use crate::catalog::{CatalogOracle, display_name_or_placeholder};
use crate::engine::OutcomeSet;
use crate::error::PharmacyError;
use crate::rules::Rules;
use crate::tiers::{Tier, bucketize, weighted_average};

/// Tier breakdown and expected yield for one craftable item.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSummary {
    pub item_id: u32,
    pub difficulty: i32,
    /// Probabilities in tier order, MAX first.
    pub probabilities: [f64; Tier::COUNT],
    /// Expected potions per attempt.
    pub weighted_average: f64,
}

impl ItemSummary {
    /// Placeholder row used when the item's rules lookup failed.
    pub fn zeroed(item_id: u32) -> Self {
        Self {
            item_id,
            difficulty: 0,
            probabilities: [0.0; Tier::COUNT],
            weighted_average: 0.0,
        }
    }

    pub fn probability(&self, tier: Tier) -> f64 {
        self.probabilities[tier.as_index()]
    }
}

/// Result of one full recompute.
#[derive(Clone, Debug, PartialEq)]
pub struct PharmacySnapshot {
    pub outcomes: OutcomeSet,
    pub level: i32,
    pub potion_cap: i32,
    /// One row per rules item, ordered by display name then id.
    pub rows: Vec<(String, ItemSummary)>,
    /// Name index into `rows`. On a shared name the higher id wins.
    pub per_item: BTreeMap<String, ItemSummary>,
}

impl PharmacySnapshot {
    /// Smallest outcome, `None` only for an empty set.
    pub fn min(&self) -> Option<i32> {
        self.outcomes.min()
    }

    pub fn max(&self) -> Option<i32> {
        self.outcomes.max()
    }

    pub fn item(&self, name: &str) -> Option<&ItemSummary> {
        self.per_item.get(name)
    }

    /// Expected potions per attempt for `name`, 0 when never computed.
    pub fn mean_for(&self, name: &str) -> f64 {
        self.item(name).map_or(0.0, |row| row.weighted_average)
    }

    /// Rows ordered by display name, including items that share a name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ItemSummary)> + '_ {
        self.rows.iter().map(|(name, row)| (name.as_str(), row))
    }
}

/// Classify `outcomes` against every craftable item at `level`.
///
/// The potion cap falls back to the largest observed outcome when `level` has
/// no cap entry. Items whose difficulty cannot be resolved are logged and get a
/// zeroed row; the rest of the table is unaffected.
pub fn summarize(
    rules: &Rules,
    outcomes: OutcomeSet,
    level: i32,
    catalog: &(impl CatalogOracle + ?Sized),
) -> PharmacySnapshot {
    let potion_cap = rules.potion_cap(level, outcomes.max().unwrap_or(0));
    tracing::debug!(
        level,
        potion_cap,
        min = ?outcomes.min(),
        max = ?outcomes.max(),
        "summarizing outcomes"
    );

    let mut rows: Vec<(String, ItemSummary)> = rules
        .item_ids()
        .into_iter()
        .map(|item_id| {
            let row = match rules.item_difficulty(item_id, level) {
                Ok(difficulty) => {
                    let buckets = bucketize(&outcomes, difficulty);
                    let probabilities = buckets.probabilities();
                    ItemSummary {
                        item_id,
                        difficulty,
                        probabilities,
                        weighted_average: weighted_average(&probabilities, potion_cap),
                    }
                }
                Err(err) => {
                    tracing::warn!(
                        item_id,
                        code = err.error_code(),
                        error = %err,
                        "item summary failed; using zeroed row"
                    );
                    ItemSummary::zeroed(item_id)
                }
            };
            (display_name_or_placeholder(catalog, item_id), row)
        })
        .collect();
    // stable: ids stay ascending within a name
    rows.sort_by(|(a, _), (b, _)| a.cmp(b));

    let mut per_item = BTreeMap::new();
    for (name, row) in &rows {
        if let Some(previous) = per_item.insert(name.clone(), row.clone()) {
            tracing::warn!(
                name = %name,
                shadowed = previous.item_id,
                item_id = row.item_id,
                "items share a display name; cost lookups use the higher id"
            );
        }
    }

    PharmacySnapshot {
        outcomes,
        level,
        potion_cap,
        rows,
        per_item,
    }
}
