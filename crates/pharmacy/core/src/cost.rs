//! Production cost per final item.
//!
//! For every final item: materials cost per attempt from the recipe and price
//! table, expected yield from the latest [`PharmacySnapshot`], and the unit cost
//! derived from both.

use crate::catalog::{CatalogOracle, Recipe, display_name_or_placeholder};
use crate::error::{ErrorSeverity, PharmacyError};
use crate::prices::PriceTable;
use crate::summary::PharmacySnapshot;

/// Failures while pricing a single recipe.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CostError {
    #[error("materials cost overflows for material {material_id} (quantity {quantity})")]
    MaterialsOverflow { material_id: u32, quantity: u32 },
}

impl PharmacyError for CostError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            CostError::MaterialsOverflow { .. } => "COST_MATERIALS_OVERFLOW",
        }
    }
}

/// Sum of `price(material) * quantity` over the recipe. Unpriced materials
/// count as 0.
pub fn materials_cost(recipe: &Recipe, prices: &PriceTable) -> Result<u64, CostError> {
    recipe.lines().iter().try_fold(0u64, |total, line| {
        prices
            .price(line.material_id)
            .checked_mul(u64::from(line.quantity))
            .and_then(|cost| total.checked_add(cost))
            .ok_or(CostError::MaterialsOverflow {
                material_id: line.material_id,
                quantity: line.quantity,
            })
    })
}

/// One row of the production cost table.
#[derive(Clone, Debug, PartialEq)]
pub struct CostRow {
    pub item_id: u32,
    pub name: String,
    pub recipe: Recipe,
    pub materials_cost: u64,
    /// Expected potions per attempt; 0 when never computed.
    pub mean_per_attempt: f64,
    /// `None` when the expected yield is not positive.
    pub unit_cost: Option<f64>,
}

impl CostRow {
    fn build(item_id: u32, name: String, recipe: Recipe, materials_cost: u64, mean: f64) -> Self {
        let unit_cost = (mean > 0.0).then(|| materials_cost as f64 / mean);
        Self {
            item_id,
            name,
            recipe,
            materials_cost,
            mean_per_attempt: mean,
            unit_cost,
        }
    }
}

/// Build the cost table for `final_item_ids`.
///
/// Rows are sorted by case-insensitive name, then id. A row whose materials
/// cost cannot be computed is logged and reported with zero cost instead of
/// aborting the table.
pub fn aggregate_production_costs(
    final_item_ids: &[u32],
    catalog: &(impl CatalogOracle + ?Sized),
    prices: &PriceTable,
    summaries: Option<&PharmacySnapshot>,
) -> Vec<CostRow> {
    let mut rows: Vec<CostRow> = final_item_ids
        .iter()
        .map(|&item_id| {
            let name = display_name_or_placeholder(catalog, item_id);
            let recipe = catalog.recipe(item_id);
            let mean = summaries.map_or(0.0, |snapshot| snapshot.mean_for(&name));

            match materials_cost(&recipe, prices) {
                Ok(cost) => CostRow::build(item_id, name, recipe, cost, mean),
                Err(err) => {
                    tracing::warn!(
                        item_id,
                        code = err.error_code(),
                        error = %err,
                        "production cost failed; using zeroed row"
                    );
                    CostRow::build(item_id, name, recipe, 0, 0.0)
                }
            }
        })
        .collect();

    rows.sort_by_cached_key(|row| (row.name.to_lowercase(), row.item_id));
    tracing::debug!(rows = rows.len(), "aggregated production costs");
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, CatalogEntry, RecipeLine};
    use crate::engine::OutcomeSet;
    use crate::rules::{Rules, RulesDocument};
    use crate::summary::summarize;

    #[test]
    fn materials_cost_sums_price_times_quantity() {
        let recipe = Recipe::new(vec![RecipeLine::new(713, 10), RecipeLine::new(509, 10)]);
        let prices: PriceTable = [(713, 5), (509, 3)].into_iter().collect();
        assert_eq!(materials_cost(&recipe, &prices), Ok(80));
    }

    #[test]
    fn unpriced_material_is_free() {
        let recipe = Recipe::new(vec![RecipeLine::new(713, 10), RecipeLine::new(7455, 1)]);
        let prices: PriceTable = [(713, 5)].into_iter().collect();
        assert_eq!(materials_cost(&recipe, &prices), Ok(50));
    }

    #[test]
    fn overflow_is_reported() {
        let recipe = Recipe::new(vec![RecipeLine::new(1, 2)]);
        let prices: PriceTable = [(1, u64::MAX)].into_iter().collect();
        assert_eq!(
            materials_cost(&recipe, &prices),
            Err(CostError::MaterialsOverflow {
                material_id: 1,
                quantity: 2
            })
        );
    }

    fn catalog() -> Catalog {
        [
            CatalogEntry::new(20, "potion b")
                .with_kind("final")
                .with_recipe("10_713+10_509"),
            CatalogEntry::new(10, "Potion A")
                .with_kind("final")
                .with_recipe("1_713"),
            CatalogEntry::new(30, "Overflowing")
                .with_kind("final")
                .with_recipe("2_1"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn zero_mean_leaves_unit_cost_undefined() {
        let prices: PriceTable = [(713, 5), (509, 3)].into_iter().collect();
        let rows = aggregate_production_costs(&[20], &catalog(), &prices, None);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].materials_cost, 80);
        assert_eq!(rows[0].mean_per_attempt, 0.0);
        assert_eq!(rows[0].unit_cost, None);
    }

    #[test]
    fn rows_use_snapshot_means_and_sort_by_name() {
        let rules = Rules::from_document(&RulesDocument::from_sections(
            [("10", 0)],
            [("10", 10)],
            [("10", 0), ("20", 0)],
        ))
        .unwrap();
        let catalog = catalog();
        // every outcome lands in MAX, so the mean equals the cap
        let snapshot = summarize(&rules, OutcomeSet::from_values(vec![1000]), 10, &catalog);
        let prices: PriceTable = [(713, 5), (509, 3), (1, u64::MAX)].into_iter().collect();

        let rows = aggregate_production_costs(&[30, 20, 10], &catalog, &prices, Some(&snapshot));
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Overflowing", "Potion A", "potion b"]);

        assert_eq!(rows[1].unit_cost, Some(0.5));
        assert_eq!(rows[2].unit_cost, Some(8.0));

        // overflow row is zeroed, not dropped
        assert_eq!(rows[0].materials_cost, 0);
        assert_eq!(rows[0].unit_cost, None);
    }

    #[test]
    fn unknown_items_get_placeholder_names() {
        let rows = aggregate_production_costs(&[4, 3], &Catalog::new(), &PriceTable::new(), None);
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["#3", "#4"]);
        assert!(rows.iter().all(|r| r.recipe.is_empty() && r.materials_cost == 0));
    }
}
