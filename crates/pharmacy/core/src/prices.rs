//! Material price table.

use std::collections::BTreeMap;

use crate::catalog::{CatalogOracle, display_name_or_placeholder};

/// Unit price per item id.
///
/// A missing entry reads as 0: "not priced yet" and "priced at zero" are the
/// same thing here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PriceTable {
    prices: BTreeMap<u32, u64>,
}

impl PriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Price of one unit, 0 when unknown.
    pub fn price(&self, item_id: u32) -> u64 {
        self.prices.get(&item_id).copied().unwrap_or(0)
    }

    /// Price if one was entered.
    pub fn get(&self, item_id: u32) -> Option<u64> {
        self.prices.get(&item_id).copied()
    }

    pub fn set(&mut self, item_id: u32, price: u64) {
        self.prices.insert(item_id, price);
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// `(item_id, price)` in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u64)> + '_ {
        self.prices.iter().map(|(id, price)| (*id, *price))
    }

    /// Display rows sorted by case-folded name, then id.
    pub fn rows(&self, catalog: &(impl CatalogOracle + ?Sized)) -> Vec<PriceRow> {
        let mut rows: Vec<PriceRow> = self
            .iter()
            .map(|(item_id, price)| PriceRow {
                item_id,
                name: display_name_or_placeholder(catalog, item_id),
                price,
            })
            .collect();
        rows.sort_by_cached_key(|row| (row.name.to_lowercase(), row.item_id));
        rows
    }
}

impl FromIterator<(u32, u64)> for PriceTable {
    fn from_iter<T: IntoIterator<Item = (u32, u64)>>(iter: T) -> Self {
        Self {
            prices: iter.into_iter().collect(),
        }
    }
}

/// One resolved price row for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PriceRow {
    pub item_id: u32,
    pub name: String,
    pub price: u64,
}
