//! Material price loader.
//!
//! Price files map item ids to unit prices: `{"713": 5, "509": 3}`. Entries
//! whose id or price cannot be read as a non-negative integer are dropped one
//! by one; floats are truncated.

use std::path::Path;

use pharmacy_core::PriceTable;
use serde_json::Value;

use crate::loaders::{LoadResult, read_json_lenient, write_json_atomic};

/// Where a price table came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum PriceSource {
    /// Per-user prices file.
    User,
    /// Packaged default prices.
    Default,
    /// Neither file was usable.
    Empty,
}

/// A price table tagged with its source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedPrices {
    pub table: PriceTable,
    pub source: PriceSource,
}

/// Loader for price files (`defaults/prices.json`, user `prices.json`).
pub struct PricesLoader;

impl PricesLoader {
    /// Read a price file.
    ///
    /// `None` when the file is missing, unparsable, or not a JSON object.
    pub fn load(path: &Path) -> Option<PriceTable> {
        let value = read_json_lenient(path)?;
        let table = Self::from_value(&value);
        if table.is_none() {
            tracing::warn!(path = %path.display(), "price file is not a JSON object; ignoring");
        }
        table
    }

    /// Keep every well-formed entry of a JSON object.
    pub fn from_value(value: &Value) -> Option<PriceTable> {
        let object = value.as_object()?;
        let table = object
            .iter()
            .filter_map(|(key, raw)| {
                let entry = key.trim().parse::<u32>().ok().zip(coerce_price(raw));
                if entry.is_none() {
                    tracing::debug!(key = %key, value = %raw, "dropping malformed price entry");
                }
                entry
            })
            .collect();
        Some(table)
    }

    /// Write a price table as `{"<id>": price}`.
    pub fn save(path: &Path, table: &PriceTable) -> LoadResult<()> {
        write_json_atomic(path, table)?;
        tracing::info!(path = %path.display(), entries = table.len(), "saved prices");
        Ok(())
    }
}

fn coerce_price(value: &Value) -> Option<u64> {
    let Value::Number(n) = value else {
        return None;
    };
    n.as_u64().or_else(|| {
        n.as_f64()
            .filter(|f| f.is_finite() && *f >= 0.0 && *f < u64::MAX as f64)
            .map(|f| f.trunc() as u64)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_only_well_formed_entries() {
        let table = PricesLoader::from_value(&json!({
            "713": 5,
            " 509 ": 3,
            "528": 12.9,
            "abc": 1,
            "7455": "10",
            "1": -4,
            "2": null,
            "3": 0
        }))
        .unwrap();

        let entries: Vec<(u32, u64)> = table.iter().collect();
        assert_eq!(entries, vec![(3, 0), (509, 3), (528, 12), (713, 5)]);
    }

    #[test]
    fn non_object_is_rejected() {
        assert!(PricesLoader::from_value(&json!([1, 2])).is_none());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user/prices.json");
        let table: PriceTable = [(713, 5), (509, 3)].into_iter().collect();

        PricesLoader::save(&path, &table).unwrap();
        assert_eq!(PricesLoader::load(&path), Some(table));

        let raw: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw, json!({"509": 3, "713": 5}));
    }

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(PricesLoader::load(&dir.path().join("prices.json")).is_none());
    }
}
