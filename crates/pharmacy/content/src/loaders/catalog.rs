//! Item catalog loader.
//!
//! Three document shapes are accepted:
//!
//! ```text
//! {"schema": "items.v1", "items": [{"id": 6210, "name_pt": "...", "type": "final", "recipe": "..."}]}
//! [{"id": 6210, "name_pt": "...", "type": "final", "recipe": "..."}]
//! {"6210": {"name_pt": "...", "type": "final", "recipe": "..."}}
//! ```

use std::path::Path;

use anyhow::Context;
use pharmacy_core::{Catalog, CatalogEntry};
use serde_json::{Map, Value};

use crate::loaders::{LoadResult, read_file};

/// Name fields in order of preference.
const NAME_KEYS: [&str; 3] = ["name_pt", "name_en", "name"];

/// Loader for the item catalog (`catalog/items.json`).
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> LoadResult<Catalog> {
        let content = read_file(path)?;
        let value: Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse item catalog JSON {}", path.display()))?;
        let catalog = Self::from_value(&value);
        tracing::info!(path = %path.display(), items = catalog.len(), "loaded item catalog");
        Ok(catalog)
    }

    /// Build a catalog from an already parsed document.
    ///
    /// Rows that are not objects or lack an integer id are skipped. Any other
    /// top-level value yields an empty catalog.
    pub fn from_value(value: &Value) -> Catalog {
        match value {
            Value::Object(root) => match root.get("items") {
                Some(Value::Array(rows)) => from_rows(rows),
                _ => from_mapping(root),
            },
            Value::Array(rows) => from_rows(rows),
            _ => {
                tracing::warn!("item catalog is neither an object nor a list; ignoring");
                Catalog::new()
            }
        }
    }
}

fn from_rows(rows: &[Value]) -> Catalog {
    rows.iter()
        .filter_map(|row| {
            let row = row.as_object()?;
            let id = row.get("id").and_then(coerce_id)?;
            Some(entry(id, row))
        })
        .collect()
}

fn from_mapping(root: &Map<String, Value>) -> Catalog {
    root.iter()
        .filter_map(|(key, row)| {
            let row = row.as_object()?;
            let id = key.trim().parse().ok()?;
            Some(entry(id, row))
        })
        .collect()
}

fn entry(id: u32, row: &Map<String, Value>) -> CatalogEntry {
    CatalogEntry {
        id,
        name: pick_name(row),
        kind: row
            .get("type")
            .and_then(scalar_text)
            .unwrap_or_default(),
        recipe: row.get("recipe").and_then(Value::as_str).map(str::to_owned),
    }
}

fn pick_name(row: &Map<String, Value>) -> Option<String> {
    NAME_KEYS
        .iter()
        .filter_map(|key| row.get(*key).and_then(scalar_text))
        .map(|name| name.trim().to_owned())
        .find(|name| !name.is_empty())
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn coerce_id(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|id| u32::try_from(id).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
