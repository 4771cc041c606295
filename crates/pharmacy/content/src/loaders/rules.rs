//! Special Pharmacy rules loader.

use std::path::Path;

use anyhow::Context;
use pharmacy_core::rules::RawSection;
use pharmacy_core::{Rules, RulesDocument, RulesError};
use serde_json::{Map, Value};

use crate::loaders::{LoadResult, read_file};

const SECTIONS: [&str; 3] = [
    "base_difficulty_by_level",
    "max_potions_by_level",
    "base_difficulty_by_item_id",
];

/// Loader for the rules document (`skills/pharmacy_special.json`).
///
/// Any problem with the document surfaces as [`RulesError::InvalidRules`],
/// reachable through `anyhow::Error::downcast_ref`.
pub struct RulesLoader;

impl RulesLoader {
    /// Load and validate rules from a JSON file.
    pub fn load(path: &Path) -> LoadResult<Rules> {
        let content = read_file(path)?;
        let rules = Self::parse(&content)
            .with_context(|| format!("Failed to load rules from {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            items = rules.item_ids().len(),
            levels = rules.levels().len(),
            "loaded special pharmacy rules"
        );
        Ok(rules)
    }

    /// Parse and validate rules from JSON text.
    pub fn parse(content: &str) -> LoadResult<Rules> {
        let doc = Self::parse_document(content)?;
        Ok(Rules::from_document(&doc)?)
    }

    /// Parse JSON text into an unvalidated document.
    ///
    /// Section values may be JSON integers, floats without a fractional part,
    /// or strings holding an integer. `item_ids` is ignored.
    pub fn parse_document(content: &str) -> Result<RulesDocument, RulesError> {
        let value: Value = serde_json::from_str(content)
            .map_err(|e| RulesError::InvalidRules(format!("not valid JSON: {e}")))?;
        let Value::Object(root) = value else {
            return Err(RulesError::InvalidRules(
                "rules document must be a JSON object".to_owned(),
            ));
        };

        let [by_level, max_potions, by_item] = SECTIONS.map(|name| section(&root, name));
        Ok(RulesDocument {
            item_ids: None,
            base_difficulty_by_level: by_level?,
            max_potions_by_level: max_potions?,
            base_difficulty_by_item_id: by_item?,
        })
    }
}

fn section(
    root: &Map<String, Value>,
    name: &str,
) -> Result<Option<RawSection>, RulesError> {
    let raw = match root.get(name) {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Object(raw)) => raw,
        Some(_) => {
            return Err(RulesError::InvalidRules(format!(
                "{name} must be a JSON object"
            )));
        }
    };

    raw.iter()
        .map(|(key, value)| {
            coerce_integer(value).map(|v| (key.clone(), v)).ok_or_else(|| {
                RulesError::InvalidRules(format!(
                    "{name}: value for '{key}' is not an integer ({value})"
                ))
            })
        })
        .collect::<Result<RawSection, _>>()
        .map(Some)
}

fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
