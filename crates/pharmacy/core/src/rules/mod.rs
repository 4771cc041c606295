//! Immutable Special Pharmacy rules.
//!
//! Three integer tables drive the computation:
//! - base difficulty by skill level (levels `0..=10`)
//! - maximum potions per attempt by skill level
//! - base difficulty by craftable item
//!
//! The list of craftable items is derived from the per-item table and is never
//! stored separately, so the two cannot disagree.

mod document;
mod error;

pub use document::{RawSection, RulesDocument};
pub use error::RulesError;

use std::collections::BTreeMap;

use crate::config::PharmacyConfig;

/// Validated, read-only rules.
///
/// Built once via [`Rules::from_document`] and shared by reference; there is no
/// interior mutability, so concurrent readers need no synchronization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rules {
    diff_by_level: BTreeMap<i32, i32>,
    max_by_level: BTreeMap<i32, i32>,
    diff_by_item: BTreeMap<u32, i32>,
}

impl Rules {
    // -------- Construction / Validation --------

    /// Parse and validate a raw document.
    ///
    /// # Errors
    ///
    /// [`RulesError::InvalidRules`] when a section is missing or empty, a key
    /// is not an integer, a level key lies outside `0..=10`, or a value is
    /// negative.
    pub fn from_document(doc: &RulesDocument) -> Result<Self, RulesError> {
        let (Some(by_level), Some(max_potions), Some(by_item)) = (
            present(&doc.base_difficulty_by_level),
            present(&doc.max_potions_by_level),
            present(&doc.base_difficulty_by_item_id),
        ) else {
            let missing: Vec<&str> = [
                ("base_difficulty_by_level", &doc.base_difficulty_by_level),
                ("max_potions_by_level", &doc.max_potions_by_level),
                ("base_difficulty_by_item_id", &doc.base_difficulty_by_item_id),
            ]
            .into_iter()
            .filter(|(_, section)| present(section).is_none())
            .map(|(name, _)| name)
            .collect();
            return Err(RulesError::invalid(format!(
                "missing or empty sections: {}",
                missing.join(", ")
            )));
        };

        let diff_by_level = level_section("base_difficulty_by_level", by_level)?;
        let max_by_level = level_section("max_potions_by_level", max_potions)?;
        let diff_by_item = item_section("base_difficulty_by_item_id", by_item)?;

        Ok(Self {
            diff_by_level,
            max_by_level,
            diff_by_item,
        })
    }

    /// Serialize back into a document, including the derived `item_ids`.
    pub fn to_document(&self) -> RulesDocument {
        fn raw<K: ToString>(map: &BTreeMap<K, i32>) -> RawSection {
            map.iter()
                .map(|(k, v)| (k.to_string(), i64::from(*v)))
                .collect()
        }

        RulesDocument {
            item_ids: Some(self.item_ids()),
            base_difficulty_by_level: Some(raw(&self.diff_by_level)),
            max_potions_by_level: Some(raw(&self.max_by_level)),
            base_difficulty_by_item_id: Some(raw(&self.diff_by_item)),
        }
    }

    // -------- Queries (pure, no I/O) --------

    /// Base difficulty contributed by the skill level.
    pub fn difficulty_by_level(&self, level: i32) -> Result<i32, RulesError> {
        self.diff_by_level
            .get(&level)
            .copied()
            .ok_or(RulesError::LevelOutOfRange(level))
    }

    /// Base difficulty contributed by the item.
    pub fn difficulty_by_item(&self, item_id: u32) -> Result<i32, RulesError> {
        self.diff_by_item
            .get(&item_id)
            .copied()
            .ok_or(RulesError::UnknownItem(item_id))
    }

    /// Total difficulty of crafting `item_id` at `level`.
    pub fn item_difficulty(&self, item_id: u32, level: i32) -> Result<i32, RulesError> {
        Ok(self
            .difficulty_by_level(level)?
            .saturating_add(self.difficulty_by_item(item_id)?))
    }

    /// Maximum potions per attempt at `level`, or `fallback` when the level has
    /// no cap entry.
    pub fn potion_cap(&self, level: i32, fallback: i32) -> i32 {
        self.max_by_level.get(&level).copied().unwrap_or(fallback)
    }

    /// Levels with a base difficulty, ascending.
    pub fn levels(&self) -> Vec<i32> {
        self.diff_by_level.keys().copied().collect()
    }

    /// Craftable items, ascending. Always the key set of the per-item table.
    pub fn item_ids(&self) -> Vec<u32> {
        self.diff_by_item.keys().copied().collect()
    }
}

fn present(section: &Option<RawSection>) -> Option<&RawSection> {
    section.as_ref().filter(|s| !s.is_empty())
}

fn level_section(name: &str, raw: &RawSection) -> Result<BTreeMap<i32, i32>, RulesError> {
    let mut out = BTreeMap::new();
    for (key, value) in raw {
        let level: i32 = key.trim().parse().map_err(|_| {
            RulesError::invalid(format!("{name}: level key '{key}' is not an integer"))
        })?;
        if !PharmacyConfig::is_valid_level(level) {
            return Err(RulesError::invalid(format!(
                "{name}: invalid level key '{key}' (expected {}..{})",
                PharmacyConfig::MIN_LEVEL,
                PharmacyConfig::MAX_LEVEL
            )));
        }
        out.insert(level, non_negative(name, *value)?);
    }
    Ok(out)
}

fn item_section(name: &str, raw: &RawSection) -> Result<BTreeMap<u32, i32>, RulesError> {
    let mut out = BTreeMap::new();
    for (key, value) in raw {
        let item_id: u32 = key.trim().parse().map_err(|_| {
            RulesError::invalid(format!("{name}: item key '{key}' is not a valid item id"))
        })?;
        out.insert(item_id, non_negative(name, *value)?);
    }
    Ok(out)
}

fn non_negative(name: &str, value: i64) -> Result<i32, RulesError> {
    if value < 0 {
        return Err(RulesError::invalid(format!(
            "{name} must be non-negative integers"
        )));
    }
    i32::try_from(value)
        .map_err(|_| RulesError::invalid(format!("{name}: value {value} is too large")))
}
