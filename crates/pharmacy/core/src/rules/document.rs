//! Raw rules document as it appears on disk.

use std::collections::BTreeMap;

/// One integer-keyed section of the rules document.
///
/// Keys stay strings here (JSON object keys); [`Rules`](super::Rules) parses
/// and validates them.
pub type RawSection = BTreeMap<String, i64>;

/// Unvalidated rules document.
///
/// A `None` section means the key was absent. `item_ids` is written by
/// [`Rules::to_document`](super::Rules::to_document) for readers that want it,
/// but is never read back: the item list is always derived from
/// `base_difficulty_by_item_id`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RulesDocument {
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub item_ids: Option<Vec<u32>>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub base_difficulty_by_level: Option<RawSection>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub max_potions_by_level: Option<RawSection>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub base_difficulty_by_item_id: Option<RawSection>,
}

impl RulesDocument {
    /// Builds a document from `(key, value)` pairs for each required section.
    pub fn from_sections<L, M, I>(by_level: L, max_potions: M, by_item: I) -> Self
    where
        L: IntoIterator<Item = (&'static str, i64)>,
        M: IntoIterator<Item = (&'static str, i64)>,
        I: IntoIterator<Item = (&'static str, i64)>,
    {
        fn collect(pairs: impl IntoIterator<Item = (&'static str, i64)>) -> RawSection {
            pairs.into_iter().map(|(k, v)| (k.to_owned(), v)).collect()
        }

        Self {
            item_ids: None,
            base_difficulty_by_level: Some(collect(by_level)),
            max_potions_by_level: Some(collect(max_potions)),
            base_difficulty_by_item_id: Some(collect(by_item)),
        }
    }
}
