//! Item catalog: display names, item kinds and crafting recipes.
//!
//! Recipes use a fixed grammar, `QTY_ID(+QTY_ID)*`:
//!
//! ```text
//! "10_713+10_509+1_7455+5_528"  ->  10×713, 10×509, 1×7455, 5×528
//! ```
//!
//! Parsing is lenient: spaces are ignored and malformed segments are dropped,
//! keeping every well-formed one.

use std::collections::BTreeMap;

/// Catalog kind of items whose production cost is reported.
pub const FINAL_KIND: &str = "final";

/// Read access to item names and recipes.
///
/// This is the seam between the engine and wherever the catalog came from.
pub trait CatalogOracle {
    /// Display name for an item, if the catalog has one.
    fn display_name(&self, item_id: u32) -> Option<&str>;

    /// Items of kind `final`, ascending.
    fn final_item_ids(&self) -> Vec<u32>;

    /// Parsed recipe for an item; empty if the item or its recipe is unknown.
    fn recipe(&self, item_id: u32) -> Recipe;
}

/// One material requirement of a recipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecipeLine {
    pub material_id: u32,
    pub quantity: u32,
}

impl RecipeLine {
    pub const fn new(material_id: u32, quantity: u32) -> Self {
        Self {
            material_id,
            quantity,
        }
    }
}

/// Ordered list of material requirements.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recipe {
    lines: Vec<RecipeLine>,
}

impl Recipe {
    pub fn new(lines: Vec<RecipeLine>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[RecipeLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// `(material_id, quantity)` pairs in recipe order.
    pub fn pairs(&self) -> Vec<(u32, u32)> {
        self.lines
            .iter()
            .map(|line| (line.material_id, line.quantity))
            .collect()
    }
}

impl FromIterator<RecipeLine> for Recipe {
    fn from_iter<T: IntoIterator<Item = RecipeLine>>(iter: T) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

/// Parse a recipe string, keeping only well-formed `QTY_ID` segments.
///
/// A segment is kept when both sides parse as integers, the quantity is
/// positive and the id is non-negative.
pub fn parse_recipe(raw: &str) -> Recipe {
    let compact: String = raw.chars().filter(|c| *c != ' ').collect();
    compact
        .split('+')
        .filter(|segment| !segment.is_empty())
        .filter_map(parse_segment)
        .collect()
}

fn parse_segment(segment: &str) -> Option<RecipeLine> {
    let (qty, id) = segment.split_once('_')?;
    let quantity: u32 = qty.parse().ok()?;
    let material_id: u32 = id.parse().ok()?;
    (quantity > 0).then_some(RecipeLine::new(material_id, quantity))
}

/// Display name, or `#<id>` when the catalog has none.
///
/// Summaries and cost rows are matched by this name, so both sides must use
/// the same placeholder.
pub fn display_name_or_placeholder(catalog: &(impl CatalogOracle + ?Sized), item_id: u32) -> String {
    catalog
        .display_name(item_id)
        .map(str::to_owned)
        .unwrap_or_else(|| format!("#{item_id}"))
}

/// Human-readable recipe, e.g. `Red Herb×10, #509×2`.
pub fn recipe_label(recipe: &Recipe, catalog: &(impl CatalogOracle + ?Sized)) -> String {
    recipe
        .lines()
        .iter()
        .map(|line| {
            format!(
                "{}×{}",
                display_name_or_placeholder(catalog, line.material_id),
                line.quantity
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// One catalog row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogEntry {
    pub id: u32,
    /// Resolved display name; `None` when the row had no usable name.
    pub name: Option<String>,
    /// Free-form kind, e.g. `final` or `material`.
    pub kind: String,
    /// Raw recipe string in the `QTY_ID+...` grammar.
    pub recipe: Option<String>,
}

impl CatalogEntry {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn with_recipe(mut self, recipe: impl Into<String>) -> Self {
        self.recipe = Some(recipe.into());
        self
    }
}

/// In-memory catalog keyed by item id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: BTreeMap<u32, CatalogEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an entry. Later rows with the same id win.
    pub fn insert(&mut self, entry: CatalogEntry) {
        self.entries.insert(entry.id, entry);
    }

    pub fn entry(&self, item_id: u32) -> Option<&CatalogEntry> {
        self.entries.get(&item_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a name to an id: exact match first, then trimmed and
    /// case-insensitive.
    pub fn id_for_name(&self, name: &str) -> Option<u32> {
        let named = || {
            self.entries
                .values()
                .filter_map(|e| e.name.as_deref().map(|n| (e.id, n)))
        };
        if let Some((id, _)) = named().find(|(_, n)| *n == name) {
            return Some(id);
        }
        let needle = name.trim().to_lowercase();
        named()
            .find(|(_, n)| n.trim().to_lowercase() == needle)
            .map(|(id, _)| id)
    }

    /// Items whose kind equals `kind`, ignoring case and surrounding spaces.
    pub fn items_of_kind(&self, kind: &str) -> Vec<u32> {
        let needle = kind.trim().to_lowercase();
        self.entries
            .values()
            .filter(|e| e.kind.trim().to_lowercase() == needle)
            .map(|e| e.id)
            .collect()
    }

    /// Named items sorted by display name.
    pub fn items_by_name(&self) -> Vec<(u32, &str)> {
        let mut items: Vec<(u32, &str)> = self
            .entries
            .values()
            .filter_map(|e| e.name.as_deref().map(|n| (e.id, n)))
            .collect();
        items.sort_by(|a, b| a.1.cmp(b.1).then(a.0.cmp(&b.0)));
        items
    }
}

impl FromIterator<CatalogEntry> for Catalog {
    fn from_iter<T: IntoIterator<Item = CatalogEntry>>(iter: T) -> Self {
        let mut catalog = Catalog::new();
        for entry in iter {
            catalog.insert(entry);
        }
        catalog
    }
}

impl CatalogOracle for Catalog {
    fn display_name(&self, item_id: u32) -> Option<&str> {
        self.entries.get(&item_id).and_then(|e| e.name.as_deref())
    }

    fn final_item_ids(&self) -> Vec<u32> {
        self.items_of_kind(FINAL_KIND)
    }

    fn recipe(&self, item_id: u32) -> Recipe {
        self.entries
            .get(&item_id)
            .and_then(|e| e.recipe.as_deref())
            .map(parse_recipe)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        [
            CatalogEntry::new(12428, "Condensed White Potion")
                .with_kind("final")
                .with_recipe("10_713+10_509+1_7455+5_528"),
            CatalogEntry::new(12436, "Blue Herb Potion").with_kind(" Final "),
            CatalogEntry::new(713, "Empty Bottle").with_kind("material"),
            CatalogEntry::new(509, "White Herb").with_kind("material"),
            CatalogEntry {
                id: 7455,
                kind: "material".to_owned(),
                ..CatalogEntry::default()
            },
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn parses_recipe_in_order() {
        let recipe = parse_recipe("10_713+10_509+1_7455+5_528");
        assert_eq!(
            recipe.pairs(),
            vec![(713, 10), (509, 10), (7455, 1), (528, 5)]
        );
    }

    #[test]
    fn drops_malformed_segments() {
        assert_eq!(parse_recipe("abc+5_528").pairs(), vec![(528, 5)]);
        assert_eq!(parse_recipe("0_713+5_528").pairs(), vec![(528, 5)]);
        assert_eq!(parse_recipe("5_x+_3+7_+2_9_9+3_1").pairs(), vec![(1, 3)]);
        assert_eq!(parse_recipe("-1_713+2_-5").pairs(), Vec::<(u32, u32)>::new());
        assert!(parse_recipe("").is_empty());
        assert!(parse_recipe("++").is_empty());
    }

    #[test]
    fn ignores_spaces() {
        assert_eq!(
            parse_recipe(" 10 _ 713 + 1_7455 ").pairs(),
            vec![(713, 10), (7455, 1)]
        );
    }

    #[test]
    fn final_items_match_kind_case_insensitively() {
        assert_eq!(catalog().final_item_ids(), vec![12428, 12436]);
        assert_eq!(catalog().items_of_kind("MATERIAL"), vec![509, 713, 7455]);
    }

    #[test]
    fn recipe_lookup_defaults_to_empty() {
        let catalog = catalog();
        assert_eq!(catalog.recipe(12428).lines().len(), 4);
        assert!(catalog.recipe(12436).is_empty());
        assert!(catalog.recipe(1).is_empty());
    }

    #[test]
    fn name_resolution() {
        let catalog = catalog();
        assert_eq!(catalog.display_name(713), Some("Empty Bottle"));
        assert_eq!(catalog.display_name(7455), None);
        assert_eq!(catalog.id_for_name("White Herb"), Some(509));
        assert_eq!(catalog.id_for_name("  white herb "), Some(509));
        assert_eq!(catalog.id_for_name("Red Herb"), None);
        assert_eq!(display_name_or_placeholder(&catalog, 7455), "#7455");
    }

    #[test]
    fn items_by_name_skips_unnamed() {
        let catalog = catalog();
        let names: Vec<&str> = catalog.items_by_name().into_iter().map(|(_, n)| n).collect();
        assert_eq!(
            names,
            [
                "Blue Herb Potion",
                "Condensed White Potion",
                "Empty Bottle",
                "White Herb"
            ]
        );
    }

    #[test]
    fn recipe_label_uses_names_and_placeholders() {
        let catalog = catalog();
        let label = recipe_label(&catalog.recipe(12428), &catalog);
        assert_eq!(label, "Empty Bottle×10, White Herb×10, #7455×1, #528×5");
    }
}
