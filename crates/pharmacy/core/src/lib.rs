//! Deterministic Special Pharmacy calculations shared across front-ends.
//!
//! `pharmacy-core` defines the canonical rules (formula, outcome enumeration,
//! difficulty tiers, production costs) and exposes pure APIs that can be reused
//! by the terminal client and by offline tools. Data files are read elsewhere
//! (see `pharmacy-content`); everything in this crate operates on values that
//! were already loaded.
//!
//! Pipeline:
//!
//! ```text
//! CharacterProfile ──► engine::enumerate_outcomes ──► OutcomeSet
//!                                                      │
//! Rules (difficulty by level/item, potion caps) ──────►│ summary::summarize
//!                                                      ▼
//!                                              PharmacySnapshot
//!                                                      │
//! Catalog (names, recipes) + PriceTable ──────────────►│ cost::aggregate_production_costs
//!                                                      ▼
//!                                                 Vec<CostRow>
//! ```
pub mod catalog;
pub mod config;
pub mod cost;
pub mod engine;
pub mod error;
pub mod prices;
pub mod rules;
pub mod stats;
pub mod summary;
pub mod tiers;

pub use catalog::{
    Catalog, CatalogEntry, CatalogOracle, Recipe, RecipeLine, display_name_or_placeholder,
    parse_recipe, recipe_label,
};
pub use config::PharmacyConfig;
pub use cost::{CostError, CostRow, aggregate_production_costs, materials_cost};
pub use engine::{
    CharacterInputs, Draw, FormulaError, OutcomeSet, PharmacyEngine, enumerate_outcomes,
    special_pharmacy,
};
pub use error::{ErrorSeverity, PharmacyError};
pub use prices::{PriceRow, PriceTable};
pub use rules::{Rules, RulesDocument, RulesError};
pub use stats::{
    BuffKind, BuffToggles, CharacterLevels, CharacterProfile, CharacterStats, Skills, StatKind,
    apply_buffs,
};
pub use summary::{ItemSummary, PharmacySnapshot, summarize};
pub use tiers::{BucketResult, Tier, bucketize};
