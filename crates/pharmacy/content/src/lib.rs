//! Data files for the Special Pharmacy calculator.
//!
//! This crate reads the JSON documents that feed `pharmacy-core`:
//! - Special Pharmacy rules (difficulty and potion-cap tables)
//! - Item catalog (names, kinds, recipes)
//! - Material prices (packaged defaults plus per-user overrides)
//! - Character profile (packaged default plus per-user copy)
//!
//! Ingestion is lenient wherever the data is user-editable: malformed entries
//! are dropped and logged, the rest is kept. Rules are the exception and fail
//! loudly, since every computation depends on them.

pub mod loaders;

pub use loaders::{
    CatalogLoader, ContentFactory, LoadResult, LoadedPrices, PriceSource, PricesLoader,
    ProfileLoader, RulesLoader, write_json_atomic,
};
