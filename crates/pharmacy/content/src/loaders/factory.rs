//! Content factory for resolving packaged and per-user data files.

use std::path::{Path, PathBuf};

use anyhow::Context;
use pharmacy_core::{Catalog, CharacterProfile, PriceTable, Rules};

use crate::loaders::{
    CatalogLoader, LoadResult, LoadedPrices, PriceSource, PricesLoader, ProfileLoader,
    RulesLoader, read_file, write_json_atomic,
};

/// Content factory that loads calculator content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/                       (packaged, read-only)
/// ├── catalog/items.json
/// ├── skills/pharmacy_special.json
/// └── defaults/
///     ├── profile.default.json
///     └── prices.json
///
/// user_dir/                       (per-user, writable)
/// ├── profile.json
/// └── prices.json
/// ```
///
/// Without a user directory, reads fall back to packaged data and writes fail.
pub struct ContentFactory {
    data_dir: PathBuf,
    user_dir: Option<PathBuf>,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            user_dir: None,
        }
    }

    /// Sets the per-user directory for profile and price overrides.
    pub fn with_user_dir(mut self, user_dir: impl Into<PathBuf>) -> Self {
        self.user_dir = Some(user_dir.into());
        self
    }

    // -------- Packaged content --------

    /// Load Special Pharmacy rules from `skills/pharmacy_special.json`.
    pub fn load_rules(&self) -> LoadResult<Rules> {
        RulesLoader::load(&self.rules_path())
    }

    /// Load the item catalog from `catalog/items.json`.
    ///
    /// A missing catalog yields an empty one: items then show as `#<id>`.
    pub fn load_catalog(&self) -> LoadResult<Catalog> {
        let path = self.catalog_path();
        if !path.exists() {
            tracing::warn!(path = %path.display(), "item catalog not found; names unavailable");
            return Ok(Catalog::new());
        }
        CatalogLoader::load(&path)
    }

    // -------- Prices --------

    /// Load prices: user file, else packaged defaults, else empty.
    pub fn load_prices(&self) -> LoadedPrices {
        let candidates = [
            (self.user_path("prices.json"), PriceSource::User),
            (Some(self.default_prices_path()), PriceSource::Default),
        ];
        let loaded = candidates
            .into_iter()
            .find_map(|(path, source)| {
                let table = PricesLoader::load(&path?)?;
                Some(LoadedPrices { table, source })
            })
            .unwrap_or(LoadedPrices {
                table: PriceTable::new(),
                source: PriceSource::Empty,
            });
        tracing::info!(source = %loaded.source, entries = loaded.table.len(), "loaded prices");
        loaded
    }

    /// Persist prices to the user file. Returns the written path.
    pub fn save_prices(&self, table: &PriceTable) -> LoadResult<PathBuf> {
        let path = self.require_user_path("prices.json")?;
        PricesLoader::save(&path, table)?;
        Ok(path)
    }

    /// Overwrite the user prices with the packaged defaults.
    pub fn reset_prices(&self) -> LoadResult<PathBuf> {
        let default_path = self.default_prices_path();
        let table = PricesLoader::load(&default_path)
            .with_context(|| format!("Missing default prices: {}", default_path.display()))?;
        self.save_prices(&table)
    }

    // -------- Profile --------

    /// Load the profile: user file, else packaged default, else built-in
    /// defaults. Unreadable files are logged and skipped.
    pub fn load_profile(&self) -> CharacterProfile {
        let candidates = [
            self.user_path("profile.json"),
            Some(self.default_profile_path()),
        ];
        for path in candidates.into_iter().flatten() {
            if !path.exists() {
                continue;
            }
            match ProfileLoader::load(&path) {
                Ok(profile) => {
                    tracing::info!(path = %path.display(), "loaded profile");
                    return profile;
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %format!("{err:#}"), "skipping profile")
                }
            }
        }
        tracing::info!("using built-in default profile");
        CharacterProfile::default()
    }

    /// Persist the profile to the user file. Returns the written path.
    pub fn save_profile(&self, profile: &CharacterProfile) -> LoadResult<PathBuf> {
        let path = self.require_user_path("profile.json")?;
        ProfileLoader::save(&path, profile)?;
        Ok(path)
    }

    /// Copy the packaged default profile over the user profile and return it.
    pub fn reset_profile(&self) -> LoadResult<CharacterProfile> {
        let default_path = self.default_profile_path();
        let content = read_file(&default_path)?;
        let profile = ProfileLoader::parse(&content).with_context(|| {
            format!("Missing/invalid default profile: {}", default_path.display())
        })?;
        // the packaged document is copied as-is, not re-serialized
        let raw: serde_json::Value = serde_json::from_str(&content)?;
        write_json_atomic(&self.require_user_path("profile.json")?, &raw)?;
        tracing::info!("profile reset to packaged default");
        Ok(profile)
    }

    /// Read a profile from an arbitrary file.
    pub fn import_profile(&self, path: &Path) -> LoadResult<CharacterProfile> {
        ProfileLoader::load(path)
    }

    /// Write a profile to an arbitrary file.
    pub fn export_profile(&self, path: &Path, profile: &CharacterProfile) -> LoadResult<()> {
        ProfileLoader::save(path, profile)
    }

    // -------- Paths --------

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn user_dir(&self) -> Option<&Path> {
        self.user_dir.as_deref()
    }

    pub fn rules_path(&self) -> PathBuf {
        self.data_dir.join("skills").join("pharmacy_special.json")
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.data_dir.join("catalog").join("items.json")
    }

    pub fn default_profile_path(&self) -> PathBuf {
        self.data_dir.join("defaults").join("profile.default.json")
    }

    pub fn default_prices_path(&self) -> PathBuf {
        self.data_dir.join("defaults").join("prices.json")
    }

    fn user_path(&self, file: &str) -> Option<PathBuf> {
        self.user_dir.as_ref().map(|dir| dir.join(file))
    }

    fn require_user_path(&self, file: &str) -> LoadResult<PathBuf> {
        self.user_path(file)
            .ok_or_else(|| anyhow::anyhow!("No user directory configured for {file}"))
    }
}
