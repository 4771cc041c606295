//! Subcommands of the `pharmacy` binary.

mod costs;
mod outcomes;
mod prices;
mod profile;

pub use costs::Costs;
pub use outcomes::Outcomes;
pub use prices::{Prices, ResetPrices, SetPrice};
pub use profile::Profile;

use anyhow::Result;
use pharmacy_content::ContentFactory;
use pharmacy_core::{Catalog, CharacterProfile, PharmacyConfig, PharmacyEngine, PharmacySnapshot};

use crate::config::CliConfig;

/// Content access shared by every subcommand.
pub struct Session {
    factory: ContentFactory,
}

impl Session {
    pub fn new(config: &CliConfig) -> Self {
        let mut factory = ContentFactory::new(config.data_dir.clone());
        if let Some(dir) = &config.user_dir {
            factory = factory.with_user_dir(dir.clone());
        }
        Self { factory }
    }

    pub fn factory(&self) -> &ContentFactory {
        &self.factory
    }

    /// Profile with an optional Advanced Pharmacy level override.
    pub fn profile(&self, level: Option<i32>) -> Result<CharacterProfile> {
        let mut profile = self.factory.load_profile();
        if let Some(level) = level {
            anyhow::ensure!(
                PharmacyConfig::is_valid_level(level),
                "--level must be in {}..={}, got {level}",
                PharmacyConfig::MIN_LEVEL,
                PharmacyConfig::MAX_LEVEL
            );
            profile.skills.advanced_pharmacy = level;
        }
        Ok(profile)
    }

    /// Load rules and catalog, then recompute the snapshot for `profile`.
    pub fn snapshot(&self, profile: &CharacterProfile) -> Result<(Catalog, PharmacySnapshot)> {
        let rules = self.factory.load_rules()?;
        let catalog = self.factory.load_catalog()?;
        let snapshot = PharmacyEngine::new(&rules).compute(profile, &catalog);
        Ok((catalog, snapshot))
    }
}
