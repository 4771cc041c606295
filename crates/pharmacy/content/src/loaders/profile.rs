//! Character profile loader.
//!
//! ```text
//! {
//!   "schema": "profile.v1",
//!   "stats":  {"for_stat": 100, "agi_stat": 100, "vit_stat": 100,
//!              "int_stat": 100, "des_stat": 100, "sor_stat": 100},
//!   "levels": {"job_level": 50, "base_level": 120},
//!   "skills": {"potion_research": 10, "chemical_protection_full": 5,
//!              "advanced_pharmacy": 10, "pharmacy": 10},
//!   "buffs":  {"gloria": false, "bencao": true, ...}
//! }
//! ```
//!
//! Missing fields take their defaults one by one. Unknown buff keys are ignored.

use std::path::Path;
use std::str::FromStr;

use anyhow::Context;
use pharmacy_core::{BuffKind, BuffToggles, CharacterLevels, CharacterProfile, CharacterStats, Skills};
use serde::Deserialize;
use serde_json::{Map, Value};
use strum::IntoEnumIterator;

use crate::loaders::{LoadResult, read_file, write_json_atomic};

/// On-disk profile with buffs kept raw until they are filtered.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProfileFile {
    schema: Option<String>,
    stats: CharacterStats,
    levels: CharacterLevels,
    skills: Skills,
    buffs: Map<String, Value>,
}

/// Loader for profile files (`defaults/profile.default.json`, user `profile.json`).
pub struct ProfileLoader;

impl ProfileLoader {
    /// Load a profile from a JSON file.
    pub fn load(path: &Path) -> LoadResult<CharacterProfile> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("Invalid profile file {}", path.display()))
    }

    /// Parse a profile from JSON text. The document must be an object.
    pub fn parse(content: &str) -> LoadResult<CharacterProfile> {
        let value: Value = serde_json::from_str(content).context("Failed to parse profile JSON")?;
        anyhow::ensure!(value.is_object(), "profile must be a JSON object");
        let file: ProfileFile =
            serde_json::from_value(value).context("Failed to decode profile fields")?;

        if let Some(schema) = file.schema.as_deref().filter(|s| *s != CharacterProfile::SCHEMA) {
            tracing::warn!(schema, "unexpected profile schema; reading anyway");
        }

        Ok(CharacterProfile {
            schema: CharacterProfile::SCHEMA.to_owned(),
            stats: file.stats,
            levels: file.levels,
            skills: file.skills,
            buffs: buff_toggles(&file.buffs),
        })
    }

    /// Write a profile with every known buff spelled out.
    pub fn save(path: &Path, profile: &CharacterProfile) -> LoadResult<()> {
        write_json_atomic(path, &Self::normalized(profile))?;
        tracing::info!(path = %path.display(), "saved profile");
        Ok(())
    }

    /// Copy of `profile` with the current schema and an explicit toggle for
    /// every buff.
    pub fn normalized(profile: &CharacterProfile) -> CharacterProfile {
        let mut out = profile.clone();
        out.schema = CharacterProfile::SCHEMA.to_owned();
        for buff in BuffKind::iter() {
            out.buffs.entry(buff).or_insert(false);
        }
        out
    }
}

fn buff_toggles(raw: &Map<String, Value>) -> BuffToggles {
    raw.iter()
        .filter_map(|(key, value)| match BuffKind::from_str(key) {
            Ok(buff) => Some((buff, value.as_bool().unwrap_or(false))),
            Err(_) => {
                tracing::debug!(key = %key, "ignoring unknown buff");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pharmacy_core::enumerate_outcomes;

    #[test]
    fn partial_profile_fills_defaults() {
        let profile = ProfileLoader::parse(
            r#"{"stats": {"int_stat": 130}, "levels": {"base_level": 175}, "buffs": {"gloria": true}}"#,
        )
        .unwrap();

        assert_eq!(profile.stats.intelligence, 130);
        assert_eq!(profile.stats.dexterity, 100);
        assert_eq!(profile.levels.base_level, 175);
        assert_eq!(profile.levels.job_level, 50);
        assert_eq!(profile.skills, Skills::default());
        assert_eq!(profile.buffs.get(&BuffKind::Gloria), Some(&true));
        assert_eq!(profile.schema, "profile.v1");
    }

    #[test]
    fn unknown_and_non_boolean_buffs() {
        let profile =
            ProfileLoader::parse(r#"{"buffs": {"haste": true, "bencao": 1, "comida_sor_grande": true}}"#)
                .unwrap();
        assert_eq!(
            profile.buffs,
            BuffToggles::from([(BuffKind::Blessing, false), (BuffKind::LukFood, true)])
        );
    }

    #[test]
    fn empty_object_is_default_profile() {
        assert_eq!(ProfileLoader::parse("{}").unwrap(), CharacterProfile::default());
    }

    #[test]
    fn rejects_non_objects() {
        assert!(ProfileLoader::parse("[]").is_err());
        assert!(ProfileLoader::parse("nope").is_err());
    }

    #[test]
    fn save_writes_persisted_field_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        let mut profile = CharacterProfile::default();
        profile.stats.luck = 120;
        profile.buffs.insert(BuffKind::DivineCake, true);

        ProfileLoader::save(&path, &profile).unwrap();

        let raw: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["schema"], "profile.v1");
        assert_eq!(raw["stats"]["sor_stat"], 120);
        assert_eq!(raw["skills"]["chemical_protection_full"], 5);
        assert_eq!(raw["buffs"]["bolinho_divino"], true);
        assert_eq!(raw["buffs"]["gloria"], false);

        let loaded = ProfileLoader::load(&path).unwrap();
        assert_eq!(loaded, ProfileLoader::normalized(&profile));
    }

    #[test]
    fn out_of_range_skills_still_enumerate() {
        let profile =
            ProfileLoader::parse(r#"{"skills": {"potion_research": 1000000000}}"#).unwrap();
        let outcomes = enumerate_outcomes(&profile.inputs());
        assert_eq!(outcomes.len(), 847);
        assert_eq!(outcomes.min(), Some(i32::MAX));

        let profile = ProfileLoader::parse(r#"{"levels": {"base_level": -2147483600}}"#).unwrap();
        assert_eq!(enumerate_outcomes(&profile.inputs()).len(), 847);
    }
}
