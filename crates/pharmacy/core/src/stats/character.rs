//! Character attributes, levels and skills.
//!
//! Field names follow the persisted profile format (`int_stat`, `des_stat`,
//! ...). Every field defaults independently, so a partial profile fills in
//! the rest.

use crate::engine::CharacterInputs;

use super::buffs::{BuffToggles, apply_buffs};

/// The six base attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum StatKind {
    #[strum(serialize = "STR")]
    Strength,
    #[strum(serialize = "AGI")]
    Agility,
    #[strum(serialize = "VIT")]
    Vitality,
    #[strum(serialize = "INT")]
    Intelligence,
    #[strum(serialize = "DEX")]
    Dexterity,
    #[strum(serialize = "LUK")]
    Luck,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CharacterStats {
    #[cfg_attr(feature = "serde", serde(rename = "for_stat"))]
    pub strength: i32,
    #[cfg_attr(feature = "serde", serde(rename = "agi_stat"))]
    pub agility: i32,
    #[cfg_attr(feature = "serde", serde(rename = "vit_stat"))]
    pub vitality: i32,
    #[cfg_attr(feature = "serde", serde(rename = "int_stat"))]
    pub intelligence: i32,
    #[cfg_attr(feature = "serde", serde(rename = "des_stat"))]
    pub dexterity: i32,
    #[cfg_attr(feature = "serde", serde(rename = "sor_stat"))]
    pub luck: i32,
}

impl CharacterStats {
    pub fn get(&self, stat: StatKind) -> i32 {
        match stat {
            StatKind::Strength => self.strength,
            StatKind::Agility => self.agility,
            StatKind::Vitality => self.vitality,
            StatKind::Intelligence => self.intelligence,
            StatKind::Dexterity => self.dexterity,
            StatKind::Luck => self.luck,
        }
    }

    pub fn add(&mut self, stat: StatKind, delta: i32) {
        let slot = match stat {
            StatKind::Strength => &mut self.strength,
            StatKind::Agility => &mut self.agility,
            StatKind::Vitality => &mut self.vitality,
            StatKind::Intelligence => &mut self.intelligence,
            StatKind::Dexterity => &mut self.dexterity,
            StatKind::Luck => &mut self.luck,
        };
        *slot = slot.saturating_add(delta);
    }
}

impl Default for CharacterStats {
    /// 100 in every attribute.
    fn default() -> Self {
        Self {
            strength: 100,
            agility: 100,
            vitality: 100,
            intelligence: 100,
            dexterity: 100,
            luck: 100,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CharacterLevels {
    pub job_level: i32,
    pub base_level: i32,
}

impl Default for CharacterLevels {
    fn default() -> Self {
        Self {
            job_level: 50,
            base_level: 120,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Skills {
    pub potion_research: i32,
    pub chemical_protection_full: i32,
    /// Selects the rules level for difficulty and potion caps.
    pub advanced_pharmacy: i32,
    pub pharmacy: i32,
}

impl Default for Skills {
    fn default() -> Self {
        Self {
            potion_research: 10,
            chemical_protection_full: 5,
            advanced_pharmacy: 10,
            pharmacy: 10,
        }
    }
}

/// Everything a player edits: attributes, levels, skills and buff toggles.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CharacterProfile {
    pub schema: String,
    pub stats: CharacterStats,
    pub levels: CharacterLevels,
    pub skills: Skills,
    pub buffs: BuffToggles,
}

impl CharacterProfile {
    pub const SCHEMA: &'static str = "profile.v1";

    /// Base stats with every enabled buff applied.
    pub fn effective_stats(&self) -> CharacterStats {
        apply_buffs(&self.stats, &self.buffs)
    }

    /// Formula inputs derived from effective stats, levels and skills.
    pub fn inputs(&self) -> CharacterInputs {
        let stats = self.effective_stats();
        CharacterInputs {
            intelligence: stats.intelligence,
            dexterity: stats.dexterity,
            luck: stats.luck,
            job_level: self.levels.job_level,
            base_level: self.levels.base_level,
            potion_research_level: self.skills.potion_research,
            protection_level: self.skills.chemical_protection_full,
        }
    }
}

impl Default for CharacterProfile {
    fn default() -> Self {
        Self {
            schema: Self::SCHEMA.to_owned(),
            stats: CharacterStats::default(),
            levels: CharacterLevels::default(),
            skills: Skills::default(),
            buffs: BuffToggles::new(),
        }
    }
}
