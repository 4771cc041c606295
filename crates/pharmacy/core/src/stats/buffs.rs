//! Declarative buff catalog.
//!
//! Buffs add flat amounts to base attributes before the formula runs. Keys are
//! stable identifiers persisted in profiles.

use std::collections::BTreeMap;

use strum::IntoEnumIterator;

use super::character::{CharacterStats, StatKind};

/// Supported buffs, keyed by their persisted identifier.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BuffKind {
    /// Gloria: LUK +30
    #[strum(serialize = "gloria")]
    #[cfg_attr(feature = "serde", serde(rename = "gloria"))]
    Gloria,
    /// Blessing: STR, INT, DEX +10
    #[strum(serialize = "bencao")]
    #[cfg_attr(feature = "serde", serde(rename = "bencao"))]
    Blessing,
    /// Large INT food: INT +20
    #[strum(serialize = "comida_int_grande")]
    #[cfg_attr(feature = "serde", serde(rename = "comida_int_grande"))]
    IntFood,
    /// Large LUK food: LUK +20
    #[strum(serialize = "comida_sor_grande")]
    #[cfg_attr(feature = "serde", serde(rename = "comida_sor_grande"))]
    LukFood,
    /// Large DEX food: DEX +20
    #[strum(serialize = "comida_des_grande")]
    #[cfg_attr(feature = "serde", serde(rename = "comida_des_grande"))]
    DexFood,
    /// Divine cake: every attribute +10
    #[strum(serialize = "bolinho_divino")]
    #[cfg_attr(feature = "serde", serde(rename = "bolinho_divino"))]
    DivineCake,
}

impl BuffKind {
    /// Label shown to players.
    pub const fn label(&self) -> &'static str {
        match self {
            BuffKind::Gloria => "Glória",
            BuffKind::Blessing => "Benção",
            BuffKind::IntFood => "Comida de INT (Grande)",
            BuffKind::LukFood => "Comida de SOR (Grande)",
            BuffKind::DexFood => "Comida de DES (Grande)",
            BuffKind::DivineCake => "Bolinho Divino",
        }
    }

    /// Flat bonuses granted by this buff.
    pub fn bonuses(&self) -> &'static [(StatKind, i32)] {
        use StatKind::*;
        match self {
            BuffKind::Gloria => &[(Luck, 30)],
            BuffKind::Blessing => &[(Intelligence, 10), (Dexterity, 10), (Strength, 10)],
            BuffKind::IntFood => &[(Intelligence, 20)],
            BuffKind::LukFood => &[(Luck, 20)],
            BuffKind::DexFood => &[(Dexterity, 20)],
            BuffKind::DivineCake => &[
                (Strength, 10),
                (Agility, 10),
                (Vitality, 10),
                (Intelligence, 10),
                (Dexterity, 10),
                (Luck, 10),
            ],
        }
    }
}

/// Which buffs are active. Buffs absent from the map are off.
pub type BuffToggles = BTreeMap<BuffKind, bool>;

/// Apply every enabled buff to `base` and return the effective stats.
pub fn apply_buffs(base: &CharacterStats, toggles: &BuffToggles) -> CharacterStats {
    let mut out = *base;
    for buff in BuffKind::iter().filter(|b| toggles.get(b).copied().unwrap_or(false)) {
        for (stat, delta) in buff.bonuses() {
            out.add(*stat, *delta);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn keys_round_trip() {
        for buff in BuffKind::iter() {
            assert_eq!(BuffKind::from_str(buff.as_ref()), Ok(buff));
        }
        assert_eq!(BuffKind::from_str("bencao"), Ok(BuffKind::Blessing));
        assert!(BuffKind::from_str("unknown").is_err());
    }

    #[test]
    fn no_toggles_keep_base() {
        let base = CharacterStats::default();
        assert_eq!(apply_buffs(&base, &BuffToggles::new()), base);
    }

    #[test]
    fn disabled_buffs_are_ignored() {
        let base = CharacterStats::default();
        let toggles = BuffToggles::from([(BuffKind::Gloria, false)]);
        assert_eq!(apply_buffs(&base, &toggles), base);
    }

    #[test]
    fn enabled_buffs_stack_additively() {
        let base = CharacterStats::default();
        let toggles = BuffToggles::from([
            (BuffKind::Gloria, true),
            (BuffKind::Blessing, true),
            (BuffKind::DivineCake, true),
            (BuffKind::IntFood, true),
        ]);
        let effective = apply_buffs(&base, &toggles);

        assert_eq!(effective.luck, 100 + 30 + 10);
        assert_eq!(effective.intelligence, 100 + 10 + 10 + 20);
        assert_eq!(effective.dexterity, 100 + 10 + 10);
        assert_eq!(effective.strength, 100 + 10 + 10);
        assert_eq!(effective.agility, 110);
        assert_eq!(effective.vitality, 110);
    }
}
