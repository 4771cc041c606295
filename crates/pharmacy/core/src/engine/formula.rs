//! Special Pharmacy outcome formula.

use crate::config::PharmacyConfig;

use super::errors::{Draw, FormulaError};

/// Everything the formula needs besides the two random draws.
///
/// Values are used as plain integers; range checks on stats and levels belong
/// to whoever collects them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterInputs {
    pub intelligence: i32,
    pub dexterity: i32,
    pub luck: i32,
    pub job_level: i32,
    pub base_level: i32,
    pub potion_research_level: i32,
    pub protection_level: i32,
}

/// Compute one Special Pharmacy outcome.
///
/// # Formula
///
/// ```text
/// raw = INT
///     + DEX / 2.0
///     + LUK
///     + JobLevel
///     + r1
///     + (BaseLevel - 100)
///     + PotionResearchLevel * 5
///     + FullChemicalProtectionLevel * r2
/// result = trunc(raw)
/// ```
///
/// `DEX / 2.0` is a true division; truncation happens once, at the end.
///
/// # Errors
///
/// [`FormulaError::InvalidArgument`] if `r1` is outside `[30, 150]` or `r2` is
/// outside `[4, 10]`.
pub fn special_pharmacy(inputs: &CharacterInputs, r1: i32, r2: i32) -> Result<i32, FormulaError> {
    if !Draw::R1.contains(r1) {
        return Err(FormulaError::out_of_range(Draw::R1, r1));
    }
    if !Draw::R2.contains(r2) {
        return Err(FormulaError::out_of_range(Draw::R2, r2));
    }
    Ok(evaluate(inputs, r1, r2))
}

/// Formula body without draw validation. Callers guarantee in-range draws.
pub(super) fn evaluate(inputs: &CharacterInputs, r1: i32, r2: i32) -> i32 {
    // Operands are widened before any arithmetic so profile values near the i32
    // limits cannot overflow. The cast back saturates.
    let raw = f64::from(inputs.intelligence)
        + f64::from(inputs.dexterity) / 2.0
        + f64::from(inputs.luck)
        + f64::from(inputs.job_level)
        + f64::from(r1)
        + (f64::from(inputs.base_level) - f64::from(PharmacyConfig::BASE_LEVEL_OFFSET))
        + f64::from(inputs.potion_research_level)
            * f64::from(PharmacyConfig::POTION_RESEARCH_WEIGHT)
        + f64::from(inputs.protection_level) * f64::from(r2);

    raw.trunc() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PharmacyError;

    fn reference_inputs() -> CharacterInputs {
        CharacterInputs {
            intelligence: 100,
            dexterity: 100,
            luck: 100,
            job_level: 50,
            base_level: 120,
            potion_research_level: 10,
            protection_level: 5,
        }
    }

    #[test]
    fn reference_character_lowest_draws() {
        // 100 + 50 + 100 + 50 + 30 + 20 + 50 + 20
        assert_eq!(special_pharmacy(&reference_inputs(), 30, 4), Ok(420));
    }

    #[test]
    fn reference_character_highest_draws() {
        // 100 + 50 + 100 + 50 + 150 + 20 + 50 + 50
        assert_eq!(special_pharmacy(&reference_inputs(), 150, 10), Ok(570));
    }

    #[test]
    fn odd_dexterity_truncates_once() {
        let inputs = CharacterInputs {
            dexterity: 101,
            ..reference_inputs()
        };
        // 50.5 is kept until the end: 420.5 -> 420
        assert_eq!(special_pharmacy(&inputs, 30, 4), Ok(420));

        let inputs = CharacterInputs {
            dexterity: 103,
            ..reference_inputs()
        };
        assert_eq!(special_pharmacy(&inputs, 30, 4), Ok(421));
    }

    #[test]
    fn negative_raw_truncates_toward_zero() {
        let inputs = CharacterInputs {
            dexterity: 1,
            base_level: 1,
            ..CharacterInputs::default()
        };
        // 0.5 + 30 - 99 = -68.5 -> -68
        assert_eq!(special_pharmacy(&inputs, 30, 4), Ok(-68));
    }

    #[test]
    fn extreme_inputs_saturate() {
        let inputs = CharacterInputs {
            potion_research_level: 1_000_000_000,
            ..reference_inputs()
        };
        assert_eq!(special_pharmacy(&inputs, 30, 4), Ok(i32::MAX));

        let inputs = CharacterInputs {
            base_level: -2_147_483_600,
            ..reference_inputs()
        };
        // 100 + 50 + 100 + 50 + 30 + (-2147483600 - 100) + 50 + 20
        assert_eq!(special_pharmacy(&inputs, 30, 4), Ok(-2_147_483_300));

        let inputs = CharacterInputs {
            intelligence: i32::MIN,
            luck: i32::MIN,
            base_level: i32::MIN,
            protection_level: i32::MIN,
            ..reference_inputs()
        };
        assert_eq!(special_pharmacy(&inputs, 150, 10), Ok(i32::MIN));
    }

    #[test]
    fn r1_out_of_range_is_rejected() {
        for r1 in [29, 151, -1, i32::MAX] {
            let err = special_pharmacy(&reference_inputs(), r1, 4).unwrap_err();
            assert_eq!(
                err,
                FormulaError::InvalidArgument {
                    draw: Draw::R1,
                    value: r1,
                    min: 30,
                    max: 150,
                }
            );
            assert_eq!(err.error_code(), "FORMULA_R1_OUT_OF_RANGE");
        }
    }

    #[test]
    fn r2_out_of_range_is_rejected() {
        for r2 in [3, 11, 0] {
            let err = special_pharmacy(&reference_inputs(), 30, r2).unwrap_err();
            assert!(matches!(
                err,
                FormulaError::InvalidArgument { draw: Draw::R2, value, .. } if value == r2
            ));
        }
    }

    #[test]
    fn error_message_names_the_draw() {
        let err = special_pharmacy(&reference_inputs(), 200, 4).unwrap_err();
        assert_eq!(err.to_string(), "r1 must be in [30, 150], got 200");
    }
}
