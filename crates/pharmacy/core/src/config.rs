/// Engine constants for the Special Pharmacy formula.
///
/// Fixed by the game mechanic, not runtime-tunable. Tier offsets and penalties
/// live on [`Tier`](crate::tiers::Tier).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PharmacyConfig;

impl PharmacyConfig {
    // ===== random draw ranges (inclusive) =====
    pub const R1_MIN: i32 = 30;
    pub const R1_MAX: i32 = 150;
    pub const R2_MIN: i32 = 4;
    pub const R2_MAX: i32 = 10;

    /// Number of distinct `r1` values (121).
    pub const R1_TOTAL: usize = (Self::R1_MAX - Self::R1_MIN + 1) as usize;
    /// Number of distinct `r2` values (7).
    pub const R2_TOTAL: usize = (Self::R2_MAX - Self::R2_MIN + 1) as usize;
    /// Size of a full outcome enumeration (847).
    pub const TOTAL_COMBOS: usize = Self::R1_TOTAL * Self::R2_TOTAL;

    // ===== skill level domain (inclusive) =====
    pub const MIN_LEVEL: i32 = 0;
    pub const MAX_LEVEL: i32 = 10;

    // ===== formula coefficients =====
    /// Multiplier applied to the Potion Research level.
    pub const POTION_RESEARCH_WEIGHT: i32 = 5;
    /// Base level subtracted before it contributes to the outcome.
    pub const BASE_LEVEL_OFFSET: i32 = 100;

    /// Returns true if `level` lies in the supported skill-level domain.
    pub const fn is_valid_level(level: i32) -> bool {
        level >= Self::MIN_LEVEL && level <= Self::MAX_LEVEL
    }
}
