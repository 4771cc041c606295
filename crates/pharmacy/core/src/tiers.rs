//! Difficulty tiers and outcome bucketing.
//!
//! Each outcome falls into exactly one of five tiers relative to the item's
//! difficulty `d`. Lower bounds are inclusive and upper bounds exclusive:
//!
//! | Tier  | Condition              | Potions   |
//! |-------|------------------------|-----------|
//! | MAX   | `v >= d + 400`         | `cap`     |
//! | MAX-3 | `d + 300 <= v < d+400` | `cap - 3` |
//! | MAX-4 | `d + 100 <= v < d+300` | `cap - 4` |
//! | MAX-5 | `d <= v < d + 100`     | `cap - 5` |
//! | MAX-6 | `v < d`                | `cap - 6` |

use strum::IntoEnumIterator;

use crate::engine::OutcomeSet;

/// Outcome tier, ordered from hardest to reach to easiest.
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
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tier {
    #[strum(serialize = "MAX")]
    Max,
    #[strum(serialize = "MAX-3")]
    Max3,
    #[strum(serialize = "MAX-4")]
    Max4,
    #[strum(serialize = "MAX-5")]
    Max5,
    #[strum(serialize = "MAX-6")]
    Max6,
}

impl Tier {
    /// Number of tiers.
    pub const COUNT: usize = 5;

    /// Every tier, hardest first.
    pub const ALL: [Tier; Tier::COUNT] = [Tier::Max, Tier::Max3, Tier::Max4, Tier::Max5, Tier::Max6];

    /// Potions subtracted from the cap for outcomes in this tier.
    pub const fn penalty(&self) -> i32 {
        match self {
            Tier::Max => 0,
            Tier::Max3 => 3,
            Tier::Max4 => 4,
            Tier::Max5 => 5,
            Tier::Max6 => 6,
        }
    }

    /// Inclusive lower bound above the difficulty, `None` for the open-ended
    /// bottom tier.
    pub const fn lower_offset(&self) -> Option<i32> {
        match self {
            Tier::Max => Some(400),
            Tier::Max3 => Some(300),
            Tier::Max4 => Some(100),
            Tier::Max5 => Some(0),
            Tier::Max6 => None,
        }
    }

    /// Position in hardest-to-easiest order.
    pub const fn as_index(&self) -> usize {
        *self as usize
    }

    /// Classify a single outcome against a difficulty.
    pub fn classify(value: i32, difficulty: i32) -> Tier {
        // i64 keeps `difficulty + 400` from overflowing near i32::MAX.
        let value = i64::from(value);
        let difficulty = i64::from(difficulty);
        Tier::iter()
            .find(|tier| match tier.lower_offset() {
                Some(offset) => value >= difficulty + i64::from(offset),
                None => true,
            })
            .unwrap_or(Tier::Max6)
    }
}

/// Tier counts for one item at one skill level.
///
/// Counts always sum to `total`, the size of the classified outcome set.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BucketResult {
    difficulty: i32,
    counts: [usize; Tier::COUNT],
    total: usize,
}

impl BucketResult {
    pub fn difficulty(&self) -> i32 {
        self.difficulty
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn count(&self, tier: Tier) -> usize {
        self.counts[tier.as_index()]
    }

    /// `count / total`; zero for an empty outcome set.
    pub fn probability(&self, tier: Tier) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(tier) as f64 / self.total as f64
    }

    /// Probabilities in tier order.
    pub fn probabilities(&self) -> [f64; Tier::COUNT] {
        let mut out = [0.0; Tier::COUNT];
        for tier in Tier::iter() {
            out[tier.as_index()] = self.probability(tier);
        }
        out
    }

    /// `(tier, count, probability)` in tier order.
    pub fn iter(&self) -> impl Iterator<Item = (Tier, usize, f64)> + '_ {
        Tier::iter().map(|tier| (tier, self.count(tier), self.probability(tier)))
    }

    /// Expected potions per attempt for a given cap.
    ///
    /// `cap*P(MAX) + (cap-3)*P(MAX-3) + (cap-4)*P(MAX-4) + (cap-5)*P(MAX-5) + (cap-6)*P(MAX-6)`
    pub fn weighted_average(&self, cap: i32) -> f64 {
        weighted_average(&self.probabilities(), cap)
    }
}

/// Expected potions per attempt from tier probabilities in tier order.
pub fn weighted_average(probabilities: &[f64; Tier::COUNT], cap: i32) -> f64 {
    Tier::iter()
        .map(|tier| f64::from(cap - tier.penalty()) * probabilities[tier.as_index()])
        .sum()
}

/// Partition every outcome into exactly one tier relative to `difficulty`.
///
/// Callers are expected to pass a non-empty set; an empty one yields zero
/// counts and zero probabilities.
pub fn bucketize(outcomes: &OutcomeSet, difficulty: i32) -> BucketResult {
    let mut counts = [0usize; Tier::COUNT];
    for value in outcomes.iter() {
        counts[Tier::classify(value, difficulty).as_index()] += 1;
    }
    BucketResult {
        difficulty,
        counts,
        total: outcomes.len(),
    }
}
