//! Character profile and buffs.
//!
//! ```text
//! [ CharacterStats (base) ] ── apply_buffs ──► [ effective stats ]
//!                                                     │
//! [ CharacterLevels ] [ Skills ] ─────────────────────┴──► CharacterInputs
//! ```

pub mod buffs;
pub mod character;

pub use buffs::{BuffKind, BuffToggles, apply_buffs};
pub use character::{CharacterLevels, CharacterProfile, CharacterStats, Skills, StatKind};
