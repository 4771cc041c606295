//! Character profile inspection.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;
use pharmacy_core::{CharacterProfile, StatKind};
use strum::IntoEnumIterator;

use super::Session;

/// Show the character profile and effective stats
#[derive(Parser, Debug)]
pub struct Profile {
    /// Overwrite the user profile with the packaged default first
    #[arg(long)]
    pub reset: bool,

    /// Replace the user profile with the one in this file
    #[arg(long, conflicts_with = "reset")]
    pub import: Option<PathBuf>,

    /// Write the resulting profile to this file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

impl Profile {
    pub fn execute(self, session: &Session) -> Result<()> {
        let profile = if self.reset {
            let profile = session.factory().reset_profile()?;
            println!("{} profile reset", style("✓").green().bold());
            profile
        } else if let Some(path) = &self.import {
            let profile = session.factory().import_profile(path)?;
            let saved = session.factory().save_profile(&profile)?;
            println!(
                "{} imported {} into {}",
                style("✓").green().bold(),
                path.display(),
                saved.display()
            );
            profile
        } else {
            session.factory().load_profile()
        };
        if let Some(path) = &self.export {
            session.factory().export_profile(path, &profile)?;
            println!("{} exported to {}", style("✓").green().bold(), path.display());
        }
        print!("{}", describe(&profile));
        Ok(())
    }
}

fn describe(profile: &CharacterProfile) -> String {
    let base = profile.stats;
    let effective = profile.effective_stats();
    let mut out = String::new();

    out.push_str(&format!("{}\n", style("Stats (base -> effective)").bold()));
    for stat in StatKind::iter() {
        out.push_str(&format!(
            "  {stat} {:>4} -> {:>4}\n",
            base.get(stat),
            effective.get(stat)
        ));
    }

    out.push_str(&format!(
        "Levels: base {} / job {}\n",
        profile.levels.base_level, profile.levels.job_level
    ));
    let skills = profile.skills;
    out.push_str(&format!(
        "Skills: potion research {}, full chemical protection {}, advanced pharmacy {}, pharmacy {}\n",
        skills.potion_research,
        skills.chemical_protection_full,
        skills.advanced_pharmacy,
        skills.pharmacy
    ));

    let active: Vec<&str> = profile
        .buffs
        .iter()
        .filter(|(_, on)| **on)
        .map(|(buff, _)| buff.label())
        .collect();
    let active = if active.is_empty() { "none".to_owned() } else { active.join(", ") };
    out.push_str(&format!("Buffs: {active}\n"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pharmacy_core::BuffKind;

    #[test]
    fn describes_effective_stats_and_buffs() {
        let mut profile = CharacterProfile::default();
        profile.buffs.insert(BuffKind::Gloria, true);
        profile.buffs.insert(BuffKind::Blessing, false);

        let text = describe(&profile);
        assert!(text.contains("LUK  100 ->  130"));
        assert!(text.contains("INT  100 ->  100"));
        assert!(text.contains("Buffs: Glória"));
        assert!(!text.contains("Benção"));
    }

    #[test]
    fn lists_every_stat_in_order() {
        let text = describe(&CharacterProfile::default());
        let labels: Vec<&str> = text
            .lines()
            .skip(1)
            .take(6)
            .filter_map(|line| line.split_whitespace().next())
            .collect();
        assert_eq!(labels, ["STR", "AGI", "VIT", "INT", "DEX", "LUK"]);
    }
}
