//! Tier probabilities per craftable item.

use anyhow::Result;
use clap::Parser;

use super::Session;
use crate::report;

/// Show the outcome tiers of every craftable item
#[derive(Parser, Debug)]
pub struct Outcomes {
    /// Advanced Pharmacy level (defaults to the profile's)
    #[arg(long)]
    pub level: Option<i32>,
}

impl Outcomes {
    pub fn execute(self, session: &Session) -> Result<()> {
        let profile = session.profile(self.level)?;
        let (_, snapshot) = session.snapshot(&profile)?;
        print!("{}", report::snapshot_table(&snapshot));
        Ok(())
    }
}
