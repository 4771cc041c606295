//! Production cost per final item.

use anyhow::Result;
use clap::Parser;
use pharmacy_core::{CatalogOracle, aggregate_production_costs, recipe_label};

use super::Session;
use crate::report;

/// Show materials cost, expected yield and unit cost of every final item
#[derive(Parser, Debug)]
pub struct Costs {
    /// Advanced Pharmacy level (defaults to the profile's)
    #[arg(long)]
    pub level: Option<i32>,
}

impl Costs {
    pub fn execute(self, session: &Session) -> Result<()> {
        let profile = session.profile(self.level)?;
        let (catalog, snapshot) = session.snapshot(&profile)?;
        let prices = session.factory().load_prices();

        let rows = aggregate_production_costs(
            &catalog.final_item_ids(),
            &catalog,
            &prices.table,
            Some(&snapshot),
        );
        let labels: Vec<String> = rows
            .iter()
            .map(|row| recipe_label(&row.recipe, &catalog))
            .collect();

        println!("prices: {}", prices.source);
        print!("{}", report::cost_table(&rows, &labels));
        Ok(())
    }
}
