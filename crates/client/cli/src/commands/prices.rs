//! Price table listing and editing.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use super::Session;
use crate::report;

/// List material prices sorted by name
#[derive(Parser, Debug)]
pub struct Prices {}

impl Prices {
    pub fn execute(self, session: &Session) -> Result<()> {
        let catalog = session.factory().load_catalog()?;
        let prices = session.factory().load_prices();
        println!("source: {}", prices.source);
        print!("{}", report::price_table(&prices.table.rows(&catalog)));
        Ok(())
    }
}

/// Set the unit price of one material
#[derive(Parser, Debug)]
pub struct SetPrice {
    /// Item id or catalog name
    pub item: String,

    /// Unit price
    pub price: u64,
}

impl SetPrice {
    pub fn execute(self, session: &Session) -> Result<()> {
        let catalog = session.factory().load_catalog()?;
        let item_id = match self.item.trim().parse::<u32>() {
            Ok(id) => id,
            Err(_) => catalog
                .id_for_name(&self.item)
                .with_context(|| format!("Unknown item: {}", self.item))?,
        };

        let mut table = session.factory().load_prices().table;
        table.set(item_id, self.price);
        let path = session.factory().save_prices(&table)?;

        println!(
            "{} #{item_id} = {} ({})",
            style("✓").green().bold(),
            self.price,
            path.display()
        );
        Ok(())
    }
}

/// Replace user prices with the packaged defaults
#[derive(Parser, Debug)]
pub struct ResetPrices {}

impl ResetPrices {
    pub fn execute(self, session: &Session) -> Result<()> {
        let path = session.factory().reset_prices()?;
        println!("{} prices reset ({})", style("✓").green().bold(), path.display());
        Ok(())
    }
}
