//! Plain-text tables for terminal output.

use console::style;
use pharmacy_core::{CostRow, PharmacySnapshot, PriceRow, Tier};

/// Probability as a percentage with two decimals.
pub fn percent(probability: f64) -> String {
    format!("{:.2}%", probability * 100.0)
}

/// Unit cost with two decimals, `-` when undefined.
pub fn unit_cost(cost: Option<f64>) -> String {
    cost.map_or_else(|| "-".to_owned(), |c| format!("{c:.2}"))
}

/// Width of the widest name, at least `min`.
fn name_width<'a>(names: impl Iterator<Item = &'a str>, min: usize) -> usize {
    names.map(|n| n.chars().count()).max().unwrap_or(0).max(min)
}

pub fn snapshot_table(snapshot: &PharmacySnapshot) -> String {
    let mut out = String::new();
    let range = match (snapshot.min(), snapshot.max()) {
        (Some(min), Some(max)) => format!("{min}..={max}"),
        _ => "-".to_owned(),
    };
    out.push_str(&format!(
        "{} level {}  cap {}  outcomes {} ({range})\n",
        style("Special Pharmacy").bold(),
        snapshot.level,
        snapshot.potion_cap,
        snapshot.outcomes.len(),
    ));

    let width = name_width(snapshot.iter().map(|(name, _)| name), 4);
    out.push_str(&format!("{:<width$} {:>10}", "Item", "Difficulty"));
    for tier in Tier::ALL {
        out.push_str(&format!(" {:>8}", tier.to_string()));
    }
    out.push_str(&format!(" {:>7}\n", "Avg"));

    for (name, row) in snapshot.iter() {
        out.push_str(&format!("{:<width$} {:>10}", name, row.difficulty));
        for tier in Tier::ALL {
            out.push_str(&format!(" {:>8}", percent(row.probability(tier))));
        }
        out.push_str(&format!(" {:>7.1}\n", row.weighted_average));
    }
    out
}

pub fn cost_table(rows: &[CostRow], labels: &[String]) -> String {
    let width = name_width(rows.iter().map(|r| r.name.as_str()), 4);
    let mut out = format!(
        "{:<width$} {:>12} {:>8} {:>10}  {}\n",
        "Item", "Materials", "Mean", "Unit cost", "Recipe"
    );
    for (row, label) in rows.iter().zip(labels) {
        out.push_str(&format!(
            "{:<width$} {:>12} {:>8.2} {:>10}  {}\n",
            row.name,
            row.materials_cost,
            row.mean_per_attempt,
            unit_cost(row.unit_cost),
            label,
        ));
    }
    out
}

pub fn price_table(rows: &[PriceRow]) -> String {
    let width = name_width(rows.iter().map(|r| r.name.as_str()), 4);
    let mut out = format!("{:>8}  {:<width$} {:>10}\n", "Id", "Item", "Price");
    for row in rows {
        out.push_str(&format!(
            "{:>8}  {:<width$} {:>10}\n",
            row.item_id, row.name, row.price
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pharmacy_core::{Recipe, RecipeLine};

    #[test]
    fn number_formats() {
        assert_eq!(percent(0.123456), "12.35%");
        assert_eq!(percent(0.0), "0.00%");
        assert_eq!(unit_cost(None), "-");
        assert_eq!(unit_cost(Some(8.0)), "8.00");
    }

    #[test]
    fn cost_table_marks_undefined_unit_cost() {
        let rows = vec![CostRow {
            item_id: 1,
            name: "Potion".to_owned(),
            recipe: Recipe::new(vec![RecipeLine::new(713, 10)]),
            materials_cost: 80,
            mean_per_attempt: 0.0,
            unit_cost: None,
        }];
        let table = cost_table(&rows, &["Empty Bottle×10".to_owned()]);
        let line = table.lines().nth(1).unwrap();
        assert!(line.starts_with("Potion"));
        assert!(line.contains(" - "));
        assert!(line.ends_with("Empty Bottle×10"));
    }

    #[test]
    fn price_table_lists_rows() {
        let rows = vec![PriceRow {
            item_id: 713,
            name: "Empty Bottle".to_owned(),
            price: 5,
        }];
        let table = price_table(&rows);
        assert_eq!(table.lines().count(), 2);
        assert!(table.contains("713  Empty Bottle"));
    }
}
