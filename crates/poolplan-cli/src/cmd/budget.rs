use crate::output::{amount, col, dollars, print_json, print_table};
use poolplan_core::budget::{self, Adjustments};
use std::path::Path;

pub fn run(root: &Path, adjust: Adjustments, json: bool) -> anyhow::Result<()> {
    let plan = crate::cmd::current_plan(root);
    let estimate = budget::calculate_adjusted(&plan, adjust);

    if json {
        return print_json(&estimate);
    }

    let rows = estimate
        .breakdown
        .iter()
        .map(|line| vec![line.category.to_string(), dollars(line.amount)])
        .collect();
    print_table(&[col("CATEGORY"), amount("COST")], rows);
    println!();
    println!("Total:            {}", dollars(estimate.total));
    println!("DIY estimate:     {}", dollars(estimate.diy_total));
    println!("Premium estimate: {}", dollars(estimate.premium_total));
    Ok(())
}
