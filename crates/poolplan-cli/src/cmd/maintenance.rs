use crate::output::{amount, col, dollars, print_json, print_table};
use poolplan_core::maintenance;
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let plan = crate::cmd::current_plan(root);
    let estimate = maintenance::calculate(&plan);

    if json {
        return print_json(&serde_json::json!({
            "estimate": estimate,
            "schedule": maintenance::SCHEDULE,
        }));
    }

    println!("Water volume: {:.0} gallons", estimate.volume_gallons);
    println!();
    let rows = vec![
        vec!["Chemicals & supplies".to_string(), dollars(estimate.chemicals)],
        vec!["Electricity".to_string(), dollars(estimate.electricity)],
        vec!["Water refills".to_string(), dollars(estimate.water)],
        vec!["Repairs & service".to_string(), dollars(estimate.service)],
    ];
    print_table(&[col("ANNUAL COST"), amount("AMOUNT")], rows);
    println!();
    println!(
        "Total: {} per year ({} per month)",
        dollars(estimate.total_annual),
        dollars(estimate.monthly)
    );
    println!();

    let rows = maintenance::SCHEDULE
        .iter()
        .map(|task| {
            vec![
                task.frequency.to_string(),
                task.task.to_string(),
                task.time.to_string(),
            ]
        })
        .collect();
    print_table(&[col("FREQUENCY"), col("TASK"), col("TIME")], rows);
    Ok(())
}
