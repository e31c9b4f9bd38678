use crate::output::{col, print_json, print_table};
use poolplan_core::timeline;
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let plan = crate::cmd::current_plan(root);
    let schedule = timeline::calculate(&plan);

    if json {
        return print_json(&schedule);
    }

    let rows = schedule
        .phases
        .iter()
        .enumerate()
        .map(|(idx, phase)| {
            vec![
                format!("{}", idx + 1),
                phase.name.clone(),
                phase.duration.clone(),
                phase.description.clone(),
            ]
        })
        .collect();
    print_table(&[col("#"), col("PHASE"), col("DURATION"), col("DESCRIPTION")], rows);
    println!();
    println!(
        "Total: {} days (~{} weeks)",
        schedule.total_days, schedule.total_weeks
    );
    Ok(())
}
