use crate::output::{col, print_json, print_table};
use poolplan_core::safety;
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let plan = crate::cmd::current_plan(root);
    let report = safety::calculate(&plan);

    if json {
        return print_json(&report);
    }

    let rows = report
        .items
        .iter()
        .map(|item| {
            vec![
                if item.present { "[x]".to_string() } else { "[ ]".to_string() },
                item.name.to_string(),
                item.requirement.to_string(),
                item.cost_range.to_string(),
            ]
        })
        .collect();
    print_table(&[col(""), col("ITEM"), col("LEVEL"), col("COST")], rows);
    println!();
    println!(
        "Required:    {}/{}",
        report.required_met, report.required_total
    );
    println!(
        "Recommended: {}/{}",
        report.recommended_met, report.recommended_total
    );
    println!("Score: {:.0}/100 ({})", report.score, report.rating);
    if report.missing_required() > 0 {
        println!(
            "Warning: {} required safety item(s) missing",
            report.missing_required()
        );
    }
    Ok(())
}
