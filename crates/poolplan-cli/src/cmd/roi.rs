use crate::output::{amount, col, dollars, print_json, print_table};
use poolplan_core::roi;
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let plan = crate::cmd::current_plan(root);
    let analysis = roi::calculate(&plan);

    if json {
        return print_json(&analysis);
    }

    let rows = vec![
        vec!["Installation cost".to_string(), dollars(analysis.installation_cost)],
        vec![
            "Property value increase".to_string(),
            dollars(analysis.property_value_increase),
        ],
        vec!["Return".to_string(), format!("{:.1}%", analysis.roi_percent)],
        vec![
            "Cost recovery".to_string(),
            format!("{:.1}%", analysis.cost_recovery_percent),
        ],
        vec![
            "Break-even".to_string(),
            format!("{:.1} years", analysis.break_even_years),
        ],
        vec![
            "Annual maintenance".to_string(),
            dollars(analysis.annual_maintenance),
        ],
    ];
    print_table(&[col("METRIC"), amount("VALUE")], rows);
    Ok(())
}
