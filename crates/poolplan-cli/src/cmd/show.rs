use crate::output::{col, print_json, print_table};
use std::path::Path;

fn cell(value: &str) -> String {
    if value.is_empty() {
        "(unset)".to_string()
    } else {
        value.to_string()
    }
}

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let plan = crate::cmd::current_plan(root);

    if json {
        return print_json(&plan);
    }

    let mut rows = vec![
        vec!["location".to_string(), cell(&plan.location)],
        vec!["soil".to_string(), cell(&plan.soil_type)],
        vec!["shape".to_string(), cell(&plan.shape)],
        vec!["size".to_string(), cell(&plan.size)],
        vec!["type".to_string(), cell(&plan.pool_type)],
        vec!["finish".to_string(), cell(&plan.finish)],
    ];
    if plan.size == "Custom" {
        rows.push(vec![
            "dimensions".to_string(),
            format!(
                "{}' x {}' x {}' deep",
                plan.custom_length, plan.custom_width, plan.custom_depth
            ),
        ]);
    }
    rows.push(vec![
        "extras".to_string(),
        if plan.extras.is_empty() {
            "(none)".to_string()
        } else {
            plan.extras.join(", ")
        },
    ]);
    print_table(&[col("FIELD"), col("VALUE")], rows);
    Ok(())
}
