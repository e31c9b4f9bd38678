use crate::output::{col, print_json, print_table};
use poolplan_core::recommend;
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let plan = crate::cmd::current_plan(root);
    let recs = recommend::generate(&plan);

    if json {
        return print_json(&recs);
    }

    if recs.is_empty() {
        println!("No recommendations for the current plan.");
        return Ok(());
    }

    let rows = recs
        .iter()
        .map(|rec| {
            vec![
                rec.priority.to_string(),
                rec.category.to_string(),
                rec.title.to_string(),
                rec.reason.to_string(),
            ]
        })
        .collect();
    print_table(&[col("PRIORITY"), col("CATEGORY"), col("RECOMMENDATION"), col("WHY")], rows);
    Ok(())
}
