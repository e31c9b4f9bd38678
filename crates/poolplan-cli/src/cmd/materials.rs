use crate::output::{amount, col, dollars, print_json, print_table};
use poolplan_core::materials;
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let plan = crate::cmd::current_plan(root);
    let checklist = materials::calculate(&plan);

    if json {
        return print_json(&checklist);
    }

    let rows = checklist
        .categories
        .iter()
        .flat_map(|category| {
            category.items.iter().map(|item| {
                vec![
                    category.name.clone(),
                    item.name.clone(),
                    dollars(item.price),
                ]
            })
        })
        .collect();
    print_table(&[col("CATEGORY"), col("ITEM"), amount("PRICE")], rows);
    println!();
    println!("Estimated materials total: {}", dollars(checklist.total()));
    Ok(())
}
