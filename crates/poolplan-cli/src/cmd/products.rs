use crate::output::{amount, col, dollars, print_json, print_table};
use poolplan_core::products;
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let plan = crate::cmd::current_plan(root);
    let grouped = products::recommended_by_category(&plan);

    if json {
        let entries: Vec<_> = grouped
            .iter()
            .map(|(category, items)| {
                serde_json::json!({
                    "category": category.display_name(),
                    "products": items,
                })
            })
            .collect();
        return print_json(&entries);
    }

    if grouped.is_empty() {
        println!("No matching products; set a pool type or size first.");
        return Ok(());
    }

    let rows = grouped
        .iter()
        .flat_map(|(category, items)| {
            items.iter().map(|product| {
                vec![
                    category.display_name().to_string(),
                    product.name.to_string(),
                    dollars(product.price),
                    format!("{:.1} ({} reviews)", product.rating, product.reviews),
                ]
            })
        })
        .collect();
    print_table(&[col("CATEGORY"), col("PRODUCT"), amount("PRICE"), col("RATING")], rows);
    Ok(())
}
