use crate::output::{col, print_json, print_table};
use anyhow::Context;
use clap::Subcommand;
use std::path::Path;

#[derive(Subcommand)]
pub enum PlanSubcommand {
    /// Snapshot the current plan under a name
    Save {
        #[arg(required = true)]
        name: Vec<String>,
    },
    /// List saved plans
    List,
    /// Make a saved plan the current plan
    Load { id: String },
    /// Delete a saved plan
    Delete { id: String },
    /// Overwrite a saved plan with the current plan
    Update { id: String },
}

pub fn run(root: &Path, subcmd: PlanSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        PlanSubcommand::Save { name } => save(root, &name.join(" "), json),
        PlanSubcommand::List => list(root, json),
        PlanSubcommand::Load { id } => load(root, &id, json),
        PlanSubcommand::Delete { id } => delete(root, &id, json),
        PlanSubcommand::Update { id } => update(root, &id, json),
    }
}

fn save(root: &Path, name: &str, json: bool) -> anyhow::Result<()> {
    let planner = crate::cmd::planner(root);
    let plan = planner.load_current().unwrap_or_default();
    let saved = planner
        .save_plan(name, &plan)
        .context("failed to save plan")?;

    if json {
        print_json(&saved)?;
    } else {
        println!("Saved plan '{}' [{}]", saved.name, saved.id);
    }
    Ok(())
}

fn list(root: &Path, json: bool) -> anyhow::Result<()> {
    let plans = crate::cmd::planner(root).list_plans();

    if json {
        return print_json(&plans);
    }

    if plans.is_empty() {
        println!("No saved plans.");
        return Ok(());
    }

    let rows = plans
        .iter()
        .map(|p| {
            vec![
                p.id.clone(),
                p.name.clone(),
                p.created_at.format("%Y-%m-%d %H:%M").to_string(),
                p.updated_at.format("%Y-%m-%d %H:%M").to_string(),
            ]
        })
        .collect();
    print_table(&[col("ID"), col("NAME"), col("CREATED"), col("UPDATED")], rows);
    Ok(())
}

fn load(root: &Path, id: &str, json: bool) -> anyhow::Result<()> {
    let planner = crate::cmd::planner(root);
    let saved = planner
        .get_plan(id)
        .with_context(|| format!("plan '{id}' not found"))?;
    planner.save_current(&saved.data);

    if json {
        print_json(&saved.data)?;
    } else {
        println!("Loaded plan '{}' as current", saved.name);
    }
    Ok(())
}

fn delete(root: &Path, id: &str, json: bool) -> anyhow::Result<()> {
    crate::cmd::planner(root)
        .delete_plan(id)
        .with_context(|| format!("plan '{id}' not found"))?;

    if json {
        print_json(&serde_json::json!({ "id": id, "deleted": true }))?;
    } else {
        println!("Deleted plan [{id}]");
    }
    Ok(())
}

fn update(root: &Path, id: &str, json: bool) -> anyhow::Result<()> {
    let planner = crate::cmd::planner(root);
    let plan = planner.load_current().unwrap_or_default();
    let saved = planner
        .update_plan(id, &plan)
        .with_context(|| format!("plan '{id}' not found"))?;

    if json {
        print_json(&saved)?;
    } else {
        println!("Updated plan '{}' [{}]", saved.name, saved.id);
    }
    Ok(())
}
