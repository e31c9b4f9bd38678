use crate::output::{amount, col, dollars, print_json, print_table};
use clap::Subcommand;
use poolplan_core::types::Extra;
use std::path::Path;
use tracing::warn;

#[derive(Subcommand)]
pub enum ExtraSubcommand {
    /// Select a feature (no-op when already selected)
    Add {
        #[arg(required = true)]
        name: Vec<String>,
    },
    /// Deselect a feature (no-op when not selected)
    Remove {
        #[arg(required = true)]
        name: Vec<String>,
    },
    /// Flip a feature's selection
    Toggle {
        #[arg(required = true)]
        name: Vec<String>,
    },
    /// List the feature catalog with prices and selection state
    List,
}

/// Aliases map to their catalog name; unknown names pass through raw so the
/// stored list mirrors whatever the user typed.
fn canonical(name: &str) -> String {
    match Extra::parse(name) {
        Some(extra) => extra.as_str().to_string(),
        None => {
            warn!("'{name}' is not in the feature catalog, it will not affect estimates");
            name.to_string()
        }
    }
}

pub fn run(root: &Path, subcmd: ExtraSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ExtraSubcommand::Add { name } => add(root, &canonical(&name.join(" ")), json),
        ExtraSubcommand::Remove { name } => remove(root, &canonical(&name.join(" ")), json),
        ExtraSubcommand::Toggle { name } => toggle(root, &canonical(&name.join(" ")), json),
        ExtraSubcommand::List => list(root, json),
    }
}

fn report(name: &str, selected: bool, json: bool) -> anyhow::Result<()> {
    if json {
        print_json(&serde_json::json!({ "name": name, "selected": selected }))?;
    } else if selected {
        println!("Selected: {name}");
    } else {
        println!("Deselected: {name}");
    }
    Ok(())
}

fn add(root: &Path, name: &str, json: bool) -> anyhow::Result<()> {
    let mut plan = crate::cmd::current_plan(root);
    if !plan.extras.iter().any(|e| e == name) {
        plan.toggle_extra(name);
        crate::cmd::mirror(root, &plan);
    }
    report(name, true, json)
}

fn remove(root: &Path, name: &str, json: bool) -> anyhow::Result<()> {
    let mut plan = crate::cmd::current_plan(root);
    if plan.extras.iter().any(|e| e == name) {
        plan.toggle_extra(name);
        crate::cmd::mirror(root, &plan);
    }
    report(name, false, json)
}

fn toggle(root: &Path, name: &str, json: bool) -> anyhow::Result<()> {
    let mut plan = crate::cmd::current_plan(root);
    let selected = plan.toggle_extra(name);
    crate::cmd::mirror(root, &plan);
    report(name, selected, json)
}

fn list(root: &Path, json: bool) -> anyhow::Result<()> {
    let plan = crate::cmd::current_plan(root);

    if json {
        let entries: Vec<_> = Extra::all()
            .iter()
            .map(|e| {
                serde_json::json!({
                    "name": e.as_str(),
                    "price": e.price(),
                    "description": e.description(),
                    "selected": plan.has_extra(*e),
                })
            })
            .collect();
        return print_json(&entries);
    }

    let rows = Extra::all()
        .iter()
        .map(|e| {
            vec![
                if plan.has_extra(*e) { "[x]".to_string() } else { "[ ]".to_string() },
                e.as_str().to_string(),
                dollars(e.price()),
                e.description().to_string(),
            ]
        })
        .collect();
    print_table(&[col(""), col("FEATURE"), amount("PRICE"), col("DESCRIPTION")], rows);
    Ok(())
}
