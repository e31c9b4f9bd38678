use anyhow::Context;
use poolplan_core::{paths, store::FileStore};
use std::path::Path;

pub fn run(root: &Path) -> anyhow::Result<()> {
    println!("Initializing pool planner in: {}", root.display());

    FileStore::init(root)
        .with_context(|| format!("failed to create {}", paths::data_dir(root).display()))?;
    println!("  created: {}/", paths::DATA_DIR);

    let current = paths::key_path(root, paths::CURRENT_PLAN_KEY);
    if current.exists() {
        println!("  exists:  {}", current.display());
    } else {
        println!("Run `poolplan set <field> <value>` to start a plan.");
    }
    Ok(())
}
