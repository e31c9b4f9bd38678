use crate::output::print_json;
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let cleared = crate::cmd::planner(root).clear_current();

    if json {
        print_json(&serde_json::json!({ "cleared": cleared }))?;
    } else if cleared {
        println!("Current plan cleared.");
    } else {
        println!("Could not clear the current plan; see warnings above.");
    }
    Ok(())
}
