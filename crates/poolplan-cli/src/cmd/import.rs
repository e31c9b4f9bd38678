use crate::output::print_json;
use anyhow::Context;
use poolplan_core::export;
use std::path::Path;

/// Accepts either a full share link or just the encoded `plan` parameter.
fn token(link: &str) -> &str {
    match link.split_once("?plan=") {
        Some((_, token)) => token,
        None => link,
    }
}

pub fn run(root: &Path, link: &str, json: bool) -> anyhow::Result<()> {
    let plan = export::decode_share(token(link)).context("could not read share link")?;
    crate::cmd::mirror(root, &plan);

    if json {
        print_json(&plan)?;
    } else {
        println!("Imported shared plan as current");
    }
    Ok(())
}
