use crate::output::print_json;
use anyhow::{bail, Context};
use poolplan_core::types::{Finish, PoolType, SizeClass, SoilType};
use std::path::Path;
use tracing::warn;

const FIELDS: &[&str] = &[
    "location", "soil", "shape", "size", "length", "width", "depth", "type", "finish",
];

fn parse_feet(field: &str, value: &str) -> anyhow::Result<f64> {
    let n: f64 = value
        .parse()
        .with_context(|| format!("{field} must be a number of feet, got '{value}'"))?;
    if n < 0.0 {
        bail!("{field} cannot be negative");
    }
    Ok(n)
}

pub fn run(root: &Path, field: &str, value: &str, json: bool) -> anyhow::Result<()> {
    let mut plan = crate::cmd::current_plan(root);

    match field {
        "location" => plan.location = value.to_string(),
        "shape" => plan.shape = value.to_string(),
        "soil" => {
            if SoilType::parse(value).is_none() {
                warn!("unrecognized soil type '{value}', excavation will use the base rate");
            }
            plan.soil_type = value.to_string();
        }
        "size" => {
            if SizeClass::parse(value).is_none() {
                warn!("unrecognized size '{value}', estimates will treat it as unset");
            }
            plan.size = value.to_string();
        }
        "type" => {
            if PoolType::parse(value).is_none() {
                warn!("unrecognized pool type '{value}', base cost will be zero");
            }
            plan.pool_type = value.to_string();
        }
        "finish" => {
            if Finish::parse(value).is_none() {
                warn!("unrecognized finish '{value}', finish cost will be zero");
            }
            plan.finish = value.to_string();
        }
        "length" => plan.custom_length = parse_feet(field, value)?,
        "width" => plan.custom_width = parse_feet(field, value)?,
        "depth" => plan.custom_depth = parse_feet(field, value)?,
        other => bail!("unknown field '{other}' (expected one of: {})", FIELDS.join(", ")),
    }

    crate::cmd::mirror(root, &plan);

    if json {
        print_json(&serde_json::json!({ "field": field, "value": value }))?;
    } else {
        println!("Set {field} = {value}");
    }
    Ok(())
}
