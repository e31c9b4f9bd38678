use crate::plan::PlanRecord;
use crate::types::{Extra, Finish, PoolType, SizeClass, SoilType};
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Priority / RecCategory
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecCategory {
    Type,
    Size,
    Finish,
    Extras,
    Budget,
}

impl fmt::Display for RecCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RecCategory::Type => "type",
            RecCategory::Size => "size",
            RecCategory::Finish => "finish",
            RecCategory::Extras => "extras",
            RecCategory::Budget => "budget",
        })
    }
}

// ---------------------------------------------------------------------------
// Recommendation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub title: &'static str,
    pub description: &'static str,
    pub reason: &'static str,
    pub priority: Priority,
    pub category: RecCategory,
}

// ---------------------------------------------------------------------------
// Derivation
// ---------------------------------------------------------------------------

/// Run the fixed advice rules against the plan. Each rule appends zero or
/// more records; the result is stably sorted by priority so ties keep their
/// rule order.
pub fn generate(plan: &PlanRecord) -> Vec<Recommendation> {
    let mut recs = Vec::new();
    let push = |recs: &mut Vec<Recommendation>,
                title: &'static str,
                description: &'static str,
                reason: &'static str,
                priority: Priority,
                category: RecCategory| {
        recs.push(Recommendation { title, description, reason, priority, category });
    };

    // Soil rules.
    match plan.soil() {
        Some(SoilType::Clay) => {
            push(
                &mut recs,
                "Consider In-Ground Pool",
                "Clay soil provides excellent stability for in-ground pools with minimal shifting.",
                "Clay soil is dense and stable, making it ideal for in-ground construction.",
                Priority::High,
                RecCategory::Type,
            );
            push(
                &mut recs,
                "Add Proper Drainage System",
                "Clay soil retains water, so a robust drainage system is essential.",
                "Prevents water accumulation around the pool structure.",
                Priority::High,
                RecCategory::Extras,
            );
        }
        Some(SoilType::Sandy) => {
            push(
                &mut recs,
                "Reinforce Pool Structure",
                "Sandy soil may shift over time. Consider additional reinforcement and deeper footings.",
                "Sandy soil is less stable and requires extra structural support.",
                Priority::High,
                RecCategory::Type,
            );
        }
        Some(SoilType::Rocky) => {
            push(
                &mut recs,
                "Budget for Excavation Costs",
                "Rocky terrain requires specialized equipment and may increase excavation costs by 30-50%.",
                "Rock removal is labor-intensive and requires heavy machinery.",
                Priority::High,
                RecCategory::Budget,
            );
            push(
                &mut recs,
                "Consider Above-Ground Option",
                "An above-ground pool could save significant excavation costs in rocky terrain.",
                "Avoids expensive rock removal and excavation challenges.",
                Priority::Medium,
                RecCategory::Type,
            );
        }
        _ => {}
    }

    // Location rules.
    if plan.location == "Backyard" {
        push(
            &mut recs,
            "Add Privacy Fencing",
            "Enhance privacy and safety with decorative fencing around your backyard pool.",
            "Provides security and creates a private oasis.",
            Priority::Medium,
            RecCategory::Extras,
        );
    }
    if plan.location == "Side Yard" {
        push(
            &mut recs,
            "Optimize for Narrow Spaces",
            "Consider a lap pool or rectangular design to maximize your side yard space.",
            "Side yards are typically narrower and benefit from elongated designs.",
            Priority::High,
            RecCategory::Size,
        );
    }

    // Size rules.
    if plan.size_class() == Some(SizeClass::Large) || plan.custom_length > 40.0 {
        push(
            &mut recs,
            "Install Automated Pool Cleaner",
            "Large pools benefit significantly from automated cleaning systems.",
            "Reduces maintenance time and ensures consistent cleanliness.",
            Priority::Medium,
            RecCategory::Extras,
        );
        push(
            &mut recs,
            "Consider Energy-Efficient Heating",
            "Large pools require substantial heating. Solar or heat pump systems offer long-term savings.",
            "Reduces ongoing energy costs for large water volumes.",
            Priority::High,
            RecCategory::Extras,
        );
    }

    // Pool-type rules.
    match plan.pool_type() {
        Some(PoolType::AboveGround) => {
            push(
                &mut recs,
                "Add Decking for Aesthetics",
                "Wooden or composite decking dramatically improves the look and accessibility of above-ground pools.",
                "Creates a seamless transition and enhances visual appeal.",
                Priority::High,
                RecCategory::Extras,
            );
        }
        Some(PoolType::InGround) => {
            push(
                &mut recs,
                "Invest in Quality Waterproofing",
                "Professional-grade waterproofing prevents costly repairs and extends pool life.",
                "In-ground pools are more susceptible to water damage and leaks.",
                Priority::High,
                RecCategory::Finish,
            );
        }
        _ => {}
    }

    // Finish rules.
    match plan.finish_kind() {
        Some(Finish::VinylLiner) => {
            push(
                &mut recs,
                "Plan for Liner Replacement",
                "Vinyl liners typically last 7-10 years. Budget $3,000-$5,000 for future replacement.",
                "Vinyl liners have a limited lifespan compared to other finishes.",
                Priority::Medium,
                RecCategory::Budget,
            );
        }
        Some(Finish::Tile) => {
            push(
                &mut recs,
                "Choose Slip-Resistant Tiles",
                "Prioritize safety with textured, slip-resistant tile options for pool surfaces.",
                "Wet tile surfaces can be hazardous without proper texture.",
                Priority::High,
                RecCategory::Finish,
            );
        }
        _ => {}
    }

    // Safety rules.
    if !plan.has_extra(Extra::PoolFence) {
        push(
            &mut recs,
            "Install Safety Fencing (Required)",
            "Most jurisdictions require 4-foot fencing with self-closing gates around pools.",
            "Legal requirement and critical safety feature, especially with children.",
            Priority::High,
            RecCategory::Extras,
        );
    }
    if !plan.has_extra(Extra::PoolCover) {
        push(
            &mut recs,
            "Add a Pool Cover",
            "Reduces evaporation, keeps debris out, and improves safety when pool is not in use.",
            "Saves on water, chemicals, and heating costs while enhancing safety.",
            Priority::Medium,
            RecCategory::Extras,
        );
    }
    if !plan.has_extra(Extra::LedPoolLights) && plan.pool_type() == Some(PoolType::InGround) {
        push(
            &mut recs,
            "Install LED Pool Lighting",
            "LED lights enhance ambiance, safety, and extend usable hours into the evening.",
            "Energy-efficient lighting improves aesthetics and nighttime safety.",
            Priority::Medium,
            RecCategory::Extras,
        );
    }

    recs.sort_by_key(|r| r.priority.rank());
    recs
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
