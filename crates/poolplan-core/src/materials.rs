use crate::plan::PlanRecord;
use crate::types::{Extra, Finish};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// MaterialsChecklist
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialItem {
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialCategory {
    pub name: String,
    pub items: Vec<MaterialItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialsChecklist {
    pub categories: Vec<MaterialCategory>,
}

impl MaterialsChecklist {
    pub fn total(&self) -> f64 {
        self.categories
            .iter()
            .flat_map(|c| &c.items)
            .map(|i| i.price)
            .sum()
    }

    pub fn category(&self, name: &str) -> Option<&MaterialCategory> {
        self.categories.iter().find(|c| c.name == name)
    }
}

fn item(name: &str, price: f64) -> MaterialItem {
    MaterialItem { name: name.into(), price }
}

// ---------------------------------------------------------------------------
// Derivation
// ---------------------------------------------------------------------------

/// Derive the shopping checklist. The structural category branches on
/// ground-set vs above-ground construction; the finish category is keyed by
/// finish (empty when unrecognized); Electrical and Heating appear only
/// when the matching extra is selected.
pub fn calculate(plan: &PlanRecord) -> MaterialsChecklist {
    let ground_set = plan.pool_type().map(|t| t.is_ground_set()).unwrap_or(false);

    let structure = if ground_set {
        vec![
            item("Excavation Service", 3_500.0),
            item("Steel Rebar (100 pieces)", 450.0),
            item("Concrete Mix (80 bags)", 640.0),
            item("Waterproof Membrane", 380.0),
        ]
    } else {
        vec![
            item("Pool Kit", 2_800.0),
            item("Ground Leveling Sand", 120.0),
            item("Base Pads", 85.0),
        ]
    };

    let mut categories = vec![
        MaterialCategory { name: "Excavation & Structure".into(), items: structure },
        MaterialCategory {
            name: "Plumbing & Filtration".into(),
            items: vec![
                item("Pool Pump (1.5 HP)", 450.0),
                item("Sand Filter System", 380.0),
                item("PVC Pipes & Fittings", 220.0),
                item("Pool Skimmer", 95.0),
                item("Return Jets (4 pack)", 68.0),
            ],
        },
        MaterialCategory {
            name: "Surface Finish".into(),
            items: finish_items(plan.finish_kind()),
        },
        MaterialCategory {
            name: "Safety & Accessories".into(),
            items: vec![
                item("Pool Ladder", 185.0),
                item("Safety Fence (per ft)", 25.0),
                item("Pool Cover", 320.0),
                item("Life Ring & Hook", 45.0),
            ],
        },
        MaterialCategory {
            name: "Chemicals & Maintenance".into(),
            items: vec![
                item("Startup Chemical Kit", 120.0),
                item("Pool Test Kit", 35.0),
                item("Pool Vacuum", 180.0),
                item("Skimmer Net", 28.0),
            ],
        },
    ];

    if plan.has_extra(Extra::LedPoolLights) {
        categories.push(MaterialCategory {
            name: "Electrical".into(),
            items: vec![item("LED Pool Light Set (4)", 680.0)],
        });
    }

    if plan.has_extra(Extra::HeatingSystem) {
        categories.push(MaterialCategory {
            name: "Heating".into(),
            items: vec![item("Pool Heat Pump", 3_200.0)],
        });
    }

    MaterialsChecklist { categories }
}

fn finish_items(finish: Option<Finish>) -> Vec<MaterialItem> {
    match finish {
        Some(Finish::VinylLiner) => vec![item("Vinyl Pool Liner", 1_800.0)],
        Some(Finish::Fiberglass) => vec![item("Fiberglass Shell", 7_500.0)],
        Some(Finish::Concrete) => vec![item("Pool Plaster", 2_400.0)],
        Some(Finish::Tile) => vec![
            item("Pool Tiles (500 sq ft)", 3_800.0),
            item("Tile Adhesive", 280.0),
        ],
        Some(Finish::Pebble) => vec![item("Pebble Finish Mix", 2_800.0)],
        None => Vec::new(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_ground_gets_excavation_materials() {
        let mut plan = PlanRecord::new();
        plan.pool_type = "In-Ground".into();
        let list = calculate(&plan);
        let structure = list.category("Excavation & Structure").unwrap();
        assert!(structure.items.iter().any(|i| i.name == "Excavation Service"));
        assert!(!structure.items.iter().any(|i| i.name == "Pool Kit"));
    }

    #[test]
    fn above_ground_gets_pool_kit() {
        let mut plan = PlanRecord::new();
        plan.pool_type = "Above-Ground".into();
        let list = calculate(&plan);
        let structure = list.category("Excavation & Structure").unwrap();
        assert!(structure.items.iter().any(|i| i.name == "Pool Kit"));
    }

    #[test]
    fn unknown_finish_leaves_category_empty() {
        let mut plan = PlanRecord::new();
        plan.finish = "Marble".into();
        let list = calculate(&plan);
        assert!(list.category("Surface Finish").unwrap().items.is_empty());
    }

    #[test]
    fn tile_finish_lists_two_items() {
        let mut plan = PlanRecord::new();
        plan.finish = "Tile".into();
        let list = calculate(&plan);
        assert_eq!(list.category("Surface Finish").unwrap().items.len(), 2);
    }

    #[test]
    fn optional_categories_follow_extras() {
        let mut plan = PlanRecord::new();
        let bare = calculate(&plan);
        assert!(bare.category("Electrical").is_none());
        assert!(bare.category("Heating").is_none());

        plan.extras = vec!["LED Pool Lights".into(), "Heating System".into()];
        let full = calculate(&plan);
        assert!(full.category("Electrical").is_some());
        assert!(full.category("Heating").is_some());
    }

    #[test]
    fn total_sums_all_items() {
        let mut plan = PlanRecord::new();
        plan.pool_type = "Above-Ground".into();
        plan.finish = "Vinyl Liner".into();
        let list = calculate(&plan);
        let by_hand: f64 = list.categories.iter().flat_map(|c| &c.items).map(|i| i.price).sum();
        assert_eq!(list.total(), by_hand);
        assert!(list.total() > 0.0);
    }
}
