use crate::plan::PlanRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ProductCategory
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Pump,
    Filter,
    Heater,
    Cleaner,
    Chemicals,
    Cover,
    Lighting,
}

impl ProductCategory {
    pub fn display_name(self) -> &'static str {
        match self {
            ProductCategory::Pump => "Pumps & Circulation",
            ProductCategory::Filter => "Filtration Systems",
            ProductCategory::Heater => "Heating Solutions",
            ProductCategory::Cleaner => "Pool Cleaners",
            ProductCategory::Chemicals => "Water Testing & Chemicals",
            ProductCategory::Cover => "Pool Covers",
            ProductCategory::Lighting => "Lighting",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ---------------------------------------------------------------------------
// Product catalog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub category: ProductCategory,
    pub price: f64,
    pub rating: f64,
    pub reviews: u32,
    pub description: &'static str,
    /// Pool-type and size labels this product suits; "All pool types"
    /// matches every plan.
    pub best_for: &'static [&'static str],
}

pub const CATALOG: &[Product] = &[
    Product {
        id: "pump-1",
        name: "Hayward Super Pump VS Variable Speed",
        category: ProductCategory::Pump,
        price: 899.0,
        rating: 4.7,
        reviews: 1243,
        description: "Energy-efficient variable speed pump that can save up to 90% on energy costs",
        best_for: &["In-Ground", "Medium", "Large"],
    },
    Product {
        id: "pump-2",
        name: "Intex Krystal Clear Sand Filter Pump",
        category: ProductCategory::Pump,
        price: 249.0,
        rating: 4.3,
        reviews: 892,
        description: "Affordable sand filter pump system perfect for above-ground pools",
        best_for: &["Above-Ground", "Small", "Medium"],
    },
    Product {
        id: "filter-1",
        name: "Pentair Clean & Clear Cartridge Filter",
        category: ProductCategory::Filter,
        price: 549.0,
        rating: 4.6,
        reviews: 756,
        description: "High-performance cartridge filter with superior dirt-holding capacity",
        best_for: &["In-Ground", "Semi-In-Ground"],
    },
    Product {
        id: "heater-1",
        name: "Hayward HeatPro Heat Pump",
        category: ProductCategory::Heater,
        price: 2_499.0,
        rating: 4.8,
        reviews: 432,
        description: "Efficient heat pump that extends your swimming season at low operating cost",
        best_for: &["In-Ground", "Large"],
    },
    Product {
        id: "heater-2",
        name: "SunHeater Solar Pool Heating System",
        category: ProductCategory::Heater,
        price: 349.0,
        rating: 4.4,
        reviews: 1089,
        description: "Eco-friendly solar heating system with zero operating costs",
        best_for: &["Above-Ground", "Small", "Medium"],
    },
    Product {
        id: "cleaner-1",
        name: "Dolphin Nautilus CC Plus Robotic Cleaner",
        category: ProductCategory::Cleaner,
        price: 799.0,
        rating: 4.7,
        reviews: 2341,
        description: "Top-rated robotic pool cleaner that scrubs, vacuums, and filters automatically",
        best_for: &["In-Ground", "Medium", "Large"],
    },
    Product {
        id: "chemicals-1",
        name: "Taylor Complete Pool Test Kit",
        category: ProductCategory::Chemicals,
        price: 89.0,
        rating: 4.9,
        reviews: 3421,
        description: "Professional-grade testing kit for accurate water chemistry monitoring",
        best_for: &["All pool types"],
    },
    Product {
        id: "cover-1",
        name: "Blue Wave Solar Blanket",
        category: ProductCategory::Cover,
        price: 129.0,
        rating: 4.5,
        reviews: 1876,
        description: "Solar blanket that heats water and reduces evaporation by 95%",
        best_for: &["All pool types"],
    },
    Product {
        id: "lighting-1",
        name: "Pentair IntelliBrite LED Pool Light",
        category: ProductCategory::Lighting,
        price: 449.0,
        rating: 4.8,
        reviews: 654,
        description: "Energy-efficient LED lighting with 5 vibrant colors and 7 light shows",
        best_for: &["In-Ground"],
    },
];

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

/// Catalog entries whose tags match the plan's pool type or size class.
/// Universal products always match; an empty plan still sees those.
pub fn recommended(plan: &PlanRecord) -> Vec<&'static Product> {
    CATALOG
        .iter()
        .filter(|p| {
            p.best_for.iter().any(|&tag| {
                tag == "All pool types" || tag == plan.pool_type || tag == plan.size
            })
        })
        .collect()
}

/// Matches grouped by category, preserving catalog order within a group.
pub fn recommended_by_category(plan: &PlanRecord) -> Vec<(ProductCategory, Vec<&'static Product>)> {
    let mut groups: Vec<(ProductCategory, Vec<&'static Product>)> = Vec::new();
    for product in recommended(plan) {
        match groups.iter_mut().find(|(c, _)| *c == product.category) {
            Some((_, items)) => items.push(product),
            None => groups.push((product.category, vec![product])),
        }
    }
    groups
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn universal_products_always_match() {
        let matches = recommended(&PlanRecord::new());
        let ids: Vec<_> = matches.iter().map(|p| p.id).collect();
        assert!(ids.contains(&"chemicals-1"));
        assert!(ids.contains(&"cover-1"));
        assert_eq!(matches.len(), 2);
    }

    #[test]
    fn in_ground_large_matches_premium_gear() {
        let mut plan = PlanRecord::new();
        plan.pool_type = "In-Ground".into();
        plan.size = "Large".into();
        let ids: Vec<_> = recommended(&plan).iter().map(|p| p.id).collect();
        assert!(ids.contains(&"pump-1"));
        assert!(ids.contains(&"heater-1"));
        assert!(ids.contains(&"lighting-1"));
        assert!(!ids.contains(&"pump-2"));
    }

    #[test]
    fn above_ground_small_matches_budget_gear() {
        let mut plan = PlanRecord::new();
        plan.pool_type = "Above-Ground".into();
        plan.size = "Small".into();
        let ids: Vec<_> = recommended(&plan).iter().map(|p| p.id).collect();
        assert!(ids.contains(&"pump-2"));
        assert!(ids.contains(&"heater-2"));
        assert!(!ids.contains(&"lighting-1"));
    }

    #[test]
    fn grouping_preserves_catalog_order() {
        let mut plan = PlanRecord::new();
        plan.pool_type = "In-Ground".into();
        plan.size = "Medium".into();
        let groups = recommended_by_category(&plan);
        assert_eq!(groups[0].0, ProductCategory::Pump);
        let total: usize = groups.iter().map(|(_, items)| items.len()).sum();
        assert_eq!(total, recommended(&plan).len());
    }
}
