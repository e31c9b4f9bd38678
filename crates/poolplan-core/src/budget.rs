use crate::plan::PlanRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Labor runs at 30% of structure plus finish.
const LABOR_RATE: f64 = 0.3;

/// DIY installs save roughly 30%; premium contractors charge roughly 30% more.
const DIY_FACTOR: f64 = 0.7;
const PREMIUM_FACTOR: f64 = 1.3;

// ---------------------------------------------------------------------------
// CostCategory
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostCategory {
    BaseStructure,
    SurfaceFinish,
    Excavation,
    Labor,
    Extras,
}

impl CostCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            CostCategory::BaseStructure => "Base Pool Structure",
            CostCategory::SurfaceFinish => "Surface Finish",
            CostCategory::Excavation => "Excavation & Site Prep",
            CostCategory::Labor => "Labor & Installation",
            CostCategory::Extras => "Additional Features",
        }
    }
}

impl fmt::Display for CostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// BudgetEstimate
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetLine {
    pub category: CostCategory,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetEstimate {
    pub breakdown: Vec<BudgetLine>,
    pub total: f64,
    /// Self-install estimate.
    pub diy_total: f64,
    /// Premium-contractor estimate.
    pub premium_total: f64,
}

impl BudgetEstimate {
    pub fn line(&self, category: CostCategory) -> f64 {
        self.breakdown
            .iter()
            .find(|l| l.category == category)
            .map(|l| l.amount)
            .unwrap_or(0.0)
    }
}

// ---------------------------------------------------------------------------
// Adjustments
// ---------------------------------------------------------------------------

/// What-if multipliers for exploring cost scenarios (regional labor rates,
/// materials markets, feature upgrades). Identity by default.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Adjustments {
    pub labor: f64,
    pub materials: f64,
    pub extras: f64,
}

impl Default for Adjustments {
    fn default() -> Self {
        Self { labor: 1.0, materials: 1.0, extras: 1.0 }
    }
}

// ---------------------------------------------------------------------------
// Derivation
// ---------------------------------------------------------------------------

/// Derive the cost estimate for a plan. Never fails: unset or unrecognized
/// selections contribute a zero (or identity-multiplier) default.
pub fn calculate(plan: &PlanRecord) -> BudgetEstimate {
    calculate_adjusted(plan, Adjustments::default())
}

/// [`calculate`] with what-if multipliers applied. The materials multiplier
/// scales structure, finish, and excavation; labor is computed on the
/// materials-adjusted structure and finish before its own multiplier.
pub fn calculate_adjusted(plan: &PlanRecord, adjust: Adjustments) -> BudgetEstimate {
    let base = plan.pool_type().map(|t| t.base_price()).unwrap_or(0.0)
        * plan.size_factor()
        * adjust.materials;
    let finish = plan.finish_kind().map(|f| f.cost()).unwrap_or(0.0) * adjust.materials;
    let extras: f64 =
        plan.known_extras().iter().map(|e| e.price()).sum::<f64>() * adjust.extras;
    let excavation = excavation_cost(plan) * adjust.materials;
    let labor = (base + finish) * LABOR_RATE * adjust.labor;

    let breakdown = vec![
        BudgetLine { category: CostCategory::BaseStructure, amount: base },
        BudgetLine { category: CostCategory::SurfaceFinish, amount: finish },
        BudgetLine { category: CostCategory::Excavation, amount: excavation },
        BudgetLine { category: CostCategory::Labor, amount: labor },
        BudgetLine { category: CostCategory::Extras, amount: extras },
    ];
    let total: f64 = breakdown.iter().map(|l| l.amount).sum();

    BudgetEstimate {
        breakdown,
        total,
        diy_total: total * DIY_FACTOR,
        premium_total: total * PREMIUM_FACTOR,
    }
}

fn excavation_cost(plan: &PlanRecord) -> f64 {
    let Some(pool_type) = plan.pool_type() else {
        return 0.0;
    };
    let soil = plan.soil().map(|s| s.excavation_multiplier()).unwrap_or(1.0);
    pool_type.excavation_base() * soil
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(pool_type: &str, size: &str, soil: &str, finish: &str) -> PlanRecord {
        PlanRecord {
            pool_type: pool_type.into(),
            size: size.into(),
            soil_type: soil.into(),
            finish: finish.into(),
            ..Default::default()
        }
    }

    #[test]
    fn total_equals_sum_of_breakdown() {
        let mut p = plan("In-Ground", "Large", "Clay", "Tile");
        p.extras = vec!["Pool Deck".into(), "Slide".into()];
        let budget = calculate(&p);
        let sum: f64 = budget.breakdown.iter().map(|l| l.amount).sum();
        assert!((budget.total - sum).abs() < 1e-6);
    }

    #[test]
    fn custom_size_scales_base_by_area() {
        let mut p = plan("In-Ground", "Custom", "", "");
        p.custom_length = 20.0;
        p.custom_width = 40.0;
        let budget = calculate(&p);
        let base = budget.line(CostCategory::BaseStructure);
        // 30000 * (800 / 450)
        assert!((base - 53_333.333).abs() < 0.01);
    }

    #[test]
    fn rocky_in_ground_excavation() {
        let p = plan("In-Ground", "Medium", "Rocky", "");
        let budget = calculate(&p);
        assert_eq!(budget.line(CostCategory::Excavation), 10_000.0);
    }

    #[test]
    fn above_ground_skips_excavation() {
        let p = plan("Above-Ground", "Medium", "Rocky", "");
        assert_eq!(calculate(&p).line(CostCategory::Excavation), 0.0);
    }

    #[test]
    fn unknown_finish_costs_nothing() {
        let p = plan("In-Ground", "Medium", "", "Marble");
        assert_eq!(calculate(&p).line(CostCategory::SurfaceFinish), 0.0);
    }

    #[test]
    fn unknown_extras_are_ignored() {
        let mut p = plan("Above-Ground", "Small", "", "");
        p.extras = vec!["Lazy River".into(), "Pool Cover".into()];
        assert_eq!(calculate(&p).line(CostCategory::Extras), 950.0);
    }

    #[test]
    fn labor_is_thirty_percent_of_base_plus_finish() {
        let p = plan("Semi-In-Ground", "Medium", "", "Fiberglass");
        let budget = calculate(&p);
        let expected = (15_000.0 + 8_000.0) * 0.3;
        assert!((budget.line(CostCategory::Labor) - expected).abs() < 1e-6);
    }

    #[test]
    fn empty_plan_costs_nothing() {
        let budget = calculate(&PlanRecord::new());
        assert_eq!(budget.total, 0.0);
    }

    #[test]
    fn materials_multiplier_scales_structure_finish_and_excavation() {
        let p = plan("In-Ground", "Medium", "Clay", "Tile");
        let standard = calculate(&p);
        let doubled = calculate_adjusted(&p, Adjustments { materials: 2.0, ..Default::default() });
        assert_eq!(doubled.line(CostCategory::BaseStructure), 2.0 * standard.line(CostCategory::BaseStructure));
        assert_eq!(doubled.line(CostCategory::SurfaceFinish), 2.0 * standard.line(CostCategory::SurfaceFinish));
        assert_eq!(doubled.line(CostCategory::Excavation), 2.0 * standard.line(CostCategory::Excavation));
        // Labor follows the adjusted structure and finish.
        assert_eq!(doubled.line(CostCategory::Labor), 2.0 * standard.line(CostCategory::Labor));
    }

    #[test]
    fn labor_multiplier_scales_labor_only() {
        let mut p = plan("In-Ground", "Medium", "Rocky", "Concrete");
        p.extras = vec!["Slide".into()];
        let standard = calculate(&p);
        let adjusted = calculate_adjusted(&p, Adjustments { labor: 1.5, ..Default::default() });
        assert_eq!(adjusted.line(CostCategory::Labor), 1.5 * standard.line(CostCategory::Labor));
        assert_eq!(adjusted.line(CostCategory::BaseStructure), standard.line(CostCategory::BaseStructure));
        assert_eq!(adjusted.line(CostCategory::Excavation), standard.line(CostCategory::Excavation));
        assert_eq!(adjusted.line(CostCategory::Extras), standard.line(CostCategory::Extras));
    }

    #[test]
    fn extras_multiplier_scales_features_only() {
        let mut p = plan("Above-Ground", "Small", "", "");
        p.extras = vec!["Pool Cover".into(), "Diving Board".into()];
        let adjusted = calculate_adjusted(&p, Adjustments { extras: 0.5, ..Default::default() });
        assert_eq!(adjusted.line(CostCategory::Extras), (950.0 + 650.0) * 0.5);
        assert_eq!(adjusted.line(CostCategory::BaseStructure), 5_000.0 * 0.7);
    }

    #[test]
    fn identity_adjustments_match_plain_calculate() {
        let mut p = plan("Semi-In-Ground", "Large", "Loamy", "Pebble");
        p.extras = vec!["Water Jets".into()];
        let plain = calculate(&p);
        let identity = calculate_adjusted(&p, Adjustments::default());
        assert_eq!(plain.total, identity.total);
        assert_eq!(plain.diy_total, identity.diy_total);
    }

    #[test]
    fn tier_totals_bracket_standard() {
        let p = plan("In-Ground", "Medium", "Loamy", "Concrete");
        let budget = calculate(&p);
        assert!(budget.diy_total < budget.total);
        assert!(budget.premium_total > budget.total);
        assert!((budget.diy_total - budget.total * 0.7).abs() < 1e-6);
    }
}
