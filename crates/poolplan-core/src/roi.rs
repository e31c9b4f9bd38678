use crate::plan::PlanRecord;
use serde::{Deserialize, Serialize};

/// National average home value used for the property-value model.
const AVERAGE_HOME_VALUE: f64 = 350_000.0;

/// Labor fraction applied to structure plus finish.
const LABOR_RATE: f64 = 0.3;

/// Flat ongoing-cost figure shown alongside the analysis.
const ANNUAL_MAINTENANCE: f64 = 2_500.0;

// ---------------------------------------------------------------------------
// RoiAnalysis
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoiAnalysis {
    pub installation_cost: f64,
    pub property_value_increase: f64,
    /// Percentage return; negative when the pool costs more than it adds.
    pub roi_percent: f64,
    /// Share of the installation recovered through home value.
    pub cost_recovery_percent: f64,
    pub break_even_years: f64,
    pub annual_maintenance: f64,
}

// ---------------------------------------------------------------------------
// Derivation
// ---------------------------------------------------------------------------

/// Derive the financial return assessment. The installation figure here
/// excludes excavation, matching the simplified investment model, so it can
/// run slightly under the full budget estimate. A plan with no priced
/// selections reports zeroed percentages rather than dividing by zero.
pub fn calculate(plan: &PlanRecord) -> RoiAnalysis {
    let base = plan.pool_type().map(|t| t.base_price()).unwrap_or(0.0) * plan.size_factor();
    let finish = plan.finish_kind().map(|f| f.cost()).unwrap_or(0.0);
    let extras: f64 = plan.known_extras().iter().map(|e| e.price()).sum();
    let labor = (base + finish) * LABOR_RATE;
    let installation_cost = base + finish + extras + labor;

    let property_value_increase =
        AVERAGE_HOME_VALUE * plan.pool_type().map(|t| t.property_value_rate()).unwrap_or(0.0);

    if installation_cost <= 0.0 || property_value_increase <= 0.0 {
        return RoiAnalysis {
            installation_cost,
            property_value_increase,
            roi_percent: 0.0,
            cost_recovery_percent: 0.0,
            break_even_years: 0.0,
            annual_maintenance: ANNUAL_MAINTENANCE,
        };
    }

    let roi_percent = (property_value_increase - installation_cost) / installation_cost * 100.0;
    let cost_recovery_percent = property_value_increase / installation_cost * 100.0;
    let break_even_years = (installation_cost / (property_value_increase / 10.0)).abs();

    RoiAnalysis {
        installation_cost,
        property_value_increase,
        roi_percent,
        cost_recovery_percent,
        break_even_years,
        annual_maintenance: ANNUAL_MAINTENANCE,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_ground_medium_analysis() {
        let mut plan = PlanRecord::new();
        plan.pool_type = "In-Ground".into();
        plan.size = "Medium".into();
        plan.finish = "Fiberglass".into();
        let roi = calculate(&plan);
        // base 30000, finish 8000, labor 11400
        assert!((roi.installation_cost - 49_400.0).abs() < 1e-6);
        assert!((roi.property_value_increase - 22_750.0).abs() < 1e-6);
        assert!(roi.roi_percent < 0.0);
        assert!(roi.break_even_years > 0.0);
    }

    #[test]
    fn above_ground_adds_little_value() {
        let mut plan = PlanRecord::new();
        plan.pool_type = "Above-Ground".into();
        plan.size = "Small".into();
        let roi = calculate(&plan);
        assert!((roi.property_value_increase - 3_500.0).abs() < 1e-6);
    }

    #[test]
    fn excavation_is_excluded_from_installation() {
        let mut plan = PlanRecord::new();
        plan.pool_type = "In-Ground".into();
        plan.size = "Medium".into();
        plan.soil_type = "Rocky".into();
        let without_soil = {
            let mut p = plan.clone();
            p.soil_type.clear();
            calculate(&p).installation_cost
        };
        assert_eq!(calculate(&plan).installation_cost, without_soil);
    }

    #[test]
    fn empty_plan_reports_zeroes() {
        let roi = calculate(&PlanRecord::new());
        assert_eq!(roi.installation_cost, 0.0);
        assert_eq!(roi.roi_percent, 0.0);
        assert_eq!(roi.cost_recovery_percent, 0.0);
        assert_eq!(roi.break_even_years, 0.0);
        assert!(roi.roi_percent.is_finite());
    }

    #[test]
    fn cost_recovery_matches_ratio() {
        let mut plan = PlanRecord::new();
        plan.pool_type = "Semi-In-Ground".into();
        plan.size = "Medium".into();
        let roi = calculate(&plan);
        let expected = roi.property_value_increase / roi.installation_cost * 100.0;
        assert!((roi.cost_recovery_percent - expected).abs() < 1e-9);
    }
}
