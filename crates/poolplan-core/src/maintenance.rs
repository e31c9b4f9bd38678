use crate::plan::PlanRecord;
use crate::types::Extra;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// MaintenanceEstimate
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceEstimate {
    pub volume_gallons: f64,
    /// Annual chemicals and supplies.
    pub chemicals: f64,
    /// Annual pump electricity, plus heating when selected.
    pub electricity: f64,
    /// Annual refill water lost to evaporation.
    pub water: f64,
    /// Annual repairs and professional service.
    pub service: f64,
    pub total_annual: f64,
    pub monthly: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MaintenanceTask {
    pub frequency: &'static str,
    pub task: &'static str,
    pub time: &'static str,
}

/// Routine upkeep schedule; independent of the plan selections.
pub const SCHEDULE: &[MaintenanceTask] = &[
    MaintenanceTask { frequency: "Daily", task: "Check water level and skim debris", time: "10 min" },
    MaintenanceTask { frequency: "Weekly", task: "Test and balance water chemistry", time: "30 min" },
    MaintenanceTask { frequency: "Weekly", task: "Vacuum pool floor and brush walls", time: "45 min" },
    MaintenanceTask { frequency: "Monthly", task: "Clean filter and check equipment", time: "1 hour" },
    MaintenanceTask { frequency: "Quarterly", task: "Deep clean and shock treatment", time: "2 hours" },
    MaintenanceTask { frequency: "Annually", task: "Professional inspection and winterization", time: "4 hours" },
];

// ---------------------------------------------------------------------------
// Derivation
// ---------------------------------------------------------------------------

/// Derive annual upkeep costs from water volume and the selected extras.
pub fn calculate(plan: &PlanRecord) -> MaintenanceEstimate {
    let volume = plan.volume_gallons();

    // Saltwater systems cut chemical spend roughly in half.
    let chemical_rate = if plan.has_extra(Extra::SaltwaterSystem) { 150.0 } else { 300.0 };
    let chemicals = (volume / 1_000.0) * chemical_rate;

    let heating = if plan.has_extra(Extra::HeatingSystem) { 1_200.0 } else { 0.0 };
    let electricity = (volume / 10_000.0) * 600.0 + heating;

    // A cover halves evaporation losses.
    let water = if plan.has_extra(Extra::PoolCover) { 150.0 } else { 300.0 };

    let service = 800.0 * plan.pool_type().map(|t| t.service_multiplier()).unwrap_or(1.0);

    let total_annual = chemicals + electricity + water + service;
    MaintenanceEstimate {
        volume_gallons: volume,
        chemicals,
        electricity,
        water,
        service,
        total_annual,
        monthly: total_annual / 12.0,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
