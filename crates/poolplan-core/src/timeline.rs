use crate::plan::PlanRecord;
use crate::types::{Extra, PoolType, SoilType};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// TimelinePlan
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelinePhase {
    pub name: String,
    pub description: String,
    /// Human range label, e.g. "3-5 days".
    pub duration: String,
    /// Planning day count used for totals; always at least 1.
    pub days: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelinePlan {
    pub phases: Vec<TimelinePhase>,
    pub total_days: u32,
    pub total_weeks: u32,
}

// ---------------------------------------------------------------------------
// Derivation
// ---------------------------------------------------------------------------

/// Derive the construction schedule. The baseline phase set is
/// unconditional; a decking phase is inserted only when the Pool Deck extra
/// is selected. Durations come from small per-selection tables.
pub fn calculate(plan: &PlanRecord) -> TimelinePlan {
    let pool_type = plan.pool_type();
    let above_ground = pool_type == Some(PoolType::AboveGround);
    let rocky = plan.soil() == Some(SoilType::Rocky);

    let mut phases = vec![
        TimelinePhase {
            name: "Planning & Permits".into(),
            description: "Design finalization, permit applications, site survey".into(),
            duration: "1-2 weeks".into(),
            days: 10,
        },
        TimelinePhase {
            name: "Excavation".into(),
            description: "Site preparation, digging, grading".into(),
            duration: if above_ground {
                "1-2 days".into()
            } else if rocky {
                "5-7 days".into()
            } else {
                "3-5 days".into()
            },
            days: if above_ground { 1 } else if rocky { 6 } else { 4 },
        },
        TimelinePhase {
            name: "Structure & Plumbing".into(),
            description: "Pool shell installation, plumbing, electrical work".into(),
            duration: match pool_type {
                Some(PoolType::AboveGround) => "1-2 days".into(),
                Some(PoolType::SemiInGround) => "1-2 weeks".into(),
                _ => "2-3 weeks".into(),
            },
            days: match pool_type {
                Some(PoolType::AboveGround) => 1,
                Some(PoolType::SemiInGround) => 10,
                _ => 17,
            },
        },
        TimelinePhase {
            name: "Surface Finish".into(),
            description: if plan.finish.is_empty() {
                "Apply selected finish, curing time".into()
            } else {
                format!("Apply {}, curing time", plan.finish)
            },
            duration: match plan.finish_kind().map(|f| f.surface_days()).unwrap_or(7) {
                1 => "1-2 days".into(),
                2 => "2-3 days".into(),
                10 => "1-2 weeks".into(),
                _ => "1 week".into(),
            },
            days: plan.finish_kind().map(|f| f.surface_days()).unwrap_or(7),
        },
    ];

    if plan.has_extra(Extra::PoolDeck) {
        phases.push(TimelinePhase {
            name: "Decking Installation".into(),
            description: "Surrounding deck construction and finishing".into(),
            duration: "1-2 weeks".into(),
            days: 10,
        });
    }

    phases.push(TimelinePhase {
        name: "Equipment & Finishing".into(),
        description: "Install pumps, filters, lights, fill pool, chemical balance".into(),
        duration: "3-5 days".into(),
        days: 4,
    });

    let total_days: u32 = phases.iter().map(|p| p.days).sum();
    TimelinePlan {
        phases,
        total_days,
        total_weeks: total_days.div_ceil(7),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
