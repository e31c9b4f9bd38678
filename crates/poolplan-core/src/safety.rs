use crate::plan::PlanRecord;
use crate::types::Extra;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Requirement
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    Required,
    Recommended,
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Requirement::Required => "required",
            Requirement::Recommended => "recommended",
        })
    }
}

// ---------------------------------------------------------------------------
// SafetyReport
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct SafetyItem {
    pub category: &'static str,
    pub name: &'static str,
    pub requirement: Requirement,
    pub present: bool,
    pub description: &'static str,
    pub cost_range: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SafetyReport {
    pub items: Vec<SafetyItem>,
    pub required_met: usize,
    pub required_total: usize,
    pub recommended_met: usize,
    pub recommended_total: usize,
    /// 0-100: required items weigh 70%, recommended 30%.
    pub score: f64,
    pub rating: &'static str,
}

impl SafetyReport {
    pub fn missing_required(&self) -> usize {
        self.required_total - self.required_met
    }
}

// ---------------------------------------------------------------------------
// Derivation
// ---------------------------------------------------------------------------

/// Evaluate the fixed safety checklist against the plan's extras. Items the
/// planner cannot express (first aid kit, depth markers) always read as
/// absent; GFCI protection is assumed present since code requires it on any
/// pool circuit.
pub fn calculate(plan: &PlanRecord) -> SafetyReport {
    let items = vec![
        SafetyItem {
            category: "Barriers & Fencing",
            name: "Pool Fence (4ft minimum)",
            requirement: Requirement::Required,
            present: plan.has_extra(Extra::PoolFence),
            description: "Required by law in most jurisdictions. Must have self-closing, self-latching gate.",
            cost_range: "$2,000-$5,000",
        },
        SafetyItem {
            category: "Barriers & Fencing",
            name: "Pool Alarm",
            requirement: Requirement::Recommended,
            present: false,
            description: "Alerts when someone enters the pool area or water surface is disturbed.",
            cost_range: "$100-$300",
        },
        SafetyItem {
            category: "Covers & Protection",
            name: "Safety Pool Cover",
            requirement: Requirement::Recommended,
            present: plan.has_extra(Extra::PoolCover),
            description: "Prevents accidental falls into pool when not in use. Must support weight.",
            cost_range: "$1,000-$3,000",
        },
        SafetyItem {
            category: "Emergency Equipment",
            name: "Life Ring/Rescue Hook",
            requirement: Requirement::Required,
            present: false,
            description: "Essential rescue equipment that should be easily accessible.",
            cost_range: "$30-$100",
        },
        SafetyItem {
            category: "Emergency Equipment",
            name: "First Aid Kit",
            requirement: Requirement::Required,
            present: false,
            description: "Pool-specific first aid kit for minor injuries and emergencies.",
            cost_range: "$50-$150",
        },
        SafetyItem {
            category: "Visibility & Lighting",
            name: "Pool Lighting",
            requirement: Requirement::Recommended,
            present: plan.has_extra(Extra::LedPoolLights),
            description: "Adequate lighting for nighttime visibility and safety.",
            cost_range: "$500-$2,000",
        },
        SafetyItem {
            category: "Surface Safety",
            name: "Non-Slip Deck Surface",
            requirement: Requirement::Required,
            present: plan.has_extra(Extra::PoolDeck),
            description: "Textured, slip-resistant surface around pool perimeter.",
            cost_range: "Included in deck",
        },
        SafetyItem {
            category: "Depth Markers",
            name: "Depth Markers & Signs",
            requirement: Requirement::Required,
            present: false,
            description: "Clear depth markings and 'No Diving' signs where appropriate.",
            cost_range: "$50-$200",
        },
        SafetyItem {
            category: "Electrical Safety",
            name: "GFCI Protection",
            requirement: Requirement::Required,
            present: true,
            description: "Ground Fault Circuit Interrupter for all electrical outlets near pool.",
            cost_range: "$100-$300",
        },
        SafetyItem {
            category: "Chemical Storage",
            name: "Locked Chemical Storage",
            requirement: Requirement::Required,
            present: false,
            description: "Secure, ventilated storage for pool chemicals away from children.",
            cost_range: "$100-$500",
        },
    ];

    let required: Vec<_> = items.iter().filter(|i| i.requirement == Requirement::Required).collect();
    let recommended: Vec<_> = items.iter().filter(|i| i.requirement == Requirement::Recommended).collect();
    let required_met = required.iter().filter(|i| i.present).count();
    let recommended_met = recommended.iter().filter(|i| i.present).count();
    let required_total = required.len();
    let recommended_total = recommended.len();

    let score = (required_met as f64 / required_total as f64) * 70.0
        + (recommended_met as f64 / recommended_total as f64) * 30.0;

    SafetyReport {
        items,
        required_met,
        required_total,
        recommended_met,
        recommended_total,
        score,
        rating: rating(score),
    }
}

fn rating(score: f64) -> &'static str {
    if score >= 80.0 {
        "Excellent"
    } else if score >= 60.0 {
        "Good"
    } else {
        "Needs Improvement"
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checklist_is_fixed_size() {
        let report = calculate(&PlanRecord::new());
        assert_eq!(report.items.len(), 10);
        assert_eq!(report.required_total, 7);
        assert_eq!(report.recommended_total, 3);
    }

    #[test]
    fn bare_plan_scores_gfci_only() {
        let report = calculate(&PlanRecord::new());
        assert_eq!(report.required_met, 1);
        assert_eq!(report.recommended_met, 0);
        assert!((report.score - 70.0 / 7.0).abs() < 1e-9);
        assert_eq!(report.rating, "Needs Improvement");
        assert_eq!(report.missing_required(), 6);
    }

    #[test]
    fn safety_extras_raise_the_score() {
        let mut plan = PlanRecord::new();
        plan.extras = vec![
            "Pool Fence".into(),
            "Pool Cover".into(),
            "LED Pool Lights".into(),
            "Pool Deck".into(),
        ];
        let report = calculate(&plan);
        assert_eq!(report.required_met, 3);
        assert_eq!(report.recommended_met, 2);
        let expected = 3.0 / 7.0 * 70.0 + 2.0 / 3.0 * 30.0;
        assert!((report.score - expected).abs() < 1e-9);
    }

    #[test]
    fn rating_bands() {
        assert_eq!(rating(85.0), "Excellent");
        assert_eq!(rating(80.0), "Excellent");
        assert_eq!(rating(65.0), "Good");
        assert_eq!(rating(10.0), "Needs Improvement");
    }
}
