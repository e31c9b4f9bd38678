use crate::types::{Extra, Finish, PoolType, SizeClass, SoilType};
use serde::{Deserialize, Serialize};

/// Medium baseline surface area in square feet; custom sizes scale against it.
const BASELINE_AREA_SQFT: f64 = 450.0;

/// Cubic feet to gallons.
const GALLONS_PER_CUBIC_FOOT: f64 = 7.5;

// ---------------------------------------------------------------------------
// PlanRecord
// ---------------------------------------------------------------------------

/// The full set of user-chosen pool attributes driving all derivations.
///
/// Fields are free-form strings (empty = unset) so that plans saved by older
/// versions load without loss; derivations go through the typed accessors,
/// which resolve unknown labels to a zero/identity default. Field names
/// match the persisted JSON layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanRecord {
    pub location: String,
    pub soil_type: String,
    pub shape: String,
    pub size: String,
    pub custom_length: f64,
    pub custom_width: f64,
    pub custom_depth: f64,
    pub pool_type: String,
    pub finish: String,
    pub extras: Vec<String>,
}

impl PlanRecord {
    pub fn new() -> Self {
        Self::default()
    }

    // ---------------------------------------------------------------------------
    // Typed accessors
    // ---------------------------------------------------------------------------

    pub fn pool_type(&self) -> Option<PoolType> {
        PoolType::parse(&self.pool_type)
    }

    pub fn size_class(&self) -> Option<SizeClass> {
        SizeClass::parse(&self.size)
    }

    pub fn soil(&self) -> Option<SoilType> {
        SoilType::parse(&self.soil_type)
    }

    pub fn finish_kind(&self) -> Option<Finish> {
        Finish::parse(&self.finish)
    }

    pub fn has_extra(&self, extra: Extra) -> bool {
        self.extras.iter().any(|e| Extra::parse(e) == Some(extra))
    }

    /// Typed view of the extras set, dropping unrecognized names.
    pub fn known_extras(&self) -> Vec<Extra> {
        self.extras.iter().filter_map(|e| Extra::parse(e)).collect()
    }

    // ---------------------------------------------------------------------------
    // Mutations
    // ---------------------------------------------------------------------------

    /// Add the extra if absent, remove it if present. Toggling the same name
    /// twice restores the original set.
    pub fn toggle_extra(&mut self, name: &str) -> bool {
        if let Some(pos) = self.extras.iter().position(|e| e == name) {
            self.extras.remove(pos);
            false
        } else {
            self.extras.push(name.to_string());
            true
        }
    }

    // ---------------------------------------------------------------------------
    // Derived geometry
    // ---------------------------------------------------------------------------

    /// Cost scaling factor by size. Custom sizes scale by surface area
    /// against the 450 sq ft medium baseline; unset custom dimensions read
    /// as zero area, so an incomplete custom plan prices near zero.
    pub fn size_factor(&self) -> f64 {
        match self.size_class() {
            Some(SizeClass::Small) => 0.7,
            Some(SizeClass::Medium) => 1.0,
            Some(SizeClass::Large) => 1.5,
            Some(SizeClass::Custom) => (self.custom_length * self.custom_width) / BASELINE_AREA_SQFT,
            None => 1.0,
        }
    }

    /// Water volume in gallons from preset or custom dimensions. Unset
    /// custom dimensions fall back to the medium preset per axis.
    pub fn volume_gallons(&self) -> f64 {
        let (length, width, depth) = match self.size_class() {
            Some(SizeClass::Custom) => (
                if self.custom_length > 0.0 { self.custom_length } else { 20.0 },
                if self.custom_width > 0.0 { self.custom_width } else { 40.0 },
                if self.custom_depth > 0.0 { self.custom_depth } else { 5.0 },
            ),
            Some(class) => class.preset_dims().unwrap_or((0.0, 0.0, 0.0)),
            None => (0.0, 0.0, 0.0),
        };
        length * width * depth * GALLONS_PER_CUBIC_FOOT
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_extra_is_idempotent_pair() {
        let mut plan = PlanRecord::new();
        let before = plan.extras.clone();
        assert!(plan.toggle_extra("Pool Deck"));
        assert!(plan.has_extra(Extra::PoolDeck));
        assert!(!plan.toggle_extra("Pool Deck"));
        assert_eq!(plan.extras, before);
    }

    #[test]
    fn extras_preserve_insertion_order() {
        let mut plan = PlanRecord::new();
        plan.toggle_extra("Slide");
        plan.toggle_extra("Pool Cover");
        plan.toggle_extra("LED Pool Lights");
        assert_eq!(plan.extras, vec!["Slide", "Pool Cover", "LED Pool Lights"]);
    }

    #[test]
    fn has_extra_accepts_aliases() {
        let mut plan = PlanRecord::new();
        plan.toggle_extra("Safety Fence");
        assert!(plan.has_extra(Extra::PoolFence));
    }

    #[test]
    fn custom_size_factor_scales_by_area() {
        let plan = PlanRecord {
            size: "Custom".into(),
            custom_length: 20.0,
            custom_width: 40.0,
            ..Default::default()
        };
        assert!((plan.size_factor() - 800.0 / 450.0).abs() < 1e-9);
    }

    #[test]
    fn unset_custom_dims_price_at_zero() {
        let plan = PlanRecord { size: "Custom".into(), ..Default::default() };
        assert_eq!(plan.size_factor(), 0.0);
    }

    #[test]
    fn unset_size_is_identity_factor() {
        let plan = PlanRecord::new();
        assert_eq!(plan.size_factor(), 1.0);
    }

    #[test]
    fn medium_volume() {
        let plan = PlanRecord { size: "Medium".into(), ..Default::default() };
        // 20 x 40 x 5 x 7.5
        assert_eq!(plan.volume_gallons(), 30_000.0);
    }

    #[test]
    fn custom_volume_defaults_missing_axes_to_medium() {
        let plan = PlanRecord {
            size: "Custom".into(),
            custom_length: 10.0,
            ..Default::default()
        };
        assert_eq!(plan.volume_gallons(), 10.0 * 40.0 * 5.0 * 7.5);
    }

    #[test]
    fn json_layout_is_camel_case() {
        let mut plan = PlanRecord::new();
        plan.pool_type = "In-Ground".into();
        plan.custom_length = 12.0;
        let json = serde_json::to_string(&plan).unwrap();
        assert!(json.contains("\"poolType\":\"In-Ground\""));
        assert!(json.contains("\"customLength\":12.0"));
    }

    #[test]
    fn loads_plan_with_missing_fields() {
        let plan: PlanRecord = serde_json::from_str(r#"{"poolType":"In-Ground"}"#).unwrap();
        assert_eq!(plan.pool_type(), Some(PoolType::InGround));
        assert!(plan.extras.is_empty());
    }
}
