use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// PoolType
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PoolType {
    AboveGround,
    SemiInGround,
    InGround,
}

impl PoolType {
    pub fn all() -> &'static [PoolType] {
        &[PoolType::AboveGround, PoolType::SemiInGround, PoolType::InGround]
    }

    /// Permissive lookup: unknown labels resolve to `None`, never an error.
    pub fn parse(s: &str) -> Option<PoolType> {
        match s {
            "Above-Ground" => Some(PoolType::AboveGround),
            "Semi-In-Ground" => Some(PoolType::SemiInGround),
            "In-Ground" => Some(PoolType::InGround),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PoolType::AboveGround => "Above-Ground",
            PoolType::SemiInGround => "Semi-In-Ground",
            PoolType::InGround => "In-Ground",
        }
    }

    /// Semi-in-ground pools share the in-ground construction path.
    pub fn is_ground_set(self) -> bool {
        matches!(self, PoolType::SemiInGround | PoolType::InGround)
    }

    pub fn base_price(self) -> f64 {
        match self {
            PoolType::AboveGround => 5_000.0,
            PoolType::SemiInGround => 15_000.0,
            PoolType::InGround => 30_000.0,
        }
    }

    /// Excavation baseline before the soil multiplier. Above-ground pools
    /// require no digging.
    pub fn excavation_base(self) -> f64 {
        match self {
            PoolType::AboveGround => 0.0,
            PoolType::SemiInGround => 2_500.0,
            PoolType::InGround => 5_000.0,
        }
    }

    /// Fraction of average home value a pool of this type adds.
    pub fn property_value_rate(self) -> f64 {
        match self {
            PoolType::AboveGround => 0.01,
            PoolType::SemiInGround => 0.04,
            PoolType::InGround => 0.065,
        }
    }

    /// Scales the annual professional-service cost.
    pub fn service_multiplier(self) -> f64 {
        match self {
            PoolType::AboveGround => 0.5,
            PoolType::SemiInGround => 0.75,
            PoolType::InGround => 1.0,
        }
    }
}

impl fmt::Display for PoolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SizeClass
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeClass {
    Small,
    Medium,
    Large,
    Custom,
}

impl SizeClass {
    pub fn all() -> &'static [SizeClass] {
        &[SizeClass::Small, SizeClass::Medium, SizeClass::Large, SizeClass::Custom]
    }

    pub fn parse(s: &str) -> Option<SizeClass> {
        match s {
            "Small" => Some(SizeClass::Small),
            "Medium" => Some(SizeClass::Medium),
            "Large" => Some(SizeClass::Large),
            "Custom" => Some(SizeClass::Custom),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SizeClass::Small => "Small",
            SizeClass::Medium => "Medium",
            SizeClass::Large => "Large",
            SizeClass::Custom => "Custom",
        }
    }

    /// Preset length/width/depth in feet. Custom sizes carry their own
    /// dimensions on the plan record.
    pub fn preset_dims(self) -> Option<(f64, f64, f64)> {
        match self {
            SizeClass::Small => Some((15.0, 30.0, 4.0)),
            SizeClass::Medium => Some((20.0, 40.0, 5.0)),
            SizeClass::Large => Some((25.0, 50.0, 6.0)),
            SizeClass::Custom => None,
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SoilType
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoilType {
    Sandy,
    Loamy,
    Clay,
    Rocky,
}

impl SoilType {
    pub fn all() -> &'static [SoilType] {
        &[SoilType::Sandy, SoilType::Loamy, SoilType::Clay, SoilType::Rocky]
    }

    pub fn parse(s: &str) -> Option<SoilType> {
        match s {
            "Sandy" | "Sand" => Some(SoilType::Sandy),
            "Loamy" | "Loam" => Some(SoilType::Loamy),
            "Clay" => Some(SoilType::Clay),
            "Rocky" => Some(SoilType::Rocky),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SoilType::Sandy => "Sandy",
            SoilType::Loamy => "Loamy",
            SoilType::Clay => "Clay",
            SoilType::Rocky => "Rocky",
        }
    }

    /// Excavation cost multiplier. Unset or unknown soil reads as 1.0.
    pub fn excavation_multiplier(self) -> f64 {
        match self {
            SoilType::Sandy => 1.0,
            SoilType::Loamy => 1.2,
            SoilType::Clay => 1.4,
            SoilType::Rocky => 2.0,
        }
    }
}

impl fmt::Display for SoilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Finish
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Finish {
    VinylLiner,
    Fiberglass,
    Concrete,
    Tile,
    Pebble,
}

impl Finish {
    pub fn all() -> &'static [Finish] {
        &[
            Finish::VinylLiner,
            Finish::Fiberglass,
            Finish::Concrete,
            Finish::Tile,
            Finish::Pebble,
        ]
    }

    /// Accepts the label variants seen in older saved plans
    /// ("Concrete/Gunite", "Tiles").
    pub fn parse(s: &str) -> Option<Finish> {
        match s {
            "Vinyl Liner" => Some(Finish::VinylLiner),
            "Fiberglass" => Some(Finish::Fiberglass),
            "Concrete" | "Concrete/Gunite" => Some(Finish::Concrete),
            "Tile" | "Tiles" => Some(Finish::Tile),
            "Pebble" => Some(Finish::Pebble),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Finish::VinylLiner => "Vinyl Liner",
            Finish::Fiberglass => "Fiberglass",
            Finish::Concrete => "Concrete",
            Finish::Tile => "Tile",
            Finish::Pebble => "Pebble",
        }
    }

    pub fn cost(self) -> f64 {
        match self {
            Finish::VinylLiner => 3_000.0,
            Finish::Fiberglass => 8_000.0,
            Finish::Concrete => 12_000.0,
            Finish::Tile => 18_000.0,
            Finish::Pebble => 15_000.0,
        }
    }

    /// Days for the surface-finish construction phase.
    pub fn surface_days(self) -> u32 {
        match self {
            Finish::VinylLiner => 2,
            Finish::Fiberglass => 1,
            Finish::Tile => 10,
            Finish::Concrete | Finish::Pebble => 7,
        }
    }
}

impl fmt::Display for Finish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Extra
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extra {
    LedPoolLights,
    PoolDeck,
    HeatingSystem,
    WaterJets,
    PoolCover,
    DivingBoard,
    Slide,
    WaterfallFeature,
    SaltwaterSystem,
    PoolFence,
}

impl Extra {
    pub fn all() -> &'static [Extra] {
        &[
            Extra::LedPoolLights,
            Extra::PoolDeck,
            Extra::HeatingSystem,
            Extra::WaterJets,
            Extra::PoolCover,
            Extra::DivingBoard,
            Extra::Slide,
            Extra::WaterfallFeature,
            Extra::SaltwaterSystem,
            Extra::PoolFence,
        ]
    }

    /// Accepts alias labels from older plans; unknown names resolve to
    /// `None` and contribute nothing downstream.
    pub fn parse(s: &str) -> Option<Extra> {
        match s {
            "LED Pool Lights" | "LED Lighting" => Some(Extra::LedPoolLights),
            "Pool Deck" => Some(Extra::PoolDeck),
            "Heating System" | "Pool Heater" => Some(Extra::HeatingSystem),
            "Water Jets" => Some(Extra::WaterJets),
            "Pool Cover" => Some(Extra::PoolCover),
            "Diving Board" => Some(Extra::DivingBoard),
            "Slide" | "Pool Slide" => Some(Extra::Slide),
            "Waterfall Feature" => Some(Extra::WaterfallFeature),
            "Saltwater System" | "Salt Water System" => Some(Extra::SaltwaterSystem),
            "Pool Fence" | "Safety Fence" => Some(Extra::PoolFence),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Extra::LedPoolLights => "LED Pool Lights",
            Extra::PoolDeck => "Pool Deck",
            Extra::HeatingSystem => "Heating System",
            Extra::WaterJets => "Water Jets",
            Extra::PoolCover => "Pool Cover",
            Extra::DivingBoard => "Diving Board",
            Extra::Slide => "Slide",
            Extra::WaterfallFeature => "Waterfall Feature",
            Extra::SaltwaterSystem => "Saltwater System",
            Extra::PoolFence => "Pool Fence",
        }
    }

    pub fn price(self) -> f64 {
        match self {
            Extra::LedPoolLights => 550.0,
            Extra::PoolDeck => 6_500.0,
            Extra::HeatingSystem => 3_500.0,
            Extra::WaterJets => 1_250.0,
            Extra::PoolCover => 950.0,
            Extra::DivingBoard => 650.0,
            Extra::Slide => 3_000.0,
            Extra::WaterfallFeature => 3_250.0,
            Extra::SaltwaterSystem => 2_000.0,
            Extra::PoolFence => 2_750.0,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Extra::LedPoolLights => "Color-changing underwater lighting",
            Extra::PoolDeck => "Surrounding patio area",
            Extra::HeatingSystem => "Extend swimming season",
            Extra::WaterJets => "Massage and exercise features",
            Extra::PoolCover => "Safety and heat retention",
            Extra::DivingBoard => "Fun diving feature",
            Extra::Slide => "Water slide for entertainment",
            Extra::WaterfallFeature => "Decorative water feature",
            Extra::SaltwaterSystem => "Alternative to chlorine",
            Extra::PoolFence => "Safety barrier (often required)",
        }
    }
}

impl fmt::Display for Extra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_type_roundtrip() {
        for &t in PoolType::all() {
            assert_eq!(PoolType::parse(t.as_str()), Some(t));
        }
        assert_eq!(PoolType::parse("Infinity"), None);
    }

    #[test]
    fn soil_aliases() {
        assert_eq!(SoilType::parse("Sand"), Some(SoilType::Sandy));
        assert_eq!(SoilType::parse("Loam"), Some(SoilType::Loamy));
        assert_eq!(SoilType::parse("Chalk"), None);
    }

    #[test]
    fn finish_aliases() {
        assert_eq!(Finish::parse("Concrete/Gunite"), Some(Finish::Concrete));
        assert_eq!(Finish::parse("Tiles"), Some(Finish::Tile));
        assert_eq!(Finish::parse("Marble"), None);
    }

    #[test]
    fn extra_aliases() {
        assert_eq!(Extra::parse("LED Lighting"), Some(Extra::LedPoolLights));
        assert_eq!(Extra::parse("Pool Heater"), Some(Extra::HeatingSystem));
        assert_eq!(Extra::parse("Safety Fence"), Some(Extra::PoolFence));
        assert_eq!(Extra::parse("Lazy River"), None);
    }

    #[test]
    fn extra_catalog_complete() {
        assert_eq!(Extra::all().len(), 10);
        for &e in Extra::all() {
            assert_eq!(Extra::parse(e.as_str()), Some(e));
            assert!(e.price() > 0.0);
        }
    }

    #[test]
    fn excavation_baselines() {
        assert_eq!(PoolType::AboveGround.excavation_base(), 0.0);
        assert_eq!(PoolType::SemiInGround.excavation_base(), 2_500.0);
        assert_eq!(PoolType::InGround.excavation_base(), 5_000.0);
    }

    #[test]
    fn soil_multipliers() {
        assert_eq!(SoilType::Sandy.excavation_multiplier(), 1.0);
        assert_eq!(SoilType::Rocky.excavation_multiplier(), 2.0);
    }

    #[test]
    fn ground_set_classification() {
        assert!(!PoolType::AboveGround.is_ground_set());
        assert!(PoolType::SemiInGround.is_ground_set());
        assert!(PoolType::InGround.is_ground_set());
    }
}
