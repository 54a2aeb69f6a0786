// src/services/parameters.rs
use serde::Serialize;

/// Presentation bounds for one scenario lever. The engine never enforces
/// `max`; the frontend uses it for its input widgets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

pub const GHG_REDUCTION: ParameterSpec = ParameterSpec {
    name: "reduction_pct",
    label: "Additional % reduction in GHG by 2030 vs baseline",
    unit: "%",
    min: 0.0,
    max: 30.0,
    default: 10.0,
};

pub const WATER_INVESTMENT: ParameterSpec = ParameterSpec {
    name: "investment_m",
    label: "Investment in Water Recycling",
    unit: "million USD",
    min: 0.0,
    max: 50.0,
    default: 10.0,
};

pub const SOLAR_CAPACITY: ParameterSpec = ParameterSpec {
    name: "solar_mw",
    label: "Additional Solar Capacity",
    unit: "MW",
    min: 0.0,
    max: 100.0,
    default: 20.0,
};

pub const WASTE_REUSE: ParameterSpec = ParameterSpec {
    name: "reuse_k",
    label: "Potential Additional Byproduct Reuse",
    unit: "k tonnes",
    min: 0.0,
    max: 20.0,
    default: 5.0,
};

// The combined score panel has its own, narrower levers.
pub const SCORE_GHG: ParameterSpec = ParameterSpec {
    name: "ghg",
    label: "GHG Additional Reduction",
    unit: "%",
    min: 0.0,
    max: 30.0,
    default: 10.0,
};

pub const SCORE_WATER: ParameterSpec = ParameterSpec {
    name: "water",
    label: "Water Investment",
    unit: "million USD",
    min: 0.0,
    max: 50.0,
    default: 10.0,
};

pub const SCORE_SOLAR: ParameterSpec = ParameterSpec {
    name: "solar",
    label: "Solar Capacity",
    unit: "MW",
    min: 0.0,
    max: 50.0,
    default: 20.0,
};

pub const SCORE_WASTE: ParameterSpec = ParameterSpec {
    name: "waste",
    label: "Waste Reuse",
    unit: "k tonnes",
    min: 0.0,
    max: 10.0,
    default: 5.0,
};

#[derive(Debug, Serialize)]
pub struct ParameterCatalog {
    pub scenarios: [ParameterSpec; 4],
    pub score: [ParameterSpec; 4],
}

pub fn catalog() -> ParameterCatalog {
    ParameterCatalog {
        scenarios: [GHG_REDUCTION, WATER_INVESTMENT, SOLAR_CAPACITY, WASTE_REUSE],
        score: [SCORE_GHG, SCORE_WATER, SCORE_SOLAR, SCORE_WASTE],
    }
}
