use serde::Deserialize;

/// A Brazilian state with its regulated base electricity tariff.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub code: String,
    pub name: String,
    pub base_tariff_per_kwh: f64,
}

impl Region {
    /// Label used in the selector and result summary, e.g. "São Paulo (SP)".
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.code)
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

/// One full simulation outcome. Replaced wholesale on every successful
/// request; never merged with a previous result.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub region: Region,
    pub consumption_kwh: f64,
    pub current_monthly_cost: f64,
    pub current_annual_cost: f64,
    pub total_suppliers: u32,
    pub available_solutions: Vec<Solution>,
}

/// A category of supplier offers (e.g. distributed generation vs free
/// market). Categories are unique within one result per the server contract.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    pub category: String,
    #[serde(default)]
    pub best_saving: Option<SavingHighlight>,
    pub suppliers: Vec<Supplier>,
}

/// The offer the server identified as most economical within a category.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingHighlight {
    pub supplier: SupplierRef,
    pub monthly_saving: f64,
    pub annual_saving: f64,
    pub saving_percent: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SupplierRef {
    pub id: String,
    pub name: String,
}

/// Absent cost fields stay `None` and are omitted from rendering, never
/// shown as zero.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: String,
    pub name: String,
    pub logo_url: String,
    #[serde(default)]
    pub offered_modes: serde_json::Value,
    #[serde(default)]
    pub cost_per_kwh_mode_a: Option<f64>,
    #[serde(default)]
    pub cost_per_kwh_mode_b: Option<f64>,
    pub total_customers: u32,
    pub average_rating: f64,
}
