//! Scenario parameter set matching the budget analyst's input form

use serde::{Deserialize, Serialize};

/// Oil price points (USD/barrel) offered by the input form
pub const PRICE_CHOICES: [f64; 15] = [
    50.0, 55.0, 58.5, 60.0, 62.0, 65.0, 67.0, 70.0, 72.0, 75.0, 80.0, 90.0, 100.0, 110.0, 120.0,
];

/// Default days per year used to annualise daily export volumes
pub const DEFAULT_DAYS_PER_YEAR: u32 = 365;

fn default_oil_prices() -> Vec<f64> {
    vec![60.0, 70.0, 90.0, 110.0]
}
fn default_export_volume() -> f64 { 4.1 }
fn default_domestic_consumption() -> f64 { 0.8 }
fn default_government_share() -> f64 { 1.0 }
fn default_days_per_year() -> u32 { DEFAULT_DAYS_PER_YEAR }
fn default_exchange_rate() -> f64 { 1300.0 }
fn default_non_oil_revenue() -> f64 { 12_000.0 }
fn default_total_expenditure() -> f64 { 147_000.0 }
fn default_current_expenditure() -> f64 { 120_000.0 }
fn default_true() -> bool { true }
fn default_foreign_reserves() -> f64 { 132_000.0 }
fn default_monetary_base() -> f64 { 104_000.0 }
fn default_cb_financing_share() -> f64 { 0.3 }
fn default_surplus_share() -> f64 { 0.5 }

/// Structural assumptions for one sweep over oil prices
///
/// Monetary amounts are in billions of local currency. Share fields are
/// expected in [0, 1]; they are not validated, and out-of-range values
/// simply flow through the formulas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioParameters {
    /// Price sweep (USD/barrel), evaluated in this order
    #[serde(default = "default_oil_prices")]
    pub oil_prices: Vec<f64>,

    /// Crude exports (million barrels/day)
    #[serde(default = "default_export_volume")]
    pub export_volume_mbpd: f64,

    /// Domestic consumption (million barrels/day). Not part of the revenue formula.
    #[serde(default = "default_domestic_consumption")]
    pub domestic_consumption_mbpd: f64,

    /// Fraction of export proceeds accruing to the government
    #[serde(default = "default_government_share")]
    pub government_export_share: f64,

    #[serde(default = "default_days_per_year")]
    pub days_per_year: u32,

    /// Local currency units per USD
    #[serde(default = "default_exchange_rate")]
    pub exchange_rate: f64,

    #[serde(default = "default_non_oil_revenue")]
    pub non_oil_revenue: f64,

    #[serde(default = "default_total_expenditure")]
    pub total_expenditure: f64,

    #[serde(default = "default_current_expenditure")]
    pub current_expenditure: f64,

    /// Balance against total expenditure (true) or current expenditure (false)
    #[serde(default = "default_true")]
    pub use_total_expenditure: bool,

    /// Opening foreign reserve stock
    #[serde(default = "default_foreign_reserves")]
    pub foreign_reserves: f64,

    /// Opening monetary base
    #[serde(default = "default_monetary_base")]
    pub monetary_base: f64,

    /// Fraction of a deficit financed by central bank money creation
    #[serde(default = "default_cb_financing_share")]
    pub central_bank_deficit_financing_share: f64,

    /// Fraction of a surplus added to foreign reserves
    #[serde(default = "default_surplus_share")]
    pub surplus_to_reserves_share: f64,
}

impl Default for ScenarioParameters {
    fn default() -> Self {
        Self {
            oil_prices: default_oil_prices(),
            export_volume_mbpd: default_export_volume(),
            domestic_consumption_mbpd: default_domestic_consumption(),
            government_export_share: default_government_share(),
            days_per_year: default_days_per_year(),
            exchange_rate: default_exchange_rate(),
            non_oil_revenue: default_non_oil_revenue(),
            total_expenditure: default_total_expenditure(),
            current_expenditure: default_current_expenditure(),
            use_total_expenditure: true,
            foreign_reserves: default_foreign_reserves(),
            monetary_base: default_monetary_base(),
            central_bank_deficit_financing_share: default_cb_financing_share(),
            surplus_to_reserves_share: default_surplus_share(),
        }
    }
}

impl ScenarioParameters {
    /// Spending figure the balance is measured against
    pub fn expenditure_base(&self) -> f64 {
        if self.use_total_expenditure {
            self.total_expenditure
        } else {
            self.current_expenditure
        }
    }

    /// Government's share of daily exports (million barrels/day)
    pub fn government_export_volume(&self) -> f64 {
        self.export_volume_mbpd * self.government_export_share
    }

    /// Same assumptions with a different price sweep
    pub fn with_oil_prices(&self, oil_prices: Vec<f64>) -> Self {
        Self {
            oil_prices,
            ..self.clone()
        }
    }
}
