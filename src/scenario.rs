//! Scenario runner for oil price sweeps
//!
//! Holds a base set of assumptions and runs sweeps against it, either over
//! its own price list, a different price list, or a batch of what-if variants.

use crate::engine::{evaluate, ResultTable, Summary};
use crate::error::{Result, ScenarioError};
use crate::params::ScenarioParameters;

/// Sweep every price in `params.oil_prices` and summarise the results
///
/// Fails with `InvalidInput` when the price list is empty; otherwise the
/// table has exactly one row per price, in input order.
pub fn run(params: &ScenarioParameters) -> Result<(ResultTable, Summary)> {
    let table: ResultTable = params
        .oil_prices
        .iter()
        .map(|&price| evaluate(params, price))
        .collect();

    let summary = Summary::from_table(&table)
        .ok_or_else(|| ScenarioError::InvalidInput("oil price sweep is empty".to_string()))?;

    Ok((table, summary))
}

/// Runner holding the base assumptions for repeated sweeps
///
/// # Example
/// ```
/// use fiscal_scenarios::ScenarioRunner;
///
/// let runner = ScenarioRunner::default();
/// let (table, summary) = runner.run_with_prices(&[60.0, 90.0]).unwrap();
/// assert_eq!(table.len(), 2);
/// assert!(summary.breakeven_price.is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    base_params: ScenarioParameters,
}

impl ScenarioRunner {
    pub fn new(base_params: ScenarioParameters) -> Self {
        Self { base_params }
    }

    /// Sweep the base price list
    pub fn run(&self) -> Result<(ResultTable, Summary)> {
        run(&self.base_params)
    }

    /// Sweep a different price list under the same assumptions
    pub fn run_with_prices(&self, prices: &[f64]) -> Result<(ResultTable, Summary)> {
        run(&self.base_params.with_oil_prices(prices.to_vec()))
    }

    /// Run independent variants, stopping at the first invalid one
    pub fn run_scenarios(
        &self,
        variants: &[ScenarioParameters],
    ) -> Result<Vec<(ResultTable, Summary)>> {
        variants.iter().map(run).collect()
    }

    pub fn params(&self) -> &ScenarioParameters {
        &self.base_params
    }

    pub fn params_mut(&mut self) -> &mut ScenarioParameters {
        &mut self.base_params
    }
}
