//! Compare balances under the total and the current expenditure base
//!
//! Usage: cargo run --bin compare_expenditure [scenario.json]

use anyhow::{Context, Result};
use fiscal_scenarios::params::{load_parameters, ScenarioParameters};
use fiscal_scenarios::ScenarioRunner;
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let base = match env::args().nth(1) {
        Some(path) => load_parameters(&path)
            .with_context(|| format!("Failed to load scenario from {}", path))?,
        None => ScenarioParameters::default(),
    };

    let runner = ScenarioRunner::new(base);
    let variants = [
        ScenarioParameters { use_total_expenditure: true, ..runner.params().clone() },
        ScenarioParameters { use_total_expenditure: false, ..runner.params().clone() },
    ];
    let results = runner.run_scenarios(&variants)?;
    let (total, total_summary) = &results[0];
    let (current, current_summary) = &results[1];

    println!("{:>8} {:>16} {:>16} {:>16} {:>16}",
        "Price", "Balance(Total)", "Balance(Curr)", "Reserves(Total)", "Reserves(Curr)");
    println!("{}", "-".repeat(76));

    for (t, c) in total.rows().iter().zip(current.rows()) {
        println!("{:>8.2} {:>16.1} {:>16.1} {:>16.1} {:>16.1}",
            t.oil_price, t.balance, c.balance, t.reserves_after, c.reserves_after);
    }

    let fmt = |p: Option<f64>| p.map(|v| format!("${:.2}", v)).unwrap_or_else(|| "-".to_string());
    println!("\nBreakeven (total expenditure):   {}", fmt(total_summary.breakeven_price));
    println!("Breakeven (current expenditure): {}", fmt(current_summary.breakeven_price));

    Ok(())
}
