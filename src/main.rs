//! Fiscal Scenarios CLI
//!
//! Runs an oil price sweep over a budget scenario and writes the results

use anyhow::{Context, Result};
use clap::Parser;
use fiscal_scenarios::engine::{to_trillions, ResultTable, Summary};
use fiscal_scenarios::export::{self, DEFAULT_OUTPUT_DIR};
use fiscal_scenarios::params::{load_parameters, ScenarioParameters};
use fiscal_scenarios::scenario::run;
use log::info;
use std::path::PathBuf;

/// Oil price sensitivity of the budget balance, reserves and monetary base
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// JSON scenario file; missing fields use the form defaults
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Oil prices to sweep (USD/barrel), overriding the scenario file
    #[arg(short, long, value_delimiter = ',')]
    prices: Option<Vec<f64>>,

    /// Measure the balance against current rather than total expenditure
    #[arg(long)]
    current_expenditure: bool,

    /// Directory for the results and summary CSV files
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Skip writing CSV files
    #[arg(long)]
    no_export: bool,

    /// Print the results as JSON instead of a table
    #[arg(long)]
    json: bool,
}

impl Cli {
    /// Build the scenario from the file (if any) and command line overrides
    fn scenario(&self) -> Result<ScenarioParameters> {
        let mut params = match &self.scenario {
            Some(path) => load_parameters(path)
                .with_context(|| format!("Failed to load scenario from {}", path.display()))?,
            None => ScenarioParameters::default(),
        };

        if let Some(prices) = &self.prices {
            params.oil_prices = prices.clone();
        }
        if self.current_expenditure {
            params.use_total_expenditure = false;
        }

        Ok(params)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let params = cli.scenario()?;
    info!("Sweeping {} oil prices", params.oil_prices.len());

    let (table, summary) = run(&params).context("Scenario run failed")?;

    if cli.json {
        println!("{}", export::to_json(&table, &summary)?);
    } else {
        print_table(&table);
        print_summary(&summary);
    }

    if !cli.no_export {
        let paths = export::write_results(&table, &summary, &cli.output_dir)
            .with_context(|| format!("Failed to write results to {}", cli.output_dir.display()))?;
        if !cli.json {
            println!("\nResults written to: {}", paths.results.display());
            println!("Summary written to: {}", paths.summary.display());
        }
    }

    Ok(())
}

fn print_table(table: &ResultTable) {
    println!("Scenario Results (trillions of local currency):");
    println!("{:>8} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "Price", "OilRev", "TotalRev", "Balance", "ResChg", "ResAfter", "MonBase", "Gap");
    println!("{}", "-".repeat(88));

    for row in table.rows() {
        println!("{:>8.2} {:>10.3} {:>10.3} {:>10.3} {:>10.3} {:>10.3} {:>10.3} {:>10.3}",
            row.oil_price,
            to_trillions(row.oil_revenue),
            to_trillions(row.total_revenue),
            to_trillions(row.balance),
            to_trillions(row.net_reserve_change),
            to_trillions(row.reserves_after),
            to_trillions(row.monetary_base),
            to_trillions(row.gap),
        );
    }
}

fn print_summary(summary: &Summary) {
    println!("\nSummary:");
    match summary.breakeven_price {
        Some(price) => println!("  Breakeven Price: ${:.2}/bbl", price),
        None => println!("  Breakeven Price: not reached in sweep"),
    }
    println!("  Min Balance: {:.1} bn at ${:.2}",
        summary.min_balance.value, summary.min_balance.oil_price);
    println!("  Max Balance: {:.1} bn at ${:.2}",
        summary.max_balance.value, summary.max_balance.oil_price);
    println!("  Min Reserves After: {:.1} bn at ${:.2}",
        summary.min_reserves_after.value, summary.min_reserves_after.oil_price);
    println!("  Deficit Prices: {} of {}", summary.deficit_count, summary.price_count);
    if summary.reserve_exhaustion {
        println!("  WARNING: reserves exhausted at some prices");
    }
}
