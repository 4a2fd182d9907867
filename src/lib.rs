//! Fiscal Scenarios - oil price sensitivity of a national budget
//!
//! This library provides:
//! - Scenario parameters for one set of structural budget assumptions
//! - Per-price evaluation of revenue, balance, reserve and monetary base effects
//! - Price sweeps with breakeven and extremal summaries
//! - CSV and JSON export of sweep results

pub mod error;
pub mod params;
pub mod engine;
pub mod scenario;
pub mod export;

// Re-export commonly used types
pub use error::ScenarioError;
pub use params::ScenarioParameters;
pub use engine::{evaluate, ResultRow, ResultTable, Summary, Column};
pub use scenario::{run, ScenarioRunner};
