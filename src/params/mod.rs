//! Scenario parameter data structures and scenario file loading

mod data;
pub mod loader;

pub use data::{ScenarioParameters, PRICE_CHOICES, DEFAULT_DAYS_PER_YEAR};
pub use loader::{load_parameters, load_parameters_from_reader};
