//! Load scenario parameters from JSON scenario files
//!
//! Any field missing from the file falls back to the input form default.

use super::ScenarioParameters;
use crate::error::Result;
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Load a scenario from a JSON file
pub fn load_parameters<P: AsRef<Path>>(path: P) -> Result<ScenarioParameters> {
    let path = path.as_ref();
    info!("Loading scenario parameters from {}", path.display());

    let file = File::open(path)?;
    load_parameters_from_reader(BufReader::new(file))
}

/// Load a scenario from any reader (e.g., string buffer, request body)
pub fn load_parameters_from_reader<R: Read>(reader: R) -> Result<ScenarioParameters> {
    let params: ScenarioParameters = serde_json::from_reader(reader)?;
    debug!("Loaded scenario with {} price points", params.oil_prices.len());
    Ok(params)
}
