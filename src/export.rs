//! Write sweep results to CSV files and JSON response bodies
//!
//! The results file carries the table columns in `Column` order with
//! unrounded values; the summary file is a key/value block.

use crate::engine::{Column, ResultTable, Summary};
use crate::error::Result;
use chrono::{DateTime, Utc};
use log::info;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default output directory, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "output";

pub const RESULTS_FILE_NAME: &str = "scenario_results.csv";
pub const SUMMARY_FILE_NAME: &str = "scenario_summary.csv";

/// Paths of the files written by `write_results`
#[derive(Debug, Clone)]
pub struct ExportPaths {
    pub results: PathBuf,
    pub summary: PathBuf,
}

/// Write the table and its summary into `dir`, creating it if needed
pub fn write_results(table: &ResultTable, summary: &Summary, dir: &Path) -> Result<ExportPaths> {
    fs::create_dir_all(dir)?;

    let paths = ExportPaths {
        results: dir.join(RESULTS_FILE_NAME),
        summary: dir.join(SUMMARY_FILE_NAME),
    };

    write_table(table, &paths.results)?;
    write_summary(summary, Utc::now(), &paths.summary)?;

    info!(
        "Wrote {} rows to {} and summary to {}",
        table.len(),
        paths.results.display(),
        paths.summary.display()
    );
    Ok(paths)
}

/// Write the table as CSV, one record per row in table order
pub fn write_table(table: &ResultTable, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(Column::ALL.iter().map(|c| c.header()))?;
    for row in table.rows() {
        writer.write_record(Column::ALL.iter().map(|c| c.value(row).to_string()))?;
    }

    writer.flush()?;
    Ok(())
}

/// Key/value pairs describing a summary; absent values are left blank
pub fn summary_entries(summary: &Summary) -> Vec<(&'static str, String)> {
    vec![
        (
            "breakeven_price",
            summary.breakeven_price.map(|p| p.to_string()).unwrap_or_default(),
        ),
        ("min_balance", summary.min_balance.value.to_string()),
        ("min_balance_price", summary.min_balance.oil_price.to_string()),
        ("max_balance", summary.max_balance.value.to_string()),
        ("max_balance_price", summary.max_balance.oil_price.to_string()),
        ("min_reserves_after", summary.min_reserves_after.value.to_string()),
        ("min_reserves_after_price", summary.min_reserves_after.oil_price.to_string()),
        ("reserve_exhaustion", summary.reserve_exhaustion.to_string()),
        ("deficit_count", summary.deficit_count.to_string()),
        ("price_count", summary.price_count.to_string()),
    ]
}

/// Write the summary as a key,value CSV stamped with `generated_at`
pub fn write_summary(summary: &Summary, generated_at: DateTime<Utc>, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(["key", "value"])?;
    for (key, value) in summary_entries(summary) {
        writer.write_record([key, value.as_str()])?;
    }
    writer.write_record(["generated_at", generated_at.to_rfc3339().as_str()])?;

    writer.flush()?;
    Ok(())
}

/// Response body for API-style consumers
#[derive(Debug, Serialize)]
pub struct ScenarioResponse<'a> {
    pub rows: &'a ResultTable,
    pub summary: &'a Summary,
    pub generated_at: DateTime<Utc>,
}

/// Serialise the table and summary as a JSON document
pub fn to_json(table: &ResultTable, summary: &Summary) -> Result<String> {
    let response = ScenarioResponse {
        rows: table,
        summary,
        generated_at: Utc::now(),
    };
    Ok(serde_json::to_string_pretty(&response)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ScenarioParameters;
    use crate::scenario::run;

    fn sample() -> (ResultTable, Summary) {
        let params = ScenarioParameters {
            oil_prices: vec![90.0, 60.0, 70.0],
            ..Default::default()
        };
        run(&params).unwrap()
    }

    #[test]
    fn test_results_csv_matches_table() {
        let (table, summary) = sample();
        let dir = tempfile::tempdir().unwrap();
        let paths = write_results(&table, &summary, &dir.path().join("nested")).unwrap();

        let mut reader = csv::Reader::from_path(&paths.results).unwrap();
        let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        let expected: Vec<&str> = Column::ALL.iter().map(|c| c.header()).collect();
        assert_eq!(headers, expected);

        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), table.len());

        for (record, row) in records.iter().zip(table.rows()) {
            for (field, column) in record.iter().zip(Column::ALL.iter()) {
                let value: f64 = field.parse().unwrap();
                assert_eq!(value, column.value(row));
            }
        }
    }

    #[test]
    fn test_summary_csv_contents() {
        let (_, summary) = sample();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SUMMARY_FILE_NAME);
        write_summary(&summary, Utc::now(), &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let pairs: Vec<(String, String)> = reader
            .records()
            .map(|r| {
                let r = r.unwrap();
                (r[0].to_string(), r[1].to_string())
            })
            .collect();

        let get = |key: &str| pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone());
        assert_eq!(get("price_count").as_deref(), Some("3"));
        assert_eq!(
            get("breakeven_price").unwrap().parse::<f64>().unwrap(),
            summary.breakeven_price.unwrap()
        );
        assert!(get("generated_at").is_some());
    }

    #[test]
    fn test_absent_breakeven_is_blank() {
        let params = ScenarioParameters {
            oil_prices: vec![40.0],
            ..Default::default()
        };
        let (_, summary) = run(&params).unwrap();

        let entries = summary_entries(&summary);
        let breakeven = entries.iter().find(|(k, _)| *k == "breakeven_price").unwrap();
        assert_eq!(breakeven.1, "");
    }

    #[test]
    fn test_json_response() {
        let (table, summary) = sample();
        let json = to_json(&table, &summary).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["rows"].as_array().unwrap().len(), 3);
        assert_eq!(value["summary"]["price_count"], 3);
    }
}
