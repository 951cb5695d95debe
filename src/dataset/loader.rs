//! Dataset loading from JSON.
//!
//! Raw JSON is shape-checked before typed deserialization so that a missing
//! or empty collection surfaces as `AnalysisError::InvalidData` rather than
//! a generic serde message.

use super::schema::Dataset;
use crate::analysis::validator::validate_dataset_value;
use crate::utils::error::{AnalysisError, DatasetError};
use log::debug;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Parse a dataset from raw JSON
///
/// **Public** - main entry point for in-memory input
///
/// # Errors
/// * `AnalysisError::InvalidData` - shape check failed, or a record does not
///   match the typed schema
pub fn parse_dataset(raw: &serde_json::Value) -> Result<Dataset, AnalysisError> {
    validate_dataset_value(Some(raw))?;

    let dataset: Dataset = serde_json::from_value(raw.clone())
        .map_err(|e| AnalysisError::InvalidData(format!("malformed dataset: {}", e)))?;

    debug!(
        "Parsed dataset: {} sellers, {} customers, {} products, {} purchase records",
        dataset.sellers.len(),
        dataset.customers.len(),
        dataset.products.len(),
        dataset.purchase_records.len()
    );

    Ok(dataset)
}

/// Read raw dataset JSON from a file
///
/// **Public** - used by the analyze command
pub fn read_dataset_value(input_path: impl AsRef<Path>) -> Result<serde_json::Value, DatasetError> {
    let input_path = input_path.as_ref();

    debug!("Reading dataset from: {}", input_path.display());

    let file = File::open(input_path)?;
    let value = serde_json::from_reader(BufReader::new(file))?;

    Ok(value)
}

/// Read and parse a dataset file
///
/// **Public** - convenience wrapper over `read_dataset_value` + `parse_dataset`
pub fn read_dataset(input_path: impl AsRef<Path>) -> Result<Dataset, DatasetError> {
    let value = read_dataset_value(input_path)?;
    Ok(parse_dataset(&value)?)
}
