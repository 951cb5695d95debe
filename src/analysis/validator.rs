//! Precondition checks run once before any computation.
//!
//! Dataset shape failures are `InvalidData`, option failures are
//! `InvalidConfig`. The dataset is always checked first.

use super::strategy::AnalysisOptions;
use crate::dataset::Dataset;
use crate::utils::config::{REQUIRED_COLLECTIONS, REQUIRED_OPTION_COUNT};
use crate::utils::error::AnalysisError;
use log::debug;

/// Validate raw dataset JSON before deserialization
///
/// **Public** - used by the loader and `analyze_value`
///
/// The dataset must be an object whose four required collections are all
/// non-empty arrays.
pub fn validate_dataset_value(raw: Option<&serde_json::Value>) -> Result<(), AnalysisError> {
    let object = match raw {
        None | Some(serde_json::Value::Null) => {
            return Err(AnalysisError::InvalidData("dataset is missing".to_string()))
        }
        Some(value) => value.as_object().ok_or_else(|| {
            AnalysisError::InvalidData("dataset must be a JSON object".to_string())
        })?,
    };

    for &field in REQUIRED_COLLECTIONS {
        let items = object
            .get(field)
            .ok_or_else(|| AnalysisError::InvalidData(format!("'{}' is missing", field)))?
            .as_array()
            .ok_or_else(|| AnalysisError::InvalidData(format!("'{}' must be an array", field)))?;

        if items.is_empty() {
            return Err(AnalysisError::InvalidData(format!("'{}' is empty", field)));
        }
    }

    Ok(())
}

/// Validate a typed dataset
///
/// **Public** - first step of `analyze`
pub fn validate_dataset(dataset: &Dataset) -> Result<(), AnalysisError> {
    let lengths = [
        dataset.sellers.len(),
        dataset.customers.len(),
        dataset.products.len(),
        dataset.purchase_records.len(),
    ];

    for (&field, &len) in REQUIRED_COLLECTIONS.iter().zip(lengths.iter()) {
        if len == 0 {
            return Err(AnalysisError::InvalidData(format!("'{}' is empty", field)));
        }
    }

    debug!("Dataset shape valid: {:?} entries", lengths);
    Ok(())
}

/// Validate analysis options
///
/// **Public** - second step of `analyze`
///
/// Exactly two entries are required and both must be invocable strategies.
/// Entry names are not checked.
pub fn validate_options(options: Option<&AnalysisOptions>) -> Result<(), AnalysisError> {
    let options =
        options.ok_or_else(|| AnalysisError::InvalidConfig("options are missing".to_string()))?;

    if options.len() != REQUIRED_OPTION_COUNT {
        return Err(AnalysisError::InvalidConfig(format!(
            "expected exactly {} strategy entries, found {}",
            REQUIRED_OPTION_COUNT,
            options.len()
        )));
    }

    if let Some((name, _)) = options.iter().find(|(_, entry)| !entry.is_callable()) {
        return Err(AnalysisError::InvalidConfig(format!(
            "option '{}' is not a callable strategy",
            name
        )));
    }

    Ok(())
}
