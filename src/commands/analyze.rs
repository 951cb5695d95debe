//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Reads the dataset JSON
//! 2. Runs the analysis pipeline
//! 3. Writes the JSON report
//! 4. Optionally prints a text summary

use crate::analysis::{analyze_value, AnalysisOptions};
use crate::dataset::read_dataset_value;
use crate::output::{generate_text_summary, validate_path, write_report, Report};
use crate::utils::config::{DEFAULT_SUMMARY_ROWS, MAX_SUMMARY_ROWS};
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    /// Path to dataset JSON
    pub input: PathBuf,

    /// Output path for JSON report
    pub output_json: PathBuf,

    /// Print text summary to stdout
    pub print_summary: bool,

    /// Number of sellers shown in the summary
    pub summary_rows: usize,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("dataset.json"),
            output_json: PathBuf::from("report.json"),
            print_summary: false,
            summary_rows: DEFAULT_SUMMARY_ROWS,
        }
    }
}

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The report that was written
///
/// # Errors
/// * Dataset read or parse failures
/// * Analysis errors (invalid data, invalid options, integrity)
/// * File write errors
pub fn execute_analyze(args: AnalyzeArgs) -> Result<Report> {
    let start_time = Instant::now();

    info!("Starting analysis of: {}", args.input.display());

    // Step 1: Read dataset
    info!("Step 1/3: Reading dataset...");
    let raw = read_dataset_value(&args.input)
        .with_context(|| format!("Failed to read dataset {}", args.input.display()))?;

    // Step 2: Analyze
    info!("Step 2/3: Analyzing sales...");
    let options = AnalysisOptions::default();
    let sellers = analyze_value(&raw, Some(&options)).context("Sales analysis failed")?;

    debug!("Top 3 sellers:");
    for (i, seller) in sellers.iter().take(3).enumerate() {
        debug!(
            "  {}. {} profit {:.2} bonus {:.2}",
            i + 1,
            seller.name,
            seller.profit,
            seller.bonus
        );
    }

    // Step 3: Write report
    info!("Step 3/3: Writing report...");
    let report = Report::new(sellers);
    write_report(&report, &args.output_json).context("Failed to write report JSON")?;

    info!("✓ Report written to: {}", args.output_json.display());

    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("SALES SUMMARY");
        println!("{}", "=".repeat(80));
        println!("Sellers: {}", report.seller_count);
        println!(
            "Sales:   {}",
            report.sellers.iter().map(|s| s.sales_count).sum::<u64>()
        );
        println!("\n{}", generate_text_summary(&report.sellers, args.summary_rows));
        println!("{}", "=".repeat(80));
    }

    let elapsed = start_time.elapsed();
    info!("Analysis completed in {:.2}s", elapsed.as_secs_f64());

    Ok(report)
}

/// Validate analyze arguments
///
/// **Public** - can be called before execute_analyze for early validation
pub fn validate_args(args: &AnalyzeArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if !args.input.is_file() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    validate_path(&args.output_json).context("Invalid output path")?;

    if args.summary_rows == 0 {
        anyhow::bail!("summary rows must be greater than 0");
    }

    if args.summary_rows > MAX_SUMMARY_ROWS {
        anyhow::bail!("summary rows is too large (max {})", MAX_SUMMARY_ROWS);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn dataset_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        let dataset = json!({
            "sellers": [
                { "id": "seller_1", "first_name": "Ivan", "last_name": "Ivanov" },
                { "id": "seller_2", "first_name": "Olga", "last_name": "Smirnova" }
            ],
            "customers": [{ "id": "customer_1" }],
            "products": [{ "sku": "SKU_001", "purchase_price": 50.0 }],
            "purchase_records": [
                {
                    "seller_id": "seller_2",
                    "total_amount": 180.0,
                    "items": [{ "sku": "SKU_001", "quantity": 2, "sale_price": 100.0, "discount": 10 }]
                }
            ]
        });
        write!(file, "{}", dataset).unwrap();
        file
    }

    #[test]
    fn test_validate_args_valid() {
        let input = dataset_file();
        let args = AnalyzeArgs {
            input: input.path().to_path_buf(),
            ..Default::default()
        };

        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_args_missing_input() {
        let args = AnalyzeArgs {
            input: PathBuf::from("/nonexistent/dataset.json"),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_summary_rows_zero() {
        let input = dataset_file();
        let args = AnalyzeArgs {
            input: input.path().to_path_buf(),
            summary_rows: 0,
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_output_is_directory() {
        let input = dataset_file();
        let dir = tempfile::tempdir().unwrap();
        let args = AnalyzeArgs {
            input: input.path().to_path_buf(),
            output_json: dir.path().to_path_buf(),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_execute_analyze_writes_report() {
        let input = dataset_file();
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("report.json");

        let report = execute_analyze(AnalyzeArgs {
            input: input.path().to_path_buf(),
            output_json: output.clone(),
            ..Default::default()
        })
        .unwrap();

        assert!(output.exists());
        assert_eq!(report.seller_count, 2);
        assert_eq!(report.sellers[0].seller_id, "seller_2");
        assert_eq!(report.sellers[0].bonus, 12.0);
    }
}
