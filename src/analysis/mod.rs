//! Sales analysis pipeline.
//!
//! Four stages run in order on in-memory data:
//! - Validator: dataset shape and options
//! - Aggregator: per-seller revenue, profit, sales count, quantities
//! - Ranker: profit order, bonus and top products
//! - Formatter: rounding and projection to `SellerReport`

pub mod aggregator;
pub mod formatter;
pub mod ranker;
pub mod strategy;
pub mod validator;

// Re-export main types and functions
pub use aggregator::{aggregate, item_profit, item_revenue, SellerStats};
pub use formatter::{format_reports, round_money};
pub use ranker::{calculate_bonus, rank_sellers, sort_by_profit, top_products};
pub use strategy::{
    AnalysisOptions, BonusByProfit, BonusCalculator, OptionEntry, RevenueCalculator, SimpleRevenue,
};
pub use validator::{validate_dataset, validate_dataset_value, validate_options};

use crate::dataset::{parse_dataset, Dataset};
use crate::output::schema::SellerReport;
use crate::utils::error::AnalysisError;
use log::{debug, info};

/// Analyze a typed dataset
///
/// **Public** - main entry point of the library
///
/// # Returns
/// One report per seller, ordered by profit (descending)
///
/// # Errors
/// * `AnalysisError::InvalidData` - dataset missing or a collection empty
/// * `AnalysisError::InvalidConfig` - options missing, not exactly two
///   entries, or an entry that is not a strategy
/// * `AnalysisError::DataIntegrity` - unknown or duplicate seller/sku
///
/// # Example
/// ```ignore
/// let dataset = read_dataset("sales.json")?;
/// let reports = analyze(Some(&dataset), Some(&AnalysisOptions::default()))?;
/// ```
pub fn analyze(
    dataset: Option<&Dataset>,
    options: Option<&AnalysisOptions>,
) -> Result<Vec<SellerReport>, AnalysisError> {
    let Some(dataset) = dataset else {
        return Err(AnalysisError::InvalidData("dataset is missing".to_string()));
    };
    validate_dataset(dataset)?;
    validate_options(options)?;

    info!(
        "Analyzing {} purchase records for {} sellers",
        dataset.purchase_records.len(),
        dataset.sellers.len()
    );

    let mut stats = aggregate(dataset)?;
    rank_sellers(&mut stats);

    if let Some(leader) = stats.first() {
        debug!(
            "Top seller: {} ({}) profit {:.2}",
            leader.name, leader.seller_id, leader.profit
        );
    }

    Ok(format_reports(stats))
}

/// Analyze raw dataset JSON
///
/// **Public** - untyped entry point; shape problems in the JSON surface as
/// `InvalidData` before the options are checked
pub fn analyze_value(
    raw: &serde_json::Value,
    options: Option<&AnalysisOptions>,
) -> Result<Vec<SellerReport>, AnalysisError> {
    let dataset = parse_dataset(raw)?;
    analyze(Some(&dataset), options)
}
