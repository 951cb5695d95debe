//! Output JSON schema definitions for seller reports.
//!
//! This module defines the structure of JSON files we write to disk.
//! Schema is versioned to allow future evolution.

use crate::utils::config::SCHEMA_VERSION;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level report structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Schema version for compatibility checking
    pub version: String,

    /// Timestamp when the report was generated (RFC 3339)
    pub generated_at: String,

    /// Number of sellers in the report
    pub seller_count: usize,

    /// Seller reports, ranked by profit (descending)
    pub sellers: Vec<SellerReport>,
}

impl Report {
    /// Wrap ranked seller reports in a versioned envelope
    pub fn new(sellers: Vec<SellerReport>) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            seller_count: sellers.len(),
            sellers,
        }
    }
}

/// Public per-seller result of an analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerReport {
    pub seller_id: String,

    /// "First Last"
    pub name: String,

    /// Sum of record totals, rounded to 2 decimals
    pub revenue: f64,

    /// Revenue after discounts minus cost basis, rounded to 2 decimals
    pub profit: f64,

    /// Number of purchase records attributed to the seller
    pub sales_count: u64,

    /// Highest-quantity products, at most 10
    pub top_products: Vec<TopProduct>,

    /// Rank-based bonus, rounded to 2 decimals
    pub bonus: f64,
}

/// A product sold by a seller with its cumulative quantity
///
/// Serialized as a single-entry object: `{"SKU_001": 12}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "BTreeMap<String, u64>", try_from = "BTreeMap<String, u64>")]
pub struct TopProduct {
    pub sku: String,
    pub quantity: u64,
}

impl TopProduct {
    pub fn new(sku: impl Into<String>, quantity: u64) -> Self {
        Self {
            sku: sku.into(),
            quantity,
        }
    }
}

impl From<TopProduct> for BTreeMap<String, u64> {
    fn from(product: TopProduct) -> Self {
        BTreeMap::from([(product.sku, product.quantity)])
    }
}

impl TryFrom<BTreeMap<String, u64>> for TopProduct {
    type Error = String;

    fn try_from(map: BTreeMap<String, u64>) -> Result<Self, Self::Error> {
        if map.len() != 1 {
            return Err(format!(
                "top product entry must have exactly one sku, found {}",
                map.len()
            ));
        }

        let (sku, quantity) = map
            .into_iter()
            .next()
            .ok_or_else(|| "empty top product entry".to_string())?;

        Ok(Self { sku, quantity })
    }
}
