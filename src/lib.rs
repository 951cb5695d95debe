//! Seller Analytics
//!
//! Per-seller sales analytics computed from a batch of purchase records:
//! revenue, profit, sales count, top products and a rank-based bonus.
//!
//! This crate provides the core implementation for the
//! `seller-report` CLI tool.
//!
//! ## Getting Started
//!
//! ```ignore
//! use seller_analytics::analysis::{analyze, AnalysisOptions};
//! use seller_analytics::dataset::read_dataset;
//!
//! let dataset = read_dataset("sales.json")?;
//! let reports = analyze(Some(&dataset), Some(&AnalysisOptions::default()))?;
//! ```

pub mod analysis;
pub mod commands;
pub mod dataset;
pub mod output;
pub mod utils;

pub use analysis::{analyze, analyze_value, AnalysisOptions};
pub use output::{Report, SellerReport, TopProduct};
pub use utils::error::AnalysisError;
