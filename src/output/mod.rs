//! Report schema and writers.
//!
//! This module handles:
//! - The versioned report schema
//! - JSON report files (write and read back)
//! - Text summaries for the terminal

pub mod json;
pub mod schema;
pub mod summary;

// Re-export main functions
pub use json::{read_report, report_to_string, validate_path, write_report};
pub use schema::{Report, SellerReport, TopProduct};
pub use summary::generate_text_summary;
