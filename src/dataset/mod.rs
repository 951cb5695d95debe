//! Input dataset schema and loading.
//!
//! This module handles:
//! - Typed records for sellers, customers, products and purchases
//! - Reading dataset JSON from disk
//! - Shape-checking raw JSON before deserialization

pub mod loader;
pub mod schema;

// Re-export main types
pub use loader::{parse_dataset, read_dataset, read_dataset_value};
pub use schema::{Customer, Dataset, Product, PurchaseItem, PurchaseRecord, Seller};
