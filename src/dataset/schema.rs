//! Input dataset schema.
//!
//! Mirrors the JSON layout of a sales export. Fields the analysis does not
//! read are still deserialized when present so a dataset round-trips
//! without silently losing information.

use serde::{Deserialize, Serialize};

/// Full input dataset for one analysis run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub sellers: Vec<Seller>,

    /// Accepted for compatibility with sales exports; not read by the analysis
    pub customers: Vec<Customer>,

    pub products: Vec<Product>,

    pub purchase_records: Vec<PurchaseRecord>,
}

/// A seller generating sales
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

impl Seller {
    /// Display name: first and last name joined by one space
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A customer record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// A product card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product key
    pub sku: String,

    /// Cost basis per unit
    pub purchase_price: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// List price; item lines carry the price actually charged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<f64>,
}

/// One sale transaction attributed to a seller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub seller_id: String,

    /// Pre-computed revenue of the whole record
    pub total_amount: f64,

    pub items: Vec<PurchaseItem>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_discount: Option<f64>,
}

/// A line within a purchase record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseItem {
    pub sku: String,
    pub quantity: u64,
    pub sale_price: f64,

    /// Discount percentage, 0 to 100
    pub discount: f64,
}
