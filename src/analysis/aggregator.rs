//! Per-seller aggregation of purchase records.
//!
//! One pass over the purchase records builds a `SellerStats` for every
//! seller: revenue from record totals, profit from item lines, sales count
//! and cumulative quantity per sku.

use crate::dataset::{Dataset, Product, PurchaseItem};
use crate::output::schema::TopProduct;
use crate::utils::error::AnalysisError;
use log::{debug, warn};
use std::collections::HashMap;

/// Running statistics for one seller
///
/// **Public** - produced here, ranked by `ranker`, consumed by `formatter`
#[derive(Debug, Clone, PartialEq)]
pub struct SellerStats {
    pub seller_id: String,
    pub name: String,

    /// Sum of `total_amount` over the seller's records
    pub revenue: f64,

    /// Sum of item revenue minus cost basis
    pub profit: f64,

    pub sales_count: u64,

    /// sku -> cumulative quantity
    pub products_sold: HashMap<String, u64>,

    /// Assigned by the ranker
    pub bonus: f64,

    /// Assigned by the ranker
    pub top_products: Vec<TopProduct>,
}

impl SellerStats {
    /// Zeroed statistics for a seller
    pub fn new(seller_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            seller_id: seller_id.into(),
            name: name.into(),
            revenue: 0.0,
            profit: 0.0,
            sales_count: 0,
            products_sold: HashMap::new(),
            bonus: 0.0,
            top_products: Vec::new(),
        }
    }

    /// Account one purchase record's total
    fn record_sale(&mut self, total_amount: f64) {
        self.sales_count += 1;
        self.revenue += total_amount;
    }

    /// Account one item line
    ///
    /// Fails when the cumulative quantity for the sku no longer fits in a `u64`.
    fn record_item(&mut self, item: &PurchaseItem, product: &Product) -> Result<(), AnalysisError> {
        let sold = self.products_sold.entry(item.sku.clone()).or_insert(0);
        *sold = sold.checked_add(item.quantity).ok_or_else(|| {
            AnalysisError::DataIntegrity(format!(
                "quantity of sku '{}' sold by seller '{}' overflows",
                item.sku, self.seller_id
            ))
        })?;

        self.profit += item_profit(item, product);
        Ok(())
    }
}

/// Revenue of a single item line
///
/// **Public** - `sale_price * quantity * (1 - discount / 100)`, no clamping
pub fn item_revenue(item: &PurchaseItem) -> f64 {
    let discount = 1.0 - item.discount / 100.0;
    item.sale_price * item.quantity as f64 * discount
}

/// Profit of a single item line: revenue minus cost basis
///
/// **Public** - used by aggregation and tests
pub fn item_profit(item: &PurchaseItem, product: &Product) -> f64 {
    let cost = product.purchase_price * item.quantity as f64;
    item_revenue(item) - cost
}

/// Build per-seller statistics from a dataset
///
/// **Public** - main entry point for aggregation
///
/// # Returns
/// One `SellerStats` per seller, in input seller order
///
/// # Errors
/// * `AnalysisError::DataIntegrity` - duplicate seller id or sku, or a record
///   referencing an unknown seller or sku
pub fn aggregate(dataset: &Dataset) -> Result<Vec<SellerStats>, AnalysisError> {
    debug!(
        "Aggregating {} purchase records across {} sellers",
        dataset.purchase_records.len(),
        dataset.sellers.len()
    );

    let mut stats: Vec<SellerStats> = dataset
        .sellers
        .iter()
        .map(|seller| SellerStats::new(seller.id.as_str(), seller.full_name()))
        .collect();

    let seller_index = index_sellers(dataset)?;
    let product_index = index_products(dataset)?;

    for (position, record) in dataset.purchase_records.iter().enumerate() {
        let &slot = seller_index.get(record.seller_id.as_str()).ok_or_else(|| {
            AnalysisError::DataIntegrity(format!(
                "purchase record #{} references unknown seller '{}'",
                position, record.seller_id
            ))
        })?;
        let seller = &mut stats[slot];

        seller.record_sale(record.total_amount);

        for item in &record.items {
            let product = product_index.get(item.sku.as_str()).ok_or_else(|| {
                AnalysisError::DataIntegrity(format!(
                    "purchase record #{} references unknown sku '{}'",
                    position, item.sku
                ))
            })?;

            if !(0.0..=100.0).contains(&item.discount) {
                warn!(
                    "Discount {} on sku '{}' is outside 0-100",
                    item.discount, item.sku
                );
            }

            seller.record_item(item, product)?;
        }
    }

    for seller in stats.iter().filter(|s| s.sales_count == 0) {
        debug!("Seller '{}' has no purchase records", seller.seller_id);
    }

    Ok(stats)
}

/// Map seller id -> position in seller order
///
/// **Private** - lookup for aggregation
fn index_sellers(dataset: &Dataset) -> Result<HashMap<&str, usize>, AnalysisError> {
    let mut index = HashMap::with_capacity(dataset.sellers.len());

    for (position, seller) in dataset.sellers.iter().enumerate() {
        if index.insert(seller.id.as_str(), position).is_some() {
            return Err(AnalysisError::DataIntegrity(format!(
                "duplicate seller id '{}'",
                seller.id
            )));
        }
    }

    Ok(index)
}

/// Map sku -> product card
///
/// **Private** - lookup for aggregation
fn index_products(dataset: &Dataset) -> Result<HashMap<&str, &Product>, AnalysisError> {
    let mut index = HashMap::with_capacity(dataset.products.len());

    for product in &dataset.products {
        if index.insert(product.sku.as_str(), product).is_some() {
            return Err(AnalysisError::DataIntegrity(format!(
                "duplicate product sku '{}'",
                product.sku
            )));
        }
    }

    Ok(index)
}
