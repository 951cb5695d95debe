//! Final projection of ranked statistics into public reports.

use super::aggregator::SellerStats;
use crate::output::schema::SellerReport;
use crate::utils::config::ROUNDING_SCALE;

/// Round a money value to two decimals, halves away from zero
///
/// **Public** - idempotent: rounding an already rounded value is a no-op
pub fn round_money(value: f64) -> f64 {
    (value * ROUNDING_SCALE).round() / ROUNDING_SCALE
}

/// Project ranked statistics into reports, preserving order
///
/// **Public** - last pipeline stage
pub fn format_reports(stats: Vec<SellerStats>) -> Vec<SellerReport> {
    stats.into_iter().map(to_report).collect()
}

fn to_report(stats: SellerStats) -> SellerReport {
    SellerReport {
        seller_id: stats.seller_id,
        name: stats.name,
        revenue: round_money(stats.revenue),
        profit: round_money(stats.profit),
        sales_count: stats.sales_count,
        top_products: stats.top_products,
        bonus: round_money(stats.bonus),
    }
}
