//! Profit ranking, bonus assignment and top product lists.

use super::aggregator::SellerStats;
use crate::output::schema::TopProduct;
use crate::utils::config::{
    BONUS_RATE_DEFAULT, BONUS_RATE_FIRST, BONUS_RATE_RUNNER_UP, TOP_PRODUCTS_LIMIT,
};
use log::debug;
use std::collections::HashMap;

/// Rank sellers by profit and assign bonus and top products
///
/// **Public** - main entry point for ranking
///
/// Sellers end up sorted by profit, highest first. Equal profits keep
/// their input order.
pub fn rank_sellers(stats: &mut [SellerStats]) {
    sort_by_profit(stats);

    let total = stats.len();
    for (index, seller) in stats.iter_mut().enumerate() {
        seller.bonus = calculate_bonus(index, total, seller.profit);
        seller.top_products = top_products(&seller.products_sold, TOP_PRODUCTS_LIMIT);
    }

    debug!("Ranked {} sellers", total);
}

/// Stable sort by profit, descending
///
/// **Public** - exposed for tests and custom pipelines
pub fn sort_by_profit(stats: &mut [SellerStats]) {
    stats.sort_by(|a, b| b.profit.total_cmp(&a.profit));
}

/// Bonus for the seller at zero-based `index` out of `total`
///
/// **Public** - the fixed bonus policy
///
/// Conditions are checked in order and the first match wins, so a single
/// seller is both first and last and still gets the first-place rate.
pub fn calculate_bonus(index: usize, total: usize, profit: f64) -> f64 {
    if index == 0 {
        profit * BONUS_RATE_FIRST
    } else if index == 1 || index == 2 {
        profit * BONUS_RATE_RUNNER_UP
    } else if index + 1 == total {
        0.0
    } else {
        profit * BONUS_RATE_DEFAULT
    }
}

/// Highest-quantity products, at most `limit`
///
/// **Public** - ties are broken by sku ascending
pub fn top_products(products_sold: &HashMap<String, u64>, limit: usize) -> Vec<TopProduct> {
    let mut products: Vec<TopProduct> = products_sold
        .iter()
        .map(|(sku, &quantity)| TopProduct::new(sku.as_str(), quantity))
        .collect();

    products.sort_by(|a, b| b.quantity.cmp(&a.quantity).then_with(|| a.sku.cmp(&b.sku)));
    products.truncate(limit);
    products
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seller(id: &str, profit: f64) -> SellerStats {
        let mut stats = SellerStats::new(id, id);
        stats.profit = profit;
        stats
    }

    #[test]
    fn test_bonus_policy_five_sellers() {
        let multipliers: Vec<f64> = (0..5).map(|i| calculate_bonus(i, 5, 1.0)).collect();
        assert_eq!(multipliers, vec![0.15, 0.10, 0.10, 0.05, 0.0]);
    }

    #[test]
    fn test_bonus_single_seller_is_first_not_last() {
        assert!((calculate_bonus(0, 1, 1000.0) - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_bonus_small_totals_prefer_earlier_rules() {
        // Index 1 and 2 are last place here but the runner-up rule comes first
        assert_eq!(calculate_bonus(1, 2, 100.0), 10.0);
        assert_eq!(calculate_bonus(2, 3, 100.0), 10.0);
        assert_eq!(calculate_bonus(3, 4, 100.0), 0.0);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let mut stats = vec![
            seller("a", 10.0),
            seller("b", 30.0),
            seller("c", 10.0),
            seller("d", 30.0),
        ];

        sort_by_profit(&mut stats);

        let order: Vec<&str> = stats.iter().map(|s| s.seller_id.as_str()).collect();
        assert_eq!(order, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_negative_profit_ranks_last() {
        let mut stats = vec![seller("loss", -50.0), seller("gain", 5.0), seller("flat", 0.0)];

        rank_sellers(&mut stats);

        assert_eq!(stats[0].seller_id, "gain");
        assert_eq!(stats[2].seller_id, "loss");
        assert_eq!(stats[2].bonus, -5.0);
    }

    #[test]
    fn test_top_products_limit_and_order() {
        let sold: HashMap<String, u64> = (1..=12)
            .map(|n| (format!("SKU_{:03}", n), n as u64 * 3))
            .collect();

        let top = top_products(&sold, TOP_PRODUCTS_LIMIT);

        assert_eq!(top.len(), 10);
        assert_eq!(top[0], TopProduct::new("SKU_012", 36));
        assert_eq!(top[9], TopProduct::new("SKU_003", 9));
        assert!(top.windows(2).all(|w| w[0].quantity >= w[1].quantity));
    }

    #[test]
    fn test_top_products_tie_break_by_sku() {
        let sold: HashMap<String, u64> = [("SKU_B", 5), ("SKU_A", 5), ("SKU_C", 7)]
            .into_iter()
            .map(|(sku, qty)| (sku.to_string(), qty))
            .collect();

        let top = top_products(&sold, TOP_PRODUCTS_LIMIT);

        let skus: Vec<&str> = top.iter().map(|p| p.sku.as_str()).collect();
        assert_eq!(skus, vec!["SKU_C", "SKU_A", "SKU_B"]);
    }
}
