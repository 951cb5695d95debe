//! Plain-text ranking table for terminal output.

use super::schema::SellerReport;

const NAME_WIDTH: usize = 28;

/// Render the top `max_rows` sellers as a text table
///
/// **Public** - used by the analyze command's `--summary` flag
pub fn generate_text_summary(sellers: &[SellerReport], max_rows: usize) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "  {:>4}  {:<width$}  {:>12}  {:>12}  {:>6}  {:>10}  {}",
        "RANK",
        "SELLER",
        "REVENUE",
        "PROFIT",
        "SALES",
        "BONUS",
        "TOP PRODUCT",
        width = NAME_WIDTH
    ));
    lines.push(format!("  {}", "-".repeat(NAME_WIDTH + 76)));

    for (rank, seller) in sellers.iter().take(max_rows).enumerate() {
        let display_name = truncate(&seller.name, NAME_WIDTH);
        let top = seller
            .top_products
            .first()
            .map(|p| format!("{} x{}", p.sku, p.quantity))
            .unwrap_or_else(|| "-".to_string());

        lines.push(format!(
            "  {:>4}  {:<width$}  {:>12.2}  {:>12.2}  {:>6}  {:>10.2}  {}",
            rank + 1,
            display_name,
            seller.revenue,
            seller.profit,
            seller.sales_count,
            seller.bonus,
            top,
            width = NAME_WIDTH
        ));
    }

    if sellers.len() > max_rows {
        lines.push(format!("  ... {} more sellers", sellers.len() - max_rows));
    }

    let total_bonus: f64 = sellers.iter().map(|s| s.bonus).sum();
    lines.push(String::new());
    lines.push(format!("  Total bonus pool: {:.2}", total_bonus));

    lines.join("\n")
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let head: String = text.chars().take(width - 3).collect();
        format!("{}...", head)
    }
}
