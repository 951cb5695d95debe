use crate::output::read_report;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::{Context, Result};
use std::path::Path;

/// Validate a report JSON file
pub fn validate_report_file(file_path: &Path) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(file_path)
        .with_context(|| format!("Failed to read report {}", file_path.display()))?;

    if report.seller_count != report.sellers.len() {
        anyhow::bail!(
            "seller_count is {} but the report lists {} sellers",
            report.seller_count,
            report.sellers.len()
        );
    }

    if report
        .sellers
        .windows(2)
        .any(|pair| pair[0].profit < pair[1].profit)
    {
        anyhow::bail!("sellers are not ordered by profit");
    }

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Generated: {}", report.generated_at);
    println!("  Sellers: {}", report.seller_count);
    println!(
        "  Bonus pool: {:.2}",
        report.sellers.iter().map(|s| s.bonus).sum::<f64>()
    );

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Seller Analytics Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string          - Schema version (e.g., '1.0.0')");
        println!("  generated_at: string     - RFC 3339 timestamp");
        println!("  seller_count: number     - Number of sellers");
        println!("  sellers: array           - Sellers ranked by profit (descending)");
        println!("    seller_id: string      - Seller identifier");
        println!("    name: string           - First and last name");
        println!("    revenue: number        - Sum of record totals (2 decimals)");
        println!("    profit: number         - Revenue after discount minus cost (2 decimals)");
        println!("    sales_count: number    - Purchase records attributed");
        println!("    top_products: array    - Up to 10 {{sku: quantity}} entries");
        println!("    bonus: number          - Rank-based bonus (2 decimals)");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Seller Analytics v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Per-seller revenue, profit, top product and bonus reports.");
}
