use pretty_assertions::assert_eq;
use seller_analytics::analysis::{analyze_value, AnalysisOptions};
use seller_analytics::output::{
    generate_text_summary, read_report, report_to_string, validate_path, write_report, Report,
};
use serde_json::json;
use std::path::Path;
use tempfile::NamedTempFile;

fn create_test_report() -> Report {
    let raw = json!({
        "sellers": [
            { "id": "seller_1", "first_name": "Ivan", "last_name": "Ivanov" },
            { "id": "seller_2", "first_name": "Olga", "last_name": "Smirnova" }
        ],
        "customers": [{ "id": "customer_1" }],
        "products": [{ "sku": "SKU_001", "purchase_price": 50.0 }],
        "purchase_records": [
            {
                "seller_id": "seller_1",
                "total_amount": 180.0,
                "items": [{ "sku": "SKU_001", "quantity": 2, "sale_price": 100.0, "discount": 10 }]
            },
            {
                "seller_id": "seller_2",
                "total_amount": 60.0,
                "items": [{ "sku": "SKU_001", "quantity": 1, "sale_price": 60.0, "discount": 0 }]
            }
        ]
    });

    let sellers = analyze_value(&raw, Some(&AnalysisOptions::default())).unwrap();
    Report::new(sellers)
}

#[test]
fn test_write_and_read_report() {
    let report = create_test_report();
    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    write_report(&report, path).unwrap();
    let loaded = read_report(path).unwrap();

    assert_eq!(loaded, report);
}

#[test]
fn test_report_json_shape() {
    let report = create_test_report();
    let value: serde_json::Value =
        serde_json::from_str(&report_to_string(&report).unwrap()).unwrap();

    assert_eq!(value["seller_count"], 2);
    assert_eq!(
        value["sellers"][0],
        json!({
            "seller_id": "seller_1",
            "name": "Ivan Ivanov",
            "revenue": 180.0,
            "profit": 80.0,
            "sales_count": 1,
            "top_products": [{ "SKU_001": 2 }],
            "bonus": 12.0
        })
    );
    assert_eq!(value["sellers"][1]["bonus"], 1.0);
}

#[test]
fn test_validate_output_path_empty() {
    let result = validate_path(Path::new(""));
    assert!(result.is_err());
}

#[test]
fn test_read_report_invalid_json() {
    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), "{\"version\": 1").unwrap();

    assert!(read_report(temp_file.path()).is_err());
}

#[test]
fn test_text_summary_lists_ranked_sellers() {
    let report = create_test_report();
    let summary = generate_text_summary(&report.sellers, 10);

    let ivan = summary.find("Ivan Ivanov").unwrap();
    let olga = summary.find("Olga Smirnova").unwrap();
    assert!(ivan < olga);
    assert!(summary.contains("SKU_001 x2"));
    assert!(summary.contains("Total bonus pool: 13.00"));
}
