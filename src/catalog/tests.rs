use super::mock::MockCatalog;
use super::postgrest::PostgrestCatalog;
use super::types::ItemRecord;
use super::*;
use serde_json::json;

fn record(id: &str, brand: &str) -> ItemRecord {
    ItemRecord {
        item_id: id.to_string(),
        brand: Some(brand.to_string()),
        name: format!("item {id}"),
        ..ItemRecord::default()
    }
}

fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_item_record_from_row() {
    let row = json!({
        "id": 101,
        "brand": "glowlab",
        "name": "Hydra Cream",
        "category_major": "skincare",
        "category_middle": "moisturizer",
        "category_small": "cream",
        "price_final": 32000.0,
        "discount_rate": 15.0,
        "review_score": 4.7,
        "review_count": 812,
        "keywords": "{보습,수분}"
    });
    let record: ItemRecord = serde_json::from_value(row).unwrap();
    assert_eq!(record.item_id, "101");
    assert_eq!(record.brand.as_deref(), Some("glowlab"));
    assert_eq!(record.discount_rate, Some(15.0));
    assert_eq!(record.keywords, vec!["보습", "수분"]);
}

#[test]
fn test_item_record_minimal_row() {
    let row = json!({ "id": "p-1", "name": "Bare" });
    let record: ItemRecord = serde_json::from_value(row).unwrap();
    assert_eq!(record.item_id, "p-1");
    assert!(record.brand.is_none());
    assert!(record.keywords.is_empty());
}

#[tokio::test]
async fn test_mock_fetch_records_applies_allowlist() {
    let catalog = MockCatalog::new();
    catalog.insert_record(record("a", "glowlab"));
    catalog.insert_record(record("b", "otherbrand"));

    let all = catalog.fetch_records(&ids(&["a", "b"]), None).await.unwrap();
    assert_eq!(all.len(), 2);

    let filtered = catalog
        .fetch_records(&ids(&["a", "b"]), Some(&ids(&["glowlab"])))
        .await
        .unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].item_id, "a");

    assert_eq!(catalog.record_call_count(), 2);
}

#[tokio::test]
async fn test_mock_fetch_content_skips_missing_ids() {
    let catalog = MockCatalog::new();
    catalog.insert_content("a", "보습 크림");

    let content = catalog.fetch_content(&ids(&["a", "b"])).await.unwrap();
    assert_eq!(content.len(), 1);
    assert_eq!(content["a"], "보습 크림");
    assert_eq!(catalog.content_call_count(), 1);
}

#[tokio::test]
async fn test_mock_fetch_profile_not_found() {
    let catalog = MockCatalog::new();
    assert!(catalog.fetch_profile("missing").await.unwrap().is_none());
}

#[test]
fn test_postgrest_in_filter_quotes_values() {
    let filter = PostgrestCatalog::in_filter(&ids(&["a", "b,c"]));
    assert_eq!(filter, "in.(\"a\",\"b,c\")");
}

#[test]
fn test_postgrest_eq_value_escapes_delimiters() {
    assert_eq!(PostgrestCatalog::eq_value("plain-id_1"), "plain-id_1");
    assert_eq!(PostgrestCatalog::eq_value("a&b"), "a%26b");
    assert_eq!(PostgrestCatalog::eq_value("a,b=c"), "a%2Cb%3Dc");
    assert_eq!(PostgrestCatalog::eq_value("a b"), "a%20b");
}
