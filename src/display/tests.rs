//! Tests for display module

use super::*;
use crate::records::{OrderRecord, ProductRecord, Record, UserRecord};
use pretty_assertions::assert_eq;
use test_case::test_case;

fn canonical_records() -> Vec<Record> {
    vec![
        UserRecord {
            name: "hakan gedek".to_string(),
            email: "hgedek@pm.me".to_string(),
            id: 1,
        }
        .into(),
        ProductRecord {
            name: "thinkpad p3".to_string(),
            price: 888.0,
            stock: 33,
            id: 31,
        }
        .into(),
        OrderRecord {
            products: vec![31],
            total: 888.0,
            id: 21,
            user: 1,
        }
        .into(),
    ]
}

#[test]
fn test_user_line() {
    let record = &canonical_records()[0];
    assert_eq!(
        record.to_string(),
        "User => Id: 1 Name: hakan gedek Email: hgedek@pm.me"
    );
}

#[test]
fn test_product_line() {
    let record = &canonical_records()[1];
    assert_eq!(
        record.to_string(),
        "Product => Id: 31 Name: thinkpad p3 Price: 888 Stock: 33"
    );
}

#[test]
fn test_order_line() {
    let record = &canonical_records()[2];
    assert_eq!(
        record.to_string(),
        "Order => Id: 21 User: 1 Total: 888 Products: 31"
    );
}

#[test]
fn test_default_product_line() {
    let record = Record::from(ProductRecord::default());
    assert_eq!(
        record.to_string(),
        "Product => Id: -1 Name:  Price: 0 Stock: 0"
    );
}

#[test]
fn test_fractional_total() {
    let order = OrderRecord {
        products: vec![1, 2],
        total: 19.99,
        id: 3,
        user: 4,
    };
    assert_eq!(
        order.to_string(),
        "Order => Id: 3 User: 4 Total: 19.99 Products: 1,2"
    );
}

#[test_case(&[], "" ; "empty")]
#[test_case(&[31], "31" ; "single")]
#[test_case(&[31, 32, 33], "31,32,33" ; "several")]
#[test_case(&[-1, 0], "-1,0" ; "negative")]
fn test_join_products(products: &[i32], expected: &str) {
    assert_eq!(join_products(products), expected);
}

#[test]
fn test_render_text_keeps_order() {
    let lines = render_text(&canonical_records());
    assert_eq!(
        lines,
        vec![
            "User => Id: 1 Name: hakan gedek Email: hgedek@pm.me".to_string(),
            "Product => Id: 31 Name: thinkpad p3 Price: 888 Stock: 33".to_string(),
            "Order => Id: 21 User: 1 Total: 888 Products: 31".to_string(),
        ]
    );
}

#[test]
fn test_write_records_text() {
    let mut out = Vec::new();
    write_records(&mut out, &canonical_records(), OutputFormat::Text).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 3);
    assert!(text.ends_with("Products: 31\n"));
}

#[test]
fn test_write_records_json() {
    let mut out = Vec::new();
    write_records(&mut out, &canonical_records(), OutputFormat::Json).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<serde_json::Value> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["kind"], "user");
    assert_eq!(lines[0]["record"]["email"], "hgedek@pm.me");
    assert_eq!(lines[2]["kind"], "order");
    assert_eq!(lines[2]["record"]["products"], serde_json::json!([31]));
}

#[test]
fn test_write_records_empty() {
    let mut out = Vec::new();
    write_records(&mut out, &[], OutputFormat::Text).unwrap();
    assert!(out.is_empty());
}
