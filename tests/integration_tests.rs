//! Integration tests
//!
//! Tests the full end-to-end flow: JSON file → typed records → console lines

use clap::Parser;
use dto_visit::cli::{Cli, Runner};
use dto_visit::decode::{decode, decode_as, extract_documents, parse_document};
use dto_visit::display::render_text;
use dto_visit::records::{OrderRecord, ProductRecord, Record, RecordKind, UserRecord};
use dto_visit::samples::{demo_documents, sample_document};
use dto_visit::Error;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::fs;
use tempfile::tempdir;

fn run_cli(args: &[&str]) -> dto_visit::Result<String> {
    let mut argv = vec!["dto-visit"];
    argv.extend_from_slice(args);

    let mut out = Vec::new();
    Runner::new(Cli::try_parse_from(argv).unwrap())?.run(&mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

// ============================================================================
// Canonical Scenarios
// ============================================================================

#[test]
fn test_canonical_user() {
    let doc = sample_document(RecordKind::User).unwrap();
    let user: UserRecord = decode(&doc).unwrap();

    assert_eq!(
        user,
        UserRecord {
            name: "hakan gedek".to_string(),
            email: "hgedek@pm.me".to_string(),
            id: 1,
        }
    );
}

#[test]
fn test_canonical_product() {
    let doc = sample_document(RecordKind::Product).unwrap();
    let product: ProductRecord = decode(&doc).unwrap();

    assert_eq!(
        product,
        ProductRecord {
            name: "thinkpad p3".to_string(),
            price: 888.0,
            stock: 33,
            id: 31,
        }
    );
}

#[test]
fn test_canonical_order_and_line() {
    let doc = sample_document(RecordKind::Order).unwrap();
    let order: OrderRecord = decode(&doc).unwrap();

    assert_eq!(order.products, vec![31]);
    assert_eq!(order.total, 888.0);
    assert_eq!(
        Record::from(order).to_string(),
        "Order => Id: 21 User: 1 Total: 888 Products: 31"
    );
}

#[test]
fn test_empty_document_policies() {
    let empty = json!({});

    let product: ProductRecord = decode(&empty).unwrap();
    assert_eq!(product, ProductRecord::default());

    assert!(matches!(
        decode::<UserRecord>(&empty),
        Err(Error::FieldMissing { kind: RecordKind::User, .. })
    ));
    assert!(matches!(
        decode::<OrderRecord>(&empty),
        Err(Error::FieldMissing { kind: RecordKind::Order, .. })
    ));
}

#[test]
fn test_samples_round_trip() {
    for tagged in demo_documents().unwrap() {
        let record = decode_as(tagged.kind, &tagged.document).unwrap();
        let again = decode_as(record.kind(), &record.to_document()).unwrap();
        assert_eq!(again, record);
    }
}

// ============================================================================
// Mixed Sequences
// ============================================================================

#[test]
fn test_mixed_sequence_display() {
    let body = r#"{
        "users": [{"name": "ada", "email": "ada@example.com", "id": 7}],
        "products": [{"name": "keyboard", "price": 49.5, "stock": 3, "id": 100}, {"id": "oops"}],
        "orders": [{"products": [100, 101], "total": 99, "id": 500, "user": 7}]
    }"#;
    let value = parse_document(body).unwrap();

    let mut records = Vec::new();
    for (kind, path) in [
        (RecordKind::User, "users"),
        (RecordKind::Product, "products"),
        (RecordKind::Order, "orders"),
    ] {
        for doc in extract_documents(&value, Some(path)).unwrap() {
            records.push(decode_as(kind, &doc).unwrap());
        }
    }

    assert_eq!(
        render_text(&records),
        vec![
            "User => Id: 7 Name: ada Email: ada@example.com",
            "Product => Id: 100 Name: keyboard Price: 49.5 Stock: 3",
            "Product => Id: -1 Name:  Price: 0 Stock: 0",
            "Order => Id: 500 User: 7 Total: 99 Products: 100,101",
        ]
    );
}

// ============================================================================
// CLI Flow
// ============================================================================

#[test]
fn test_cli_decode_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("orders.json");
    fs::write(
        &input,
        json!([
            {"products": [1, 2, 3], "total": 12.5, "id": 1, "user": 9},
            {"products": [], "total": 0, "id": 2, "user": 9}
        ])
        .to_string(),
    )
    .unwrap();
    let config = dir.path().join("config.json");
    fs::write(&config, r#"{"log_level": "warn"}"#).unwrap();

    let output = run_cli(&[
        "--config",
        config.to_str().unwrap(),
        "decode",
        "--kind",
        "order",
        "--input",
        input.to_str().unwrap(),
    ])
    .unwrap();

    assert_eq!(
        output,
        "Order => Id: 1 User: 9 Total: 12.5 Products: 1,2,3\n\
         Order => Id: 2 User: 9 Total: 0 Products: \n"
    );
}

#[test]
fn test_cli_decode_file_aborts_on_bad_document() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("users.json");
    fs::write(
        &input,
        json!([
            {"name": "a", "email": "a@b", "id": 1},
            {"name": "b", "email": "b@c", "id": "two"}
        ])
        .to_string(),
    )
    .unwrap();
    let config = dir.path().join("config.json");
    fs::write(&config, "{}").unwrap();

    let err = run_cli(&[
        "--config",
        config.to_str().unwrap(),
        "decode",
        "--kind",
        "user",
        "--input",
        input.to_str().unwrap(),
    ])
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Document 1: Field 'id' for user expected 32-bit integer, found string"
    );
}

#[test]
fn test_cli_batch_yaml_config() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("app.yaml");
    fs::write(&config, "endpoint:\n  type: local\nlog_level: error\n").unwrap();

    let body = json!([
        {"kind": "product", "document": {"name": "pen", "price": 1.25}},
        {"kind": "user", "document": {"name": "ada", "email": "ada@example.com", "id": 7}}
    ])
    .to_string();

    let output = run_cli(&[
        "--config",
        config.to_str().unwrap(),
        "batch",
        "--json",
        body.as_str(),
    ])
    .unwrap();

    assert_eq!(
        output,
        "Product => Id: -1 Name: pen Price: 1.25 Stock: 0\n\
         User => Id: 7 Name: ada Email: ada@example.com\n"
    );
}
