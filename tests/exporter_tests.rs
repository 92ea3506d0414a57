// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use passbook::commands::exporter::{write_transactions_csv, write_transactions_json};
use passbook::models::{Direction, Transaction};
use rust_decimal::Decimal;
use tempfile::tempdir;

fn sample_transactions() -> Vec<Transaction> {
    let mut txns = vec![
        Transaction {
            transaction_id: "T-1".into(),
            reference_no: "REF-001".into(),
            amount: Decimal::new(500000, 2),
            r#type: "Cash Deposit".into(),
            description: "Branch deposit".into(),
            created_at: "2024-05-01T09:00:00".into(),
            account_no: "100200300".into(),
            direction: Direction::default(),
        },
        Transaction {
            transaction_id: "T-2".into(),
            reference_no: "REF-002".into(),
            amount: Decimal::new(125075, 2),
            r#type: "Withdrawal".into(),
            description: "ATM, with comma".into(),
            created_at: "2024-05-02T14:30:00".into(),
            account_no: "100200300".into(),
            direction: Direction::default(),
        },
    ];
    for tx in &mut txns {
        tx.direction = Direction::from_label(&tx.r#type);
    }
    txns
}

#[test]
fn csv_export_carries_direction_column() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("txns.csv");
    let txns = sample_transactions();

    write_transactions_csv(&txns, out.to_str().unwrap()).unwrap();

    let body = std::fs::read_to_string(&out).unwrap();
    let mut lines = body.lines();
    assert_eq!(
        lines.next().unwrap(),
        "date,reference_no,type,direction,description,account_no,amount"
    );
    let first = lines.next().unwrap();
    assert!(first.contains("credit"), "got {}", first);
    assert!(first.contains("5000.00"), "got {}", first);
    let second = lines.next().unwrap();
    assert!(second.contains("debit"), "got {}", second);
    // the comma in the description must be quoted away
    assert!(second.contains("\"ATM, with comma\""), "got {}", second);
}

#[test]
fn json_export_is_parseable_and_tagged() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("txns.json");
    let txns = sample_transactions();

    write_transactions_json(&txns, out.to_str().unwrap()).unwrap();

    let body = std::fs::read_to_string(&out).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
    let arr = parsed.as_array().unwrap();
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["direction"], "credit");
    assert_eq!(arr[1]["direction"], "debit");
    assert_eq!(arr[0]["reference_no"], "REF-001");
}
