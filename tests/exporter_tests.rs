// Copyright (c) 2025 Investo.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use investo::commands::exporter;
use investo::models::{Entry, EntryId, EntryKind};
use investo::{cli, store};
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde_json::json;
use tempfile::tempdir;

fn entries() -> Vec<Entry> {
    vec![
        Entry {
            id: EntryId::Server(2),
            amount: Decimal::from(200),
            kind: EntryKind::Expense,
            category: "food".to_string(),
            description: "groceries".to_string(),
            created_at: None,
        },
        Entry {
            id: EntryId::Server(1),
            amount: Decimal::from(1000),
            kind: EntryKind::Income,
            category: "salary".to_string(),
            description: "pay".to_string(),
            created_at: None,
        },
    ]
}

#[test]
fn csv_export_has_projection_and_summary_rows() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("export.csv");
    let out_str = out.to_string_lossy().to_string();

    exporter::write_export(&entries(), "csv", &out_str).unwrap();

    let contents = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines[0], "type,description,category,amount");
    assert_eq!(lines[1], "expense,groceries,food,200.00");
    assert_eq!(lines[2], "income,pay,salary,1000.00");
    assert_eq!(lines[3], "summary,income,,1000.00");
    assert_eq!(lines[4], "summary,expense,,200.00");
    assert_eq!(lines[5], "summary,savings,,0.00");
    assert_eq!(lines[6], "summary,balance,,800.00");
}

#[test]
fn json_export_nests_entries_and_summary() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("export.json");
    let out_str = out.to_string_lossy().to_string();

    exporter::write_export(&entries(), "json", &out_str).unwrap();

    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(
        parsed,
        json!({
            "entries": [
                {"type": "expense", "description": "groceries", "category": "food", "amount": "200.00"},
                {"type": "income", "description": "pay", "category": "salary", "amount": "1000.00"}
            ],
            "summary": {
                "income": "1000.00",
                "expense": "200.00",
                "savings": "0.00",
                "balance": "800.00"
            }
        })
    );
}

#[test]
fn export_command_rejects_unknown_format_before_writing() {
    let mut conn = Connection::open_in_memory().unwrap();
    store::init_schema(&mut conn).unwrap();

    let dir = tempdir().unwrap();
    let out = dir.path().join("export.unknown");
    let out_str = out.to_string_lossy().to_string();

    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "investo", "export", "entries", "--format", "xml", "--out", &out_str,
    ]);
    if let Some(("export", export_m)) = matches.subcommand() {
        assert!(exporter::handle(&mut conn, export_m, true).is_err());
    } else {
        panic!("no export subcommand");
    }
    assert!(!out.exists());
}

#[test]
fn export_command_writes_buffered_entries_while_offline() {
    let mut conn = Connection::open_in_memory().unwrap();
    store::init_schema(&mut conn).unwrap();
    store::replace_pending(
        &mut conn,
        &[Entry {
            id: EntryId::Local(42),
            amount: Decimal::from(50),
            kind: EntryKind::Expense,
            category: "misc".to_string(),
            description: "coffee".to_string(),
            created_at: None,
        }],
    )
    .unwrap();

    let dir = tempdir().unwrap();
    let out = dir.path().join("export.csv");
    let out_str = out.to_string_lossy().to_string();

    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "investo", "export", "entries", "--format", "csv", "--out", &out_str,
    ]);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(&mut conn, export_m, true).unwrap();
    } else {
        panic!("no export subcommand");
    }

    let contents = std::fs::read_to_string(&out).unwrap();
    assert!(contents.contains("expense,coffee,misc,50.00"));
    assert!(contents.contains("summary,balance,,-50.00"));
}
