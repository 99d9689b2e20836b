// Copyright (c) 2025 Investo.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use investo::models::{Entry, EntryId, EntryKind};
use investo::store;
use rusqlite::Connection;
use rust_decimal::Decimal;

fn conn() -> Connection {
    let mut c = Connection::open_in_memory().unwrap();
    store::init_schema(&mut c).unwrap();
    c
}

fn local(id: i64, description: &str) -> Entry {
    Entry {
        id: EntryId::Local(id),
        amount: Decimal::from(10),
        kind: EntryKind::Expense,
        category: "misc".to_string(),
        description: description.to_string(),
        created_at: Some("2025-01-02T03:04:05Z".to_string()),
    }
}

#[test]
fn settings_round_trip() {
    let c = conn();
    assert_eq!(store::get_token(&c).unwrap(), None);
    store::set_token(&c, "abc").unwrap();
    assert_eq!(store::get_token(&c).unwrap().as_deref(), Some("abc"));
    store::clear_token(&c).unwrap();
    assert_eq!(store::get_token(&c).unwrap(), None);
}

#[test]
fn base_url_defaults_until_set() {
    let c = conn();
    assert_eq!(store::get_base_url(&c).unwrap(), store::DEFAULT_BASE_URL);
    store::set_base_url(&c, "https://api.example.com/").unwrap();
    assert_eq!(store::get_base_url(&c).unwrap(), "https://api.example.com/");
}

#[test]
fn pending_buffer_replaced_wholesale() {
    let mut c = conn();
    store::replace_pending(&mut c, &[local(1, "a"), local(2, "b")]).unwrap();
    let loaded = store::load_pending(&c).unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].description, "a");
    assert_eq!(loaded[1].description, "b");

    // Replacing is not patching: the old contents are gone.
    store::replace_pending(&mut c, &[local(3, "c")]).unwrap();
    let loaded = store::load_pending(&c).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, EntryId::Local(3));
    assert_eq!(loaded[0].amount, Decimal::from(10));
    assert_eq!(loaded[0].kind, EntryKind::Expense);
}

#[test]
fn pending_buffer_keeps_insertion_order() {
    let mut c = conn();
    store::replace_pending(&mut c, &[local(100, "old"), local(200, "new")]).unwrap();
    let loaded = store::load_pending(&c).unwrap();
    let ids: Vec<_> = loaded.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![EntryId::Local(100), EntryId::Local(200)]);
}

#[test]
fn server_identified_entries_are_rejected_from_the_buffer() {
    let mut c = conn();
    let mut e = local(1, "a");
    e.id = EntryId::Server(7);
    assert!(store::replace_pending(&mut c, &[e]).is_err());
}
