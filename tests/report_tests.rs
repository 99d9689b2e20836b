// Copyright (c) 2025 Investo.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use investo::models::{Entry, EntryId, EntryKind};
use investo::report::{balance_trend, expense_by_category, summarize};
use rust_decimal::Decimal;

fn entry(id: i64, kind: EntryKind, amount: i64, category: &str, description: &str) -> Entry {
    Entry {
        id: EntryId::Server(id),
        amount: Decimal::from(amount),
        kind,
        category: category.to_string(),
        description: description.to_string(),
        created_at: None,
    }
}

/// Newest first, like the ledger holds them: the saving is the most recent.
fn sample() -> Vec<Entry> {
    vec![
        entry(3, EntryKind::Saving, 100, "other", "other"),
        entry(2, EntryKind::Expense, 200, "food", "food"),
        entry(1, EntryKind::Income, 1000, "salary", "salary"),
    ]
}

#[test]
fn summary_totals_and_balance() {
    let s = summarize(&sample());
    assert_eq!(s.income, Decimal::from(1000));
    assert_eq!(s.total_expense, Decimal::from(200));
    assert_eq!(s.total_savings, Decimal::from(100));
    assert_eq!(s.balance, Decimal::from(700));
}

#[test]
fn summary_of_empty_ledger_is_zero() {
    let s = summarize(&[]);
    assert_eq!(s.income, Decimal::ZERO);
    assert_eq!(s.total_expense, Decimal::ZERO);
    assert_eq!(s.total_savings, Decimal::ZERO);
    assert_eq!(s.balance, Decimal::ZERO);
}

#[test]
fn summarize_is_idempotent() {
    let entries = sample();
    assert_eq!(summarize(&entries), summarize(&entries));
}

#[test]
fn balance_identity_holds_for_any_mix() {
    let entries = vec![
        entry(4, EntryKind::Expense, 7, "misc", "d"),
        entry(3, EntryKind::Saving, 13, "other", "c"),
        entry(2, EntryKind::Income, 21, "other", "b"),
        entry(1, EntryKind::Expense, 3, "emi", "a"),
    ];
    let s = summarize(&entries);
    assert_eq!(s.balance, s.income - s.total_expense - s.total_savings);
}

#[test]
fn trend_runs_chronologically_with_savings_counted_as_kept() {
    // Chronological: income 1000, expense 200, saving 100.
    // Savings add in the trend even though they subtract from balance.
    let trend = balance_trend(&sample());
    assert_eq!(
        trend,
        vec![Decimal::from(1000), Decimal::from(800), Decimal::from(900)]
    );
}

#[test]
fn trend_of_empty_ledger_is_empty() {
    assert!(balance_trend(&[]).is_empty());
}

#[test]
fn expenses_fold_by_category() {
    let entries = vec![
        entry(4, EntryKind::Expense, 50, "food", "snacks"),
        entry(3, EntryKind::Income, 1000, "salary", "pay"),
        entry(2, EntryKind::Expense, 150, "food", "groceries"),
        entry(1, EntryKind::Expense, 80, "emi", "loan"),
    ];
    let by_cat = expense_by_category(&entries);
    assert_eq!(by_cat.len(), 2);
    assert_eq!(by_cat["food"], Decimal::from(200));
    assert_eq!(by_cat["emi"], Decimal::from(80));
}
