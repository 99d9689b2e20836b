// Copyright (c) 2025 Investo.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Derived analytics. Every function here is a pure fold over an entry
//! slice: no I/O, no mutation, same input same output.

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{Entry, EntryKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub income: Decimal,
    pub total_expense: Decimal,
    pub total_savings: Decimal,
    pub balance: Decimal,
}

/// Totals by kind. `balance = income - total_expense - total_savings`,
/// zero for an empty ledger.
pub fn summarize(entries: &[Entry]) -> Summary {
    let mut income = Decimal::ZERO;
    let mut total_expense = Decimal::ZERO;
    let mut total_savings = Decimal::ZERO;
    for e in entries {
        match e.kind {
            EntryKind::Income => income += e.amount,
            EntryKind::Expense => total_expense += e.amount,
            EntryKind::Saving => total_savings += e.amount,
        }
    }
    Summary {
        income,
        total_expense,
        total_savings,
        balance: income - total_expense - total_savings,
    }
}

/// Running balance in chronological order (the entry list is newest-first,
/// so it is walked in reverse). In the trend series savings count as kept
/// money: income and saving add, expense subtracts.
pub fn balance_trend(entries: &[Entry]) -> Vec<Decimal> {
    let mut running = Decimal::ZERO;
    let mut out = Vec::with_capacity(entries.len());
    for e in entries.iter().rev() {
        match e.kind {
            EntryKind::Income | EntryKind::Saving => running += e.amount,
            EntryKind::Expense => running -= e.amount,
        }
        out.push(running);
    }
    out
}

/// Expense-kind entries folded into category totals.
pub fn expense_by_category(entries: &[Entry]) -> BTreeMap<String, Decimal> {
    let mut map = BTreeMap::new();
    for e in entries {
        if e.kind == EntryKind::Expense {
            *map.entry(e.category.clone()).or_insert(Decimal::ZERO) += e.amount;
        }
    }
    map
}
