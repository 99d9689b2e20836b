// Copyright (c) 2025 Investo.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::ledger::Ledger;
use crate::report;
use crate::utils::{fmt_money, pretty_table};

pub fn handle(conn: &mut Connection, m: &clap::ArgMatches, offline: bool) -> Result<()> {
    let (remote, session) = super::open_session(conn, offline)?;
    let mut ledger = Ledger::new(conn, &remote, session);
    ledger.load()?;
    let entries = ledger.entries();
    match m.subcommand() {
        Some(("summary", _)) => {
            let s = report::summarize(entries);
            let rows = vec![
                vec!["Income".to_string(), fmt_money(&s.income)],
                vec!["Expense".to_string(), fmt_money(&s.total_expense)],
                vec!["Savings".to_string(), fmt_money(&s.total_savings)],
                vec!["Balance".to_string(), fmt_money(&s.balance)],
            ];
            println!("{}", pretty_table(&["Figure", "Amount"], rows));
        }
        Some(("trend", _)) => {
            let trend = report::balance_trend(entries);
            let rows: Vec<Vec<String>> = trend
                .iter()
                .enumerate()
                .map(|(i, b)| vec![(i + 1).to_string(), fmt_money(b)])
                .collect();
            println!("{}", pretty_table(&["#", "Balance"], rows));
        }
        Some(("by-category", _)) => {
            let by_cat = report::expense_by_category(entries);
            let rows: Vec<Vec<String>> = by_cat
                .iter()
                .map(|(cat, amt)| vec![cat.clone(), fmt_money(amt)])
                .collect();
            println!("{}", pretty_table(&["Category", "Spent"], rows));
        }
        _ => {}
    }
    Ok(())
}
