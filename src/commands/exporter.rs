// Copyright (c) 2025 Investo.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Result};
use rusqlite::Connection;
use serde_json::json;

use crate::ledger::Ledger;
use crate::models::Entry;
use crate::report;
use crate::utils::fmt_money;

pub fn handle(conn: &mut Connection, m: &clap::ArgMatches, offline: bool) -> Result<()> {
    match m.subcommand() {
        Some(("entries", sub)) => export_entries(conn, sub, offline),
        _ => Ok(()),
    }
}

fn export_entries(conn: &mut Connection, sub: &clap::ArgMatches, offline: bool) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    if fmt != "csv" && fmt != "json" {
        bail!("Unknown format: {} (use csv|json)", fmt);
    }

    let (remote, session) = super::open_session(conn, offline)?;
    let mut ledger = Ledger::new(conn, &remote, session);
    ledger.load()?;
    write_export(ledger.entries(), &fmt, out)?;
    println!("Exported entries to {}", out);
    Ok(())
}

/// The export contract is a flat projection per entry plus the four summary
/// figures. The document generator downstream takes it from there.
pub fn write_export(entries: &[Entry], fmt: &str, out: &str) -> Result<()> {
    let summary = report::summarize(entries);
    match fmt {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["type", "description", "category", "amount"])?;
            for e in entries {
                wtr.write_record([
                    e.kind.as_str(),
                    e.description.as_str(),
                    e.category.as_str(),
                    &fmt_money(&e.amount),
                ])?;
            }
            wtr.write_record(["summary", "income", "", &fmt_money(&summary.income)])?;
            wtr.write_record(["summary", "expense", "", &fmt_money(&summary.total_expense)])?;
            wtr.write_record(["summary", "savings", "", &fmt_money(&summary.total_savings)])?;
            wtr.write_record(["summary", "balance", "", &fmt_money(&summary.balance)])?;
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<_> = entries
                .iter()
                .map(|e| {
                    json!({
                        "type": e.kind.as_str(),
                        "description": e.description,
                        "category": e.category,
                        "amount": fmt_money(&e.amount),
                    })
                })
                .collect();
            let doc = json!({
                "entries": items,
                "summary": {
                    "income": fmt_money(&summary.income),
                    "expense": fmt_money(&summary.total_expense),
                    "savings": fmt_money(&summary.total_savings),
                    "balance": fmt_money(&summary.balance),
                },
            });
            std::fs::write(out, serde_json::to_string_pretty(&doc)?)?;
        }
        _ => bail!("Unknown format: {} (use csv|json)", fmt),
    }
    Ok(())
}
