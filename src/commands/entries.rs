// Copyright (c) 2025 Investo.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;

use crate::ledger::{AddOutcome, DeleteOutcome, Ledger};
use crate::models::{Entry, EntryId, EntryKind, NewEntry};
use crate::utils::{confirm, fmt_money, maybe_print_json, pretty_table};

pub fn handle(conn: &mut Connection, m: &clap::ArgMatches, offline: bool) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub, offline)?,
        Some(("list", sub)) => list(conn, sub, offline)?,
        Some(("delete", sub)) => delete(conn, sub, offline)?,
        _ => {}
    }
    Ok(())
}

/// Validates the `entry add` arguments into a `NewEntry`. Fails before any
/// network or storage effect.
pub fn parse_new_entry(sub: &clap::ArgMatches) -> Result<NewEntry> {
    let kind = EntryKind::parse(sub.get_one::<String>("kind").unwrap())?;
    Ok(NewEntry::parse(
        sub.get_one::<String>("amount").unwrap(),
        kind,
        sub.get_one::<String>("category").map(|s| s.as_str()),
        sub.get_one::<String>("description").unwrap(),
    )?)
}

fn add(conn: &mut Connection, sub: &clap::ArgMatches, offline: bool) -> Result<()> {
    let new = parse_new_entry(sub)?;
    let (remote, session) = super::open_session(conn, offline)?;
    let mut ledger = Ledger::new(conn, &remote, session);
    match ledger.add(new)? {
        AddOutcome::Synced => println!("Recorded on the server"),
        AddOutcome::Buffered(id) => {
            println!("Server unreachable; buffered locally as {}", id)
        }
    }
    Ok(())
}

#[derive(Serialize)]
pub struct EntryRow {
    pub id: String,
    pub kind: String,
    pub category: String,
    pub description: String,
    pub amount: String,
    pub created_at: String,
}

pub fn rows_for(entries: &[Entry]) -> Vec<EntryRow> {
    entries
        .iter()
        .map(|e| EntryRow {
            id: e.id.to_string(),
            kind: e.kind.as_str().to_string(),
            category: e.category.clone(),
            description: e.description.clone(),
            amount: fmt_money(&e.amount),
            created_at: e.created_at.clone().unwrap_or_default(),
        })
        .collect()
}

fn list(conn: &mut Connection, sub: &clap::ArgMatches, offline: bool) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let (remote, session) = super::open_session(conn, offline)?;
    let mut ledger = Ledger::new(conn, &remote, session);
    let report = ledger.load()?;
    if report.synced > 0 {
        println!("Synced {} buffered entr{}", report.synced, plural(report.synced));
    }
    let data = rows_for(ledger.entries());
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.kind.clone(),
                    r.category.clone(),
                    r.description.clone(),
                    r.amount.clone(),
                    r.created_at.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Kind", "Category", "Description", "Amount", "Created"],
                rows,
            )
        );
    }
    Ok(())
}

fn delete(conn: &mut Connection, sub: &clap::ArgMatches, offline: bool) -> Result<()> {
    let id = EntryId::parse(sub.get_one::<String>("id").unwrap())?;
    if !sub.get_flag("yes") && !confirm(&format!("Delete entry {}?", id))? {
        println!("Aborted");
        return Ok(());
    }
    let (remote, session) = super::open_session(conn, offline)?;
    let mut ledger = Ledger::new(conn, &remote, session);
    match ledger.delete(id)? {
        DeleteOutcome::Remote => println!("Deleted {} on the server", id),
        DeleteOutcome::Buffered => println!("Removed {} from the local buffer", id),
    }
    Ok(())
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "y" } else { "ies" }
}
