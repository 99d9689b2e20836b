// Copyright (c) 2025 Investo.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{params, Connection, OptionalExtension};
use std::fs;
use std::path::PathBuf;

use crate::models::{Entry, EntryId, EntryKind};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("app.investo", "Investo", "investo"));

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/";

pub fn db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("investo.sqlite"))
}

pub fn open_or_init() -> Result<Connection> {
    let path = db_path()?;
    let mut conn =
        Connection::open(&path).with_context(|| format!("Open DB at {}", path.display()))?;
    init_schema(&mut conn)?;
    Ok(conn)
}

pub fn init_schema(conn: &mut Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS settings(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );

    -- Entries added while the remote store was unreachable. The id column is
    -- the client-assigned temporary identifier; server ids never land here.
    CREATE TABLE IF NOT EXISTS pending_entries(
        id INTEGER PRIMARY KEY,
        amount TEXT NOT NULL,
        type TEXT NOT NULL,
        category TEXT NOT NULL,
        description TEXT NOT NULL,
        created_at TEXT
    );
    "#,
    )?;
    Ok(())
}

// Settings key-value helpers.

pub fn get_setting(conn: &Connection, key: &str) -> Result<Option<String>> {
    let v: Option<String> = conn
        .query_row("SELECT value FROM settings WHERE key=?1", params![key], |r| {
            r.get(0)
        })
        .optional()?;
    Ok(v)
}

pub fn set_setting(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO settings(key, value) VALUES(?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![key, value],
    )?;
    Ok(())
}

pub fn clear_setting(conn: &Connection, key: &str) -> Result<()> {
    conn.execute("DELETE FROM settings WHERE key=?1", params![key])?;
    Ok(())
}

pub fn get_token(conn: &Connection) -> Result<Option<String>> {
    get_setting(conn, "token")
}

pub fn set_token(conn: &Connection, token: &str) -> Result<()> {
    set_setting(conn, "token", token)
}

pub fn clear_token(conn: &Connection) -> Result<()> {
    clear_setting(conn, "token")
}

pub fn get_base_url(conn: &Connection) -> Result<String> {
    Ok(get_setting(conn, "base_url")?.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()))
}

pub fn set_base_url(conn: &Connection, url: &str) -> Result<()> {
    set_setting(conn, "base_url", url)
}

/// Loads the pending buffer in insertion order (temporary ids are
/// timestamps, so rowid order is insertion order).
pub fn load_pending(conn: &Connection) -> Result<Vec<Entry>> {
    let mut stmt = conn.prepare(
        "SELECT id, amount, type, category, description, created_at
         FROM pending_entries ORDER BY id ASC",
    )?;
    let mut rows = stmt.query([])?;
    let mut out = Vec::new();
    while let Some(r) = rows.next()? {
        let id: i64 = r.get(0)?;
        let amount: String = r.get(1)?;
        let kind: String = r.get(2)?;
        let category: String = r.get(3)?;
        let description: String = r.get(4)?;
        let created_at: Option<String> = r.get(5)?;
        let amount = amount
            .parse()
            .with_context(|| format!("Invalid buffered amount '{}'", amount))?;
        let kind = EntryKind::parse(&kind)
            .map_err(|e| anyhow::anyhow!("Invalid buffered kind: {}", e))?;
        out.push(Entry {
            id: EntryId::Local(id),
            amount,
            kind,
            category,
            description,
            created_at,
        });
    }
    Ok(out)
}

/// Replaces the pending buffer wholesale inside one transaction. The buffer
/// is never patched row-by-row; callers hand over the full new contents.
pub fn replace_pending(conn: &mut Connection, entries: &[Entry]) -> Result<()> {
    let tx = conn.transaction()?;
    tx.execute("DELETE FROM pending_entries", [])?;
    for e in entries {
        let id = match e.id {
            EntryId::Local(n) => n,
            EntryId::Server(n) => {
                anyhow::bail!("server-identified entry {} does not belong in the pending buffer", n)
            }
        };
        tx.execute(
            "INSERT INTO pending_entries(id, amount, type, category, description, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                id,
                e.amount.to_string(),
                e.kind.as_str(),
                e.category,
                e.description,
                e.created_at
            ],
        )?;
    }
    tx.commit()?;
    Ok(())
}
