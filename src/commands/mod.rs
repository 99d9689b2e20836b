// Copyright (c) 2025 Investo.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod auth;
pub mod config;
pub mod entries;
pub mod exporter;
pub mod reports;
pub mod sync;

use anyhow::Result;
use rusqlite::Connection;

use crate::api::HttpStore;
use crate::error::LedgerError;
use crate::ledger::Session;
use crate::store;

/// Builds the remote client and session from persisted settings. The token
/// and connectivity flag travel together; nothing reads them globally.
pub(crate) fn open_session(conn: &Connection, offline: bool) -> Result<(HttpStore, Session)> {
    let base_url = store::get_base_url(conn)?;
    let remote = HttpStore::new(&base_url).map_err(LedgerError::from)?;
    let token = store::get_token(conn)?;
    Ok((remote, Session::new(token, !offline)))
}
