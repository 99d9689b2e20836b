// Copyright (c) 2025 Investo.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::ledger::Ledger;

pub fn handle(conn: &mut Connection, offline: bool) -> Result<()> {
    let (remote, session) = super::open_session(conn, offline)?;
    let mut ledger = Ledger::new(conn, &remote, session);
    let report = ledger.sync()?;
    if report.synced == 0 && report.retained == 0 {
        println!("Nothing to sync");
    } else {
        println!("Synced {}, retained {}", report.synced, report.retained);
        if report.retained > 0 {
            println!("Retained entries stay buffered and will be retried on the next sync");
        }
    }
    Ok(())
}
