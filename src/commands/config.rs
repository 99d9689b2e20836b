// Copyright (c) 2025 Investo.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::store;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set-url", sub)) => {
            let url = sub.get_one::<String>("url").unwrap();
            store::set_base_url(conn, url)?;
            println!("Backend base URL set to {}", url);
        }
        Some(("show", _)) => {
            println!("base_url = {}", store::get_base_url(conn)?);
            println!("db       = {}", store::db_path()?.display());
        }
        _ => {}
    }
    Ok(())
}
