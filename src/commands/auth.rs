// Copyright (c) 2025 Investo.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::api::HttpStore;
use crate::error::LedgerError;
use crate::store;

pub fn login(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let username = m.get_one::<String>("username").unwrap();
    let password = match m.get_one::<String>("password") {
        Some(p) => p.clone(),
        None => prompt_password()?,
    };
    let base_url = store::get_base_url(conn)?;
    let remote = HttpStore::new(&base_url).map_err(LedgerError::from)?;
    let token = remote
        .login(username, &password)
        .map_err(LedgerError::from)?;
    store::set_token(conn, &token)?;
    println!("Logged in as {}", username);
    Ok(())
}

pub fn logout(conn: &Connection) -> Result<()> {
    store::clear_token(conn)?;
    println!("Logged out");
    Ok(())
}

pub fn status(conn: &Connection) -> Result<()> {
    let token = store::get_token(conn)?;
    let pending = store::load_pending(conn)?;
    println!("Backend:  {}", store::get_base_url(conn)?);
    println!(
        "Token:    {}",
        if token.is_some() { "cached" } else { "none (run 'investo login')" }
    );
    println!("Buffered: {} entr{}", pending.len(), if pending.len() == 1 { "y" } else { "ies" });
    Ok(())
}

fn prompt_password() -> Result<String> {
    use std::io::Write;
    print!("Password: ");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
