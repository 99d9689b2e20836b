// Copyright (c) 2025 Investo.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use investo::{cli, commands, store};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();
    let offline = matches.get_flag("offline");

    let mut conn = store::open_or_init()?;

    match matches.subcommand() {
        Some(("login", sub)) => commands::auth::login(&conn, sub)?,
        Some(("logout", _)) => commands::auth::logout(&conn)?,
        Some(("status", _)) => commands::auth::status(&conn)?,
        Some(("config", sub)) => commands::config::handle(&conn, sub)?,
        Some(("entry", sub)) => commands::entries::handle(&mut conn, sub, offline)?,
        Some(("sync", _)) => commands::sync::handle(&mut conn, offline)?,
        Some(("report", sub)) => commands::reports::handle(&mut conn, sub, offline)?,
        Some(("export", sub)) => commands::exporter::handle(&mut conn, sub, offline)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
