// Copyright (c) 2025 Investo.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("investo")
        .about("Offline-capable expense ledger with remote sync")
        .version(clap::crate_version!())
        .arg_required_else_help(false)
        .arg(
            Arg::new("offline")
                .long("offline")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Do not attempt any network call; reads and writes use the local buffer"),
        )
        .subcommand(
            Command::new("login")
                .about("Obtain and cache a bearer token from the backend")
                .arg(Arg::new("username").required(true))
                .arg(
                    Arg::new("password")
                        .long("password")
                        .help("Password (prompted on stdin when omitted)"),
                ),
        )
        .subcommand(Command::new("logout").about("Forget the cached bearer token"))
        .subcommand(Command::new("status").about("Show credential and buffer state"))
        .subcommand(
            Command::new("config")
                .about("Client configuration")
                .subcommand(
                    Command::new("set-url")
                        .about("Set the backend base URL")
                        .arg(Arg::new("url").required(true)),
                )
                .subcommand(Command::new("show").about("Show the current configuration")),
        )
        .subcommand(
            Command::new("entry")
                .about("Ledger entries")
                .subcommand(
                    Command::new("add")
                        .about("Add an entry (buffered locally when the server is unreachable)")
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .required(true)
                                .help("income|expense|saving"),
                        )
                        .arg(Arg::new("category").long("category"))
                        .arg(
                            Arg::new("description")
                                .long("description")
                                .required(true),
                        ),
                )
                .subcommand(
                    Command::new("list")
                        .about("List entries, newest first")
                        .arg(Arg::new("json").long("json").action(ArgAction::SetTrue))
                        .arg(Arg::new("jsonl").long("jsonl").action(ArgAction::SetTrue)),
                )
                .subcommand(
                    Command::new("delete")
                        .about("Delete one entry by id (local-<n> for buffered entries)")
                        .arg(Arg::new("id").long("id").required(true))
                        .arg(
                            Arg::new("yes")
                                .long("yes")
                                .action(ArgAction::SetTrue)
                                .help("Skip the confirmation prompt"),
                        ),
                ),
        )
        .subcommand(Command::new("sync").about("Flush buffered entries to the server"))
        .subcommand(
            Command::new("report")
                .about("Derived views over the ledger")
                .subcommand(Command::new("summary").about("Income, expense, savings, balance"))
                .subcommand(Command::new("trend").about("Running balance in chronological order"))
                .subcommand(Command::new("by-category").about("Expense totals per category")),
        )
        .subcommand(
            Command::new("export")
                .about("Export the ledger")
                .subcommand(
                    Command::new("entries")
                        .about("Write entries plus summary figures to a file")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("csv")
                                .help("csv|json"),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
}
