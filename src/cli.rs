// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("passbook")
        .about("Passbook: your bank accounts, transactions, and fixed deposits in the terminal")
        .version(clap::crate_version!())
        .subcommand(
            Command::new("login")
                .about("Sign in and store the session token")
                .arg(
                    Arg::new("username")
                        .long("username")
                        .short('u')
                        .required(true),
                )
                .arg(
                    Arg::new("password")
                        .long("password")
                        .short('p')
                        .required(true),
                ),
        )
        .subcommand(Command::new("logout").about("Sign out and clear the stored session"))
        .subcommand(
            Command::new("dashboard")
                .about("Show the customer dashboard")
                .arg(
                    Arg::new("tab")
                        .long("tab")
                        .value_parser([
                            "overview",
                            "accounts",
                            "transactions",
                            "fixed-deposits",
                        ])
                        .default_value("overview"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the raw customer data as pretty JSON"),
                )
                .arg(
                    Arg::new("jsonl")
                        .long("jsonl")
                        .action(ArgAction::SetTrue)
                        .help("Print the raw customer data as JSON lines"),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Download the PDF transaction report for a date range")
                .arg(Arg::new("start").long("start").value_name("YYYY-MM-DD"))
                .arg(Arg::new("end").long("end").value_name("YYYY-MM-DD"))
                .arg(
                    Arg::new("out")
                        .long("out")
                        .value_name("DIR")
                        .default_value("."),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export fetched data to a local file")
                .subcommand(
                    Command::new("transactions")
                        .about("Export the transaction history")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .value_parser(["csv", "json"])
                                .default_value("csv"),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
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
        .subcommand(Command::new("doctor").about("Check the local session store for problems"))
}
