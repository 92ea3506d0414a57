// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::store::SessionStore;
use crate::utils::pretty_table;

pub fn handle(store: &SessionStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set-url", sub)) => {
            let url = sub.get_one::<String>("url").unwrap();
            store.set_base_url(url)?;
            println!("Base URL set to {}", store.base_url()?);
        }
        Some(("show", _)) => {
            let rows = vec![
                vec!["base_url".to_string(), store.base_url()?],
                vec![
                    "session".to_string(),
                    if store.token()?.is_some() {
                        "signed in".to_string()
                    } else {
                        "signed out".to_string()
                    },
                ],
            ];
            println!("{}", pretty_table(&["Key", "Value"], rows));
        }
        _ => {}
    }
    Ok(())
}
