// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Utc;

use crate::api::ApiClient;
use crate::error::PassbookError;
use crate::store::SessionStore;
use crate::utils::maybe_print_json;
use crate::view::{self, Dashboard, Tab};

pub fn handle(store: &SessionStore, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let tab: Tab = m.get_one::<String>("tab").unwrap().parse()?;

    let api = ApiClient::new(store.base_url()?)?;
    let mut dash = Dashboard::new();
    match dash.mount(store, &api) {
        Ok(()) => {}
        // Both auth-shaped outcomes read the same to the user; which one
        // happened is not surfaced.
        Err(PassbookError::MissingCredential | PassbookError::Unauthenticated { .. }) => {
            println!("Your session has ended. Run `passbook login` to sign in.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }
    dash.select_tab(tab);

    let Some(data) = dash.data() else {
        return Ok(());
    };
    if maybe_print_json(json_flag, jsonl_flag, data)? {
        return Ok(());
    }

    println!("Welcome, {}", data.customer_profile.full_name);
    println!("{}", view::render_summary(&data.summary));
    println!();
    println!(
        "{}",
        view::render_tab(data, dash.active_tab(), Utc::now().date_naive())
    );
    Ok(())
}
