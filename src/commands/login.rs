// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::api::ApiClient;
use crate::store::SessionStore;

pub fn handle(store: &SessionStore, m: &clap::ArgMatches) -> Result<()> {
    let username = m.get_one::<String>("username").unwrap();
    let password = m.get_one::<String>("password").unwrap();

    let api = ApiClient::new(store.base_url()?)?;
    let token = api.login(username, password)?;
    store.set_token(&token)?;
    println!("Signed in as '{}'", username);
    Ok(())
}
