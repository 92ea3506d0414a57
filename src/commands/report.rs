// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use anyhow::Result;

use crate::api::ApiClient;
use crate::store::SessionStore;
use crate::utils::ensure_dir;
use crate::view;

pub fn handle(store: &SessionStore, m: &clap::ArgMatches) -> Result<()> {
    let start = m.get_one::<String>("start").map(String::as_str).unwrap_or("");
    let end = m.get_one::<String>("end").map(String::as_str).unwrap_or("");
    let out_dir = PathBuf::from(m.get_one::<String>("out").unwrap());
    ensure_dir(&out_dir)?;

    let api = ApiClient::new(store.base_url()?)?;
    let path = view::download_report(&api, store, start, end, &out_dir)?;
    println!("Report saved to {}", path.display());
    Ok(())
}
