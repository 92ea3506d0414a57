// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::pretty_table;
use anyhow::Result;

use crate::store::SessionStore;

/// Purely local checks over the session store; never talks to the backend.
pub fn handle(store: &SessionStore) -> Result<()> {
    let mut rows = Vec::new();

    if store.token()?.is_none() {
        rows.push(vec![
            "no_credential".into(),
            "no stored session; `passbook login` to sign in".into(),
        ]);
    }

    let base_url = store.base_url()?;
    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        rows.push(vec![
            "base_url_not_http".into(),
            format!("'{}' is not an http(s) URL", base_url),
        ]);
    }
    if base_url.ends_with('/') {
        rows.push(vec![
            "base_url_trailing_slash".into(),
            format!("'{}' would produce double slashes in request paths", base_url),
        ]);
    }

    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
